//! User-facing texts and the main reply keyboard.

use dbot_core::ReplyKeyboard;

use super::{Field, InputError};

pub const BUTTON_NEW_ITEM: &str = "New item";
pub const BUTTON_RECOMPUTE_MARGIN: &str = "Recompute margin";
pub const BUTTON_RATE: &str = "/rate";

pub const GREETING: &str = "Hi! I'm Poizon Price Bot 👋\n\n\
I can:\n\
• Convert a Poizon item price to rubles at the current rate\n\
• Work out the delivery cost\n\
• Compute the final price with your margin and your profit\n\
• Recompute the price with a different margin\n\n\
Press 'New item' to start, or just send the item price in CNY (e.g. 550).";

pub const NEED_ITEM_FIRST: &str = "Enter the item details first via 'New item'.";
pub const RECOMPUTE_PROMPT: &str = "Enter a new margin percentage (e.g. 25):";
pub const RECOMPUTE_HINT: &str =
    "To recompute with a different margin, use the 'Recompute margin' button.";

/// The three-button keyboard attached to every reply.
pub fn main_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::single_column([BUTTON_NEW_ITEM, BUTTON_RECOMPUTE_MARGIN, BUTTON_RATE])
}

/// Prompt asking for `field` during the normal flow.
pub fn prompt(field: Field) -> &'static str {
    match field {
        Field::Price => "Enter the item price in CNY (e.g. 550):",
        Field::Weight => "Enter the item weight in kg (e.g. 0.8):",
        Field::DeliveryPerKg => "Enter the delivery cost per 1 kg (e.g. 1000):",
        Field::Margin => "Enter your margin percentage (e.g. 25):",
    }
}

/// Re-prompt after `field` rejected an input.
pub fn invalid_input(field: Field, error: InputError) -> &'static str {
    match (field, error) {
        (Field::Price, InputError::TooLarge) => "That price is too large. Send a smaller number.",
        (Field::Price, _) => "Please send only a number: the price in CNY.",
        (Field::Weight, InputError::NotPositive) => "Weight must be greater than 0. Try again.",
        (Field::Weight, _) => "Please send a number for the weight.",
        (Field::DeliveryPerKg, InputError::Negative) => "Delivery cost must be >= 0. Try again.",
        (Field::DeliveryPerKg, _) => "Please send a number for the delivery cost.",
        (Field::Margin, InputError::Negative) => "Margin percentage must be >= 0. Try again.",
        (Field::Margin, _) => "Please send a number for the margin percentage.",
    }
}

pub fn current_rate(rate: f64) -> String {
    format!("Current rate CNY → RUB: {:.2}", rate)
}
