//! Command texts recognized before the state machine runs.

use super::messages::{BUTTON_NEW_ITEM, BUTTON_RATE, BUTTON_RECOMPUTE_MARGIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start`, optionally addressed (`/start@bot_name`) or with a deep-link payload: reset and greet.
    Start,
    /// "New item": reset and ask for the price.
    NewItem,
    /// "Recompute margin": ask for a new margin for the current item.
    RecomputeMargin,
    /// Anything starting with `/rate` (including `/rate@bot_name`): show the current rate.
    Rate,
}

impl Command {
    /// Button labels match exactly (surrounding whitespace ignored); the rate query is a prefix.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text == BUTTON_NEW_ITEM {
            Some(Self::NewItem)
        } else if text == BUTTON_RECOMPUTE_MARGIN {
            Some(Self::RecomputeMargin)
        } else if text.starts_with(BUTTON_RATE) {
            Some(Self::Rate)
        } else if is_start(text) {
            Some(Self::Start)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::NewItem => "new_item",
            Self::RecomputeMargin => "recompute_margin",
            Self::Rate => "rate",
        }
    }
}

/// First word is `/start` or `/start@<bot>`; anything after it is the start payload.
fn is_start(text: &str) -> bool {
    let word = text.split_whitespace().next().unwrap_or("");
    word == "/start" || word.starts_with("/start@")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_labels() {
        assert_eq!(Command::parse("New item"), Some(Command::NewItem));
        assert_eq!(Command::parse(" New item\n"), Some(Command::NewItem));
        assert_eq!(Command::parse("Recompute margin"), Some(Command::RecomputeMargin));
        assert_eq!(Command::parse("new item"), None);
    }

    #[test]
    fn test_rate_is_a_prefix_match() {
        assert_eq!(Command::parse("/rate"), Some(Command::Rate));
        assert_eq!(Command::parse("/rate@poizon_price_bot"), Some(Command::Rate));
        assert_eq!(Command::parse("/rate now"), Some(Command::Rate));
        assert_eq!(Command::parse("rate"), None);
    }

    #[test]
    fn test_start() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/start@poizon_price_bot"), Some(Command::Start));
        assert_eq!(Command::parse("/started"), None);
    }

    #[test]
    fn test_start_with_deep_link_payload() {
        assert_eq!(Command::parse("/start ref_42"), Some(Command::Start));
        assert_eq!(Command::parse("/start@poizon_price_bot promo"), Some(Command::Start));
        assert_eq!(Command::parse("/startref_42"), None);
    }

    #[test]
    fn test_numbers_are_not_commands() {
        assert_eq!(Command::parse("550"), None);
        assert_eq!(Command::parse("0.8"), None);
    }
}
