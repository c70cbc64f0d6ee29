//! Conversions between teloxide types and dbot_core types.

use dbot_core::{Chat, Message, ReplyKeyboard, ToCoreMessage, ToCoreUser, User};
use teloxide::types::{KeyboardButton, KeyboardMarkup};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// Messages without a sender (channel posts) fall back to the chat id as user id, so a session
/// is still keyed per conversation.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let chat_id = self.0.chat.id.0;
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or(User {
                    id: chat_id,
                    username: None,
                }),
            chat: Chat { id: chat_id },
            content: self.0.text().unwrap_or("").to_string(),
        }
    }
}

/// Renders a core [`ReplyKeyboard`] as a Telegram reply keyboard.
pub fn to_keyboard_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect())
        .collect();

    let markup = KeyboardMarkup::new(rows);
    if keyboard.resize {
        markup.resize_keyboard()
    } else {
        markup
    }
}
