//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide, tests use a recording mock.

use crate::error::Result;
use crate::keyboard::ReplyKeyboard;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message and attaches a persistent reply keyboard.
    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()>;

    /// Sends a plain reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
