//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, ReplyKeyboard, Result};
use teloxide::{prelude::*, types::ChatId};
use tracing::error;

use crate::adapters::to_keyboard_markup;

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| {
                error!(error = %e, chat_id = chat.id, "sendMessage failed");
                DbotError::Bot(e.to_string())
            })?;
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(to_keyboard_markup(keyboard))
            .await
            .map_err(|e| {
                error!(error = %e, chat_id = chat.id, "sendMessage with keyboard failed");
                DbotError::Bot(e.to_string())
            })?;
        Ok(())
    }
}
