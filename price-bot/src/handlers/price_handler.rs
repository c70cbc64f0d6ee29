//! Runs the price conversation for each text message and sends the reply with the main keyboard.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use tracing::{error, instrument};

use crate::conversation::Conversation;

/// Terminal handler: every text message gets exactly one reply.
///
/// Returns `HandlerResponse::Reply(text)` so earlier handlers can see the reply in `after()`.
/// Messages without text (stickers, photos) fail with [`HandlerError::NoText`] and get no reply.
#[derive(Clone)]
pub struct PriceCalcHandler {
    conversation: Arc<Conversation>,
    bot: Arc<dyn Bot>,
}

impl PriceCalcHandler {
    pub fn new(conversation: Arc<Conversation>, bot: Arc<dyn Bot>) -> Self {
        Self { conversation, bot }
    }
}

#[async_trait]
impl Handler for PriceCalcHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.is_empty() {
            return Err(HandlerError::NoText.into());
        }

        let reply = self
            .conversation
            .handle(message.user.id, &message.content)
            .await;

        self.bot
            .send_message_with_keyboard(&message.chat, &reply.text, &reply.keyboard)
            .await
            .map_err(|e| {
                error!(error = %e, chat_id = message.chat.id, "Failed to send reply");
                e
            })?;

        Ok(HandlerResponse::Reply(reply.text))
    }
}
