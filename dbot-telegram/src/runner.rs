//! REPL runner: converts teloxide messages to core::Message and passes them to the HandlerChain.

use dbot_core::{DbotError, HandlerError, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL with the given teloxide Bot and HandlerChain.
///
/// The chain is awaited inside the update handler. teloxide dispatches updates of one chat
/// sequentially, so a user's messages are processed in order while different chats run concurrently.
/// Chain errors are logged and never stop the REPL; a message without text is only noted.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> anyhow::Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            "Connected to Telegram"
        ),
        Err(e) => warn!(error = %e, "getMe failed, starting polling anyway"),
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            match chain.handle(&core_msg).await {
                Ok(_) => {}
                Err(DbotError::Handler(HandlerError::NoText)) => {
                    info!(chat_id = core_msg.chat.id, "Ignoring non-text message");
                }
                Err(e) => {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            }
            respond(())
        }
    })
    .await;

    Ok(())
}
