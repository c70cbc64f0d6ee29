//! # dbot-telegram
//!
//! Telegram transport layer: teloxide ↔ core adapters, [`dbot_core::Bot`] implementation that renders
//! reply keyboards, minimal connectivity config, and the REPL runner that feeds a [`handler_chain::HandlerChain`].
//! No conversation logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{to_keyboard_markup, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;
