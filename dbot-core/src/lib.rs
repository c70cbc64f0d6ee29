//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message and user types, reply keyboards,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and price-bot.

pub mod bot;
pub mod error;
pub mod keyboard;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, HandlerError, Result};
pub use keyboard::ReplyKeyboard;
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
