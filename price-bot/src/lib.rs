//! # price-bot
//!
//! Telegram bot that turns a CNY item price, a weight, and a per-kg delivery cost into a resale price
//! with margin and the resulting profit.
//!
//! - [`conversation`]: the per-user state machine ([`Conversation::handle`]) and the price calculation.
//! - [`session`]: per-user records behind the [`SessionStore`] trait.
//! - [`handlers`]: handler-chain adapters that feed Telegram messages into the conversation.
//! - [`runner`]: wiring (config → rate provider → conversation → chain → teloxide REPL).

pub mod cli;
pub mod config;
pub mod conversation;
pub mod handlers;
pub mod runner;
pub mod session;

pub use cli::{Cli, Commands};
pub use config::{BotConfig, RateConfig};
pub use conversation::{
    main_keyboard, Command, Conversation, Field, InputError, ItemDetails, OutboundReply,
    PriceBreakdown,
};
pub use handlers::{LoggingHandler, PriceCalcHandler};
pub use runner::{build_handler_chain, build_rate_provider, run_bot};
pub use session::{ConversationState, InMemorySessionStore, SessionField, SessionStore, UserSession};
