//! Bot configuration: Telegram connectivity + log file + exchange-rate lookup. Loaded from env.

mod bot_config;
mod rate;


pub use bot_config::BotConfig;
pub use rate::RateConfig;
