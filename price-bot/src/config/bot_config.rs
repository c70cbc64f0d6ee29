//! BotConfig: Telegram connectivity, log file, and rate lookup. Use load() for env-based loading.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;

use super::RateConfig;

pub const DEFAULT_LOG_FILE: &str = "logs/price-bot.log";

pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
    pub rate: RateConfig,
}

impl BotConfig {
    /// Loads from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to fail fast before connecting.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let rate = RateConfig::from_env();
        Ok(Self {
            telegram,
            log_file,
            rate,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.rate.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.log_file
    }
    pub fn rate(&self) -> &RateConfig {
        &self.rate
    }
}
