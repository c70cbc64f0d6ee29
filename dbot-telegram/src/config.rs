//! Minimal transport config: bot token and optional Bot API URL.
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use std::env;

/// Telegram connectivity config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Overrides the Bot API base URL (e.g. a local Bot API server or a mock in tests).
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN; BOT_TOKEN is required otherwise.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token and the default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Fails if telegram_api_url is set but is not a valid URL, or the token is empty.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointing it at telegram_api_url when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => Ok(bot.set_api_url(reqwest::Url::parse(url_str)?)),
            None => Ok(bot),
        }
    }
}
