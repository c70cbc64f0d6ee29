//! Exchange-rate lookup config: RATE_API_URL, RATE_TIMEOUT_SECS, FALLBACK_RATE.

use anyhow::Result;
use exchange_rate::{DEFAULT_FALLBACK_RATE, DEFAULT_TIMEOUT_SECS, OPEN_ER_API_BASE};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RateConfig {
    /// Base of the "latest rates" endpoint; the base currency code is appended.
    pub api_url: String,
    /// Per-request timeout for the lookup.
    pub timeout_secs: u64,
    /// Rate used when the lookup fails.
    pub fallback_rate: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            api_url: OPEN_ER_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fallback_rate: DEFAULT_FALLBACK_RATE,
        }
    }
}

impl RateConfig {
    /// Loads from env; unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_url = env::var("RATE_API_URL").unwrap_or(defaults.api_url);
        let timeout_secs = env::var("RATE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.timeout_secs);
        let fallback_rate = env::var("FALLBACK_RATE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.fallback_rate);

        Self {
            api_url,
            timeout_secs,
            fallback_rate,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Fails on an invalid URL, a zero timeout, or a non-positive fallback rate.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("RATE_API_URL is not a valid URL: {}", self.api_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("RATE_TIMEOUT_SECS must be greater than 0");
        }
        if !self.fallback_rate.is_finite() || self.fallback_rate <= 0.0 {
            anyhow::bail!("FALLBACK_RATE must be a positive number, got {}", self.fallback_rate);
        }
        Ok(())
    }
}
