//! [`RateSource`] backed by the keyless open.er-api.com "latest rates" endpoint.
//!
//! `GET {base_url}/{BASE}` answers with
//! `{"result": "success", "base_code": "CNY", "rates": {"RUB": 11.27, ...}}`,
//! or `{"result": "error", "error-type": "unsupported-code"}`.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::RateSource;

pub const OPEN_ER_API_BASE: &str = "https://open.er-api.com/v6/latest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP rate source for one currency pair (default CNY → RUB).
#[derive(Debug, Clone)]
pub struct OpenErApiSource {
    client: Client,
    base_url: String,
    base: String,
    quote: String,
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

impl OpenErApiSource {
    /// Creates a CNY → RUB source against `base_url`. Every request is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            base: "CNY".to_string(),
            quote: "RUB".to_string(),
        })
    }

    /// Public endpoint, default timeout.
    pub fn with_defaults() -> anyhow::Result<Self> {
        Self::new(OPEN_ER_API_BASE, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Changes the currency pair (ISO 4217 codes).
    pub fn with_currencies(mut self, base: impl Into<String>, quote: impl Into<String>) -> Self {
        self.base = base.into().to_uppercase();
        self.quote = quote.into().to_uppercase();
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Full request URL, e.g. `https://open.er-api.com/v6/latest/CNY`.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.base)
    }
}

#[async_trait]
impl RateSource for OpenErApiSource {
    #[instrument(skip(self), fields(base = %self.base, quote = %self.quote))]
    async fn fetch(&self) -> anyhow::Result<f64> {
        let url = self.endpoint();
        debug!(url = %url, "Requesting exchange rate");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Rate API error ({}): {}", status, error_text);
        }

        let body: LatestRatesResponse = response
            .json()
            .await
            .context("Malformed rate API response")?;

        if body.result.as_deref() == Some("error") {
            anyhow::bail!(
                "Rate API returned error: {}",
                body.error_type.as_deref().unwrap_or("unknown")
            );
        }

        let rate = *body
            .rates
            .get(&self.quote)
            .with_context(|| format!("No {} rate in response", self.quote))?;

        if !rate.is_finite() || rate <= 0.0 {
            anyhow::bail!("Invalid {} rate in response: {}", self.quote, rate);
        }

        debug!(rate = rate, "Exchange rate received");
        Ok(rate)
    }
}
