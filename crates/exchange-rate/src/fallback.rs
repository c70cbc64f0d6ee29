//! Infallible provider over a [`RateSource`].

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{ExchangeRateProvider, RateSource, DEFAULT_FALLBACK_RATE};

/// Returns the source's rate, or a static fallback when the source fails.
///
/// No retries and no caching: every call hits the source once. A fallback is logged at `warn`
/// with the failure cause, since the user still gets a (possibly outdated) price.
pub struct FallbackRateProvider<S> {
    source: S,
    fallback: f64,
}

impl<S: RateSource> FallbackRateProvider<S> {
    /// Wraps `source` with [`DEFAULT_FALLBACK_RATE`].
    pub fn new(source: S) -> Self {
        Self {
            source,
            fallback: DEFAULT_FALLBACK_RATE,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[async_trait]
impl<S: RateSource> ExchangeRateProvider for FallbackRateProvider<S> {
    async fn fetch_rate(&self) -> f64 {
        match self.source.fetch().await {
            Ok(rate) => {
                info!(rate = rate, "Exchange rate fetched");
                rate
            }
            Err(e) => {
                warn!(
                    error = %format!("{:#}", e),
                    fallback_rate = self.fallback,
                    "Exchange rate fetch failed, using fallback rate"
                );
                self.fallback
            }
        }
    }
}
