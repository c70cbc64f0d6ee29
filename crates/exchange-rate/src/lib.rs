//! # Exchange rate
//!
//! Currency-rate lookup for the price bot.
//!
//! - [`RateSource`]: a fallible lookup of one currency pair (e.g. [`OpenErApiSource`], HTTP).
//! - [`ExchangeRateProvider`]: the infallible view the conversation uses. [`FallbackRateProvider`]
//!   wraps a source and substitutes a static rate when the lookup fails, logging the failure.
//!
//! ## Example
//!
//! ```rust,no_run
//! use exchange_rate::{ExchangeRateProvider, FallbackRateProvider, OpenErApiSource};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let source = OpenErApiSource::with_defaults()?;
//!     let provider = FallbackRateProvider::new(source);
//!     println!("CNY → RUB: {:.2}", provider.fetch_rate().await);
//!     Ok(())
//! }
//! ```

mod fallback;
mod open_er_api;

use async_trait::async_trait;

pub use fallback::FallbackRateProvider;
pub use open_er_api::{OpenErApiSource, DEFAULT_TIMEOUT_SECS, OPEN_ER_API_BASE};

/// Rate used when the live lookup fails (CNY → RUB).
pub const DEFAULT_FALLBACK_RATE: f64 = 12.9;

/// A fallible lookup of how many quote-currency units one base-currency unit buys.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<f64>;
}

/// Always yields a rate; implementations decide what to do when the lookup fails.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn fetch_rate(&self) -> f64;
}
