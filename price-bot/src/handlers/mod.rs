//! Handler-chain adapters: logging and the price conversation.

mod logging_handler;
mod price_handler;

pub use logging_handler::LoggingHandler;
pub use price_handler::PriceCalcHandler;
