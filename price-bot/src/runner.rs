//! Wiring: config → rate provider → conversation → handler chain → teloxide REPL.

use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use exchange_rate::{ExchangeRateProvider, FallbackRateProvider, OpenErApiSource};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::{BotConfig, RateConfig};
use crate::conversation::Conversation;
use crate::handlers::{LoggingHandler, PriceCalcHandler};
use crate::session::InMemorySessionStore;

/// Live CNY → RUB lookup with the configured timeout and fallback.
pub fn build_rate_provider(config: &RateConfig) -> Result<Arc<dyn ExchangeRateProvider>> {
    let source = OpenErApiSource::new(config.api_url.clone(), config.timeout())?;
    Ok(Arc::new(
        FallbackRateProvider::new(source).with_fallback(config.fallback_rate),
    ))
}

/// Logging → price conversation.
pub fn build_handler_chain(conversation: Arc<Conversation>, bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(PriceCalcHandler::new(conversation, bot)))
}

/// Main entry: validate config, init logging, build the chain, then poll Telegram until stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        rate_api_url = %config.rate().api_url,
        fallback_rate = config.rate().fallback_rate,
        log_file = %config.log_file(),
        "Initializing price bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let rates = build_rate_provider(config.rate())?;
    let conversation = Arc::new(Conversation::new(
        Arc::new(InMemorySessionStore::new()),
        rates,
    ));
    let chain = build_handler_chain(conversation, bot);

    info!("Price bot started");
    run_repl(teloxide_bot, chain).await
}
