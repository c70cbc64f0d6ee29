//! price-bot binary: `run` starts the Telegram bot, `rate` prints the current exchange rate.

use anyhow::Result;
use clap::Parser;
use exchange_rate::ExchangeRateProvider;
use price_bot::{build_rate_provider, run_bot, BotConfig, Cli, Commands, RateConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    dotenvy::from_filename("config.env").ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Rate => handle_rate().await,
    }
}

/// Looks up the rate once and prints it. A failed lookup is logged at `warn` and the fallback is printed.
async fn handle_rate() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_target(false)
        .init();

    let config = RateConfig::from_env();
    config.validate()?;

    let rate = build_rate_provider(&config)?.fetch_rate().await;
    println!("CNY → RUB: {:.2}", rate);
    Ok(())
}
