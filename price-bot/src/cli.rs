//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "price-bot")]
#[command(about = "Poizon price calculator Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the current CNY → RUB rate (the fallback rate if the lookup fails).
    Rate,
}
