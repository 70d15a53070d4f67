mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stockdata_lib::{Client, RateLimiter};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "stockdata")]
#[command(about = "Query quotes, fundamentals, and market movers from Alpha Vantage")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the latest quote for one symbol
    Quote(commands::quote::QuoteArgs),
    /// Fetch quotes for several symbols, paced under the upstream rate limit
    Multi(commands::multi::MultiArgs),
    /// Search for symbols by company name or keywords
    Search(commands::search::SearchArgs),
    /// Show a company's descriptive and fundamental data
    Company(commands::company::CompanyArgs),
    /// Show recent daily OHLCV bars for a symbol
    Daily(commands::daily::DailyArgs),
    /// Show the session's top gainers, losers, and most active tickers
    Movers,
    /// Send a raw dispatcher command with JSON arguments
    Raw(commands::raw::RawArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockdata=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();
    let api_key = std::env::var("ALPHAVANTAGE_API_KEY")
        .context("ALPHAVANTAGE_API_KEY is not set; export it or add it to .env")?;

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = Client::new(&api_key)?;
    let limiter = RateLimiter::default();

    match &cli.command {
        Commands::Quote(args) => commands::quote::run(args, &client, &format).await?,
        Commands::Multi(args) => commands::multi::run(args, &client, &limiter, &format).await?,
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
        Commands::Company(args) => commands::company::run(args, &client, &format).await?,
        Commands::Daily(args) => commands::daily::run(args, &client, &format).await?,
        Commands::Movers => commands::movers::run(&client, &format).await?,
        Commands::Raw(args) => commands::raw::run(args, &client, &limiter).await?,
    }

    Ok(())
}
