//! The `daily` subcommand: recent daily OHLCV bars for one symbol.

use anyhow::Result;
use clap::Args;
use stockdata_lib::{payload, Client, OutputSize};

use crate::output::{print_json, print_series_table, OutputFormat};

/// Arguments for the `daily` subcommand.
#[derive(Args)]
pub struct DailyArgs {
    /// Ticker symbol, e.g. IBM
    pub symbol: String,

    /// History depth: compact (~100 days) or full (20+ years)
    #[arg(long, default_value = "compact")]
    pub output_size: String,
}

pub async fn run(args: &DailyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let output_size = args
        .output_size
        .parse::<OutputSize>()
        .unwrap_or_default();
    let result = client.daily_series(&args.symbol, output_size).await;
    match format {
        OutputFormat::Json => print_json(&payload::daily(result)),
        OutputFormat::Table => {
            let series = result?;
            print_series_table(&series);
        }
    }
    Ok(())
}
