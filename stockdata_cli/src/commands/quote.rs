//! The `quote` subcommand: latest price snapshot for one symbol.

use anyhow::Result;
use clap::Args;
use stockdata_lib::{payload, Client};

use crate::output::{print_json, print_quotes_table, OutputFormat};

/// Arguments for the `quote` subcommand.
#[derive(Args)]
pub struct QuoteArgs {
    /// Ticker symbol, e.g. AAPL
    pub symbol: String,
}

pub async fn run(args: &QuoteArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let result = client.quote(&args.symbol).await;
    match format {
        OutputFormat::Json => print_json(&payload::quote(result)),
        OutputFormat::Table => {
            let quote = result?;
            print_quotes_table(std::slice::from_ref(&quote));
        }
    }
    Ok(())
}
