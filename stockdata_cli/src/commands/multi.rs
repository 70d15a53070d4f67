//! The `multi` subcommand: quotes for several symbols, one paced call each.

use anyhow::{bail, Result};
use clap::Args;
use stockdata_lib::types::Quote;
use stockdata_lib::{fetch_quotes, payload, Client, RateLimiter};

use crate::output::{print_json, print_quotes_table, OutputFormat};

/// Arguments for the `multi` subcommand.
#[derive(Args)]
pub struct MultiArgs {
    /// Comma-separated ticker symbols, e.g. AAPL,MSFT,GOOG
    pub symbols: String,
}

pub async fn run(
    args: &MultiArgs,
    client: &Client,
    limiter: &RateLimiter,
    format: &OutputFormat,
) -> Result<()> {
    let symbols: Vec<String> = args
        .symbols
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if symbols.is_empty() {
        bail!("no symbols given");
    }

    let batch = fetch_quotes(client, limiter, &symbols).await;
    match format {
        OutputFormat::Json => print_json(&payload::batch(batch)),
        OutputFormat::Table => {
            for (symbol, result) in &batch.quotes {
                if let Err(err) = result {
                    eprintln!("{}: {}", symbol, err);
                }
            }
            let quotes: Vec<Quote> = batch
                .quotes
                .values()
                .filter_map(|r| r.as_ref().ok().cloned())
                .collect();
            print_quotes_table(&quotes);
        }
    }
    Ok(())
}
