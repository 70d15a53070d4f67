//! The `movers` subcommand: top gainers, losers, and most active tickers.

use anyhow::Result;
use stockdata_lib::{payload, Client};

use crate::output::{print_json, print_movers_tables, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let result = client.market_movers().await;
    match format {
        OutputFormat::Json => print_json(&payload::movers(result)),
        OutputFormat::Table => {
            let movers = result?;
            print_movers_tables(&movers);
        }
    }
    Ok(())
}
