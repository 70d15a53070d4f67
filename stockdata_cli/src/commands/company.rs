//! The `company` subcommand: descriptive and fundamental company data.

use anyhow::Result;
use clap::Args;
use stockdata_lib::{payload, Client};

use crate::output::{print_json, print_overview_table, OutputFormat};

/// Arguments for the `company` subcommand.
#[derive(Args)]
pub struct CompanyArgs {
    /// Ticker symbol, e.g. IBM
    pub symbol: String,
}

pub async fn run(args: &CompanyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let result = client.company_overview(&args.symbol).await;
    match format {
        OutputFormat::Json => print_json(&payload::overview(result)),
        OutputFormat::Table => {
            let overview = result?;
            print_overview_table(&overview);
            if let Some(description) = &overview.description {
                println!("\n{}", description);
            }
        }
    }
    Ok(())
}
