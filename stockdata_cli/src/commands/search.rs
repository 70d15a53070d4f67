//! The `search` subcommand: symbol lookup by company name or keywords.

use anyhow::Result;
use clap::Args;
use stockdata_lib::{payload, Client};

use crate::output::{print_json, print_matches_table, OutputFormat};

/// Arguments for the `search` subcommand.
#[derive(Args)]
pub struct SearchArgs {
    /// Company name or free-text keywords
    pub keywords: String,

    /// Only show the five closest matches
    #[arg(long)]
    pub top: bool,
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let result = if args.top {
        client.search_top(&args.keywords).await
    } else {
        client.search(&args.keywords).await
    };
    match format {
        OutputFormat::Json => print_json(&payload::search(result)),
        OutputFormat::Table => {
            let matches = result?;
            if matches.is_empty() {
                println!("No matches for \"{}\"", args.keywords);
            } else {
                print_matches_table(&matches);
            }
        }
    }
    Ok(())
}
