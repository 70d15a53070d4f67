//! The `raw` subcommand: feed the dispatcher directly.
//!
//! This is the same entry point an external orchestrator uses, so the
//! output is always the dispatcher's JSON payload regardless of the
//! global format flag.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use stockdata_lib::{dispatch, Client, RateLimiter};

use crate::output::print_json;

/// Arguments for the `raw` subcommand.
#[derive(Args)]
pub struct RawArgs {
    /// Dispatcher command: quote, multi, search, company, daily, or movers
    pub command: String,

    /// JSON object of arguments, e.g. '{"symbol": "AAPL"}'
    #[arg(default_value = "{}")]
    pub args: String,
}

pub async fn run(args: &RawArgs, client: &Client, limiter: &RateLimiter) -> Result<()> {
    let arguments: Value =
        serde_json::from_str(&args.args).context("arguments must be a JSON object")?;
    let result = dispatch(client, limiter, &args.command, &arguments).await;
    print_json(&result);
    Ok(())
}
