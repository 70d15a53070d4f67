//! Integration layer for stockdata: rate-limited batch quotes, JSON payload
//! shaping, and the command dispatcher used by external orchestrators.
//!
//! Wraps the `stockdata_api` crate. Individual lookups go straight to the
//! client; the multi-symbol path is paced through [`RateLimiter`] to stay
//! under the upstream free-tier quota.

pub mod batch;
pub mod dispatch;
pub mod payload;
pub mod rate_limit;

pub use stockdata_api;
pub use stockdata_api::types;
pub use stockdata_api::{Client, Error, OutputSize};

pub use batch::{fetch_quotes, BatchQuotes};
pub use dispatch::{dispatch, COMMANDS};
pub use rate_limit::RateLimiter;
