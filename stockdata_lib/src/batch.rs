//! Sequential multi-symbol quote fetching, paced by the rate limiter.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use stockdata_api::types::Quote;
use stockdata_api::{Client, Error};

use crate::rate_limit::RateLimiter;

/// Outcome of one batch run: exactly one entry per requested symbol,
/// keyed by the symbol as the caller wrote it, plus a batch timestamp.
pub struct BatchQuotes {
    pub fetched_at: DateTime<Utc>,
    pub quotes: BTreeMap<String, Result<Quote, Error>>,
}

/// Fetches a quote for each symbol in turn, acquiring a limiter slot
/// before every call.
///
/// Deliberately sequential: the pacing exists to respect the upstream
/// quota, so there is nothing to gain from issuing the calls in parallel.
/// A failed symbol records its error and the batch moves on.
pub async fn fetch_quotes(
    client: &Client,
    limiter: &RateLimiter,
    symbols: &[String],
) -> BatchQuotes {
    let fetched_at = Utc::now();
    let mut quotes = BTreeMap::new();
    for symbol in symbols {
        limiter.acquire().await;
        tracing::debug!("Fetching quote for {}", symbol);
        quotes.insert(symbol.clone(), client.quote(symbol).await);
    }
    BatchQuotes { fetched_at, quotes }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn quote_body(symbol: &str, price: &str) -> String {
        format!(
            r#"{{"Global Quote": {{"01. symbol": "{}", "05. price": "{}"}}}}"#,
            symbol, price
        )
    }

    async fn mount_quote(server: &MockServer, symbol: &str, price: &str) {
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("symbol", symbol))
            .respond_with(ResponseTemplate::new(200).set_body_string(quote_body(symbol, price)))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn one_entry_per_symbol() {
        let server = MockServer::start().await;
        mount_quote(&server, "AAPL", "189.41").await;
        mount_quote(&server, "MSFT", "441.06").await;

        let client = Client::with_base_url(&server.uri(), "test-key").unwrap();
        let limiter = RateLimiter::new(10, Duration::from_secs(1));
        let symbols = vec!["AAPL".to_string(), "MSFT".to_string()];

        let batch = fetch_quotes(&client, &limiter, &symbols).await;

        assert_eq!(batch.quotes.len(), 2);
        assert_eq!(batch.quotes["AAPL"].as_ref().unwrap().price, 189.41);
        assert_eq!(batch.quotes["MSFT"].as_ref().unwrap().price, 441.06);
    }

    #[tokio::test]
    async fn failed_symbol_does_not_abort_batch() {
        let server = MockServer::start().await;
        mount_quote(&server, "AAPL", "189.41").await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("symbol", "BOGUS"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "test-key").unwrap();
        let limiter = RateLimiter::new(10, Duration::from_secs(1));
        let symbols = vec!["BOGUS".to_string(), "AAPL".to_string()];

        let batch = fetch_quotes(&client, &limiter, &symbols).await;

        assert_eq!(batch.quotes.len(), 2);
        assert!(batch.quotes["BOGUS"].is_err());
        assert!(batch.quotes["AAPL"].is_ok());
    }

    #[tokio::test]
    async fn batch_respects_limiter_spacing() {
        let server = MockServer::start().await;
        mount_quote(&server, "AAPL", "189.41").await;
        mount_quote(&server, "MSFT", "441.06").await;
        mount_quote(&server, "GOOG", "176.79").await;

        let client = Client::with_base_url(&server.uri(), "test-key").unwrap();
        // Short real window so the test stays fast; the production
        // default only changes the constant.
        let limiter = RateLimiter::new(1, Duration::from_millis(50));
        let symbols = vec![
            "AAPL".to_string(),
            "MSFT".to_string(),
            "GOOG".to_string(),
        ];

        let start = Instant::now();
        let batch = fetch_quotes(&client, &limiter, &symbols).await;

        assert_eq!(batch.quotes.len(), 3);
        // Three calls through a one-per-window limiter span at least two
        // full windows.
        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
