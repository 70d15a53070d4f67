//! Command dispatcher: the single entry point external orchestrators call.
//!
//! Pure routing over a command name plus a JSON object of arguments. The
//! only validation performed here is required-argument presence; a missing
//! argument is reported without touching the network.

use serde_json::{json, Value};
use stockdata_api::{Client, OutputSize};

use crate::batch;
use crate::payload;
use crate::rate_limit::RateLimiter;

/// The six recognized command names.
pub const COMMANDS: [&str; 6] = ["quote", "multi", "search", "company", "daily", "movers"];

/// Routes `command` with `args` to the matching operation and returns its
/// JSON payload.
///
/// An unrecognized command name yields an error naming it plus the list
/// of valid commands. Everything else -- including upstream failures -- is
/// shaped by the payload layer; this function never fails.
pub async fn dispatch(
    client: &Client,
    limiter: &RateLimiter,
    command: &str,
    args: &Value,
) -> Value {
    tracing::debug!("Dispatching {} command", command);
    match command {
        "quote" => match str_arg(args, "symbol") {
            Some(symbol) => payload::quote(client.quote(symbol).await),
            None => missing("Symbol required for quote command"),
        },
        "multi" => match list_arg(args, "symbols") {
            Some(symbols) if !symbols.is_empty() => {
                payload::batch(batch::fetch_quotes(client, limiter, &symbols).await)
            }
            _ => missing("Symbols list required for multi command"),
        },
        "search" => match str_arg(args, "keywords") {
            Some(keywords) => payload::search(client.search(keywords).await),
            None => missing("Keywords required for search command"),
        },
        "company" => match str_arg(args, "symbol") {
            Some(symbol) => payload::overview(client.company_overview(symbol).await),
            None => missing("Symbol required for company command"),
        },
        "daily" => match str_arg(args, "symbol") {
            Some(symbol) => {
                let output_size = str_arg(args, "outputsize")
                    .and_then(|s| s.parse::<OutputSize>().ok())
                    .unwrap_or_default();
                payload::daily(client.daily_series(symbol, output_size).await)
            }
            None => missing("Symbol required for daily command"),
        },
        "movers" => payload::movers(client.market_movers().await),
        unknown => json!({
            "error": format!("Unknown command: {}", unknown),
            "available_commands": COMMANDS,
        }),
    }
}

fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn list_arg(args: &Value, key: &str) -> Option<Vec<String>> {
    let items = args.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}

fn missing(message: &str) -> Value {
    json!({ "error": message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_arg_rejects_missing_and_empty() {
        assert_eq!(str_arg(&json!({"symbol": "AAPL"}), "symbol"), Some("AAPL"));
        assert_eq!(str_arg(&json!({"symbol": ""}), "symbol"), None);
        assert_eq!(str_arg(&json!({}), "symbol"), None);
        assert_eq!(str_arg(&json!({"symbol": 7}), "symbol"), None);
    }

    #[test]
    fn list_arg_keeps_string_items() {
        assert_eq!(
            list_arg(&json!({"symbols": ["AAPL", "MSFT"]}), "symbols"),
            Some(vec!["AAPL".to_string(), "MSFT".to_string()])
        );
        assert_eq!(list_arg(&json!({"symbols": "AAPL"}), "symbols"), None);
        assert_eq!(list_arg(&json!({}), "symbols"), None);
    }
}
