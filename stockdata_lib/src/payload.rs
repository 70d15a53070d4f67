//! JSON payload shaping for orchestrator consumption.
//!
//! Every operation's `Result` becomes a JSON-serializable value: success
//! payloads carry `success: true`, the record fields, and -- where the
//! caller expects one -- an RFC 3339 UTC timestamp; failures carry
//! `success: false` plus the error's display string. Search is the one
//! exception: its failure shape is a single-element error list, and an
//! empty result is just `[]`.

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Map, Value};
use stockdata_api::types::{CompanyOverview, DailySeries, MarketMovers, Quote, SymbolMatch};
use stockdata_api::Error;

use crate::batch::BatchQuotes;

/// Shapes a quote result: record fields plus `success` and a timestamp.
pub fn quote(result: Result<Quote, Error>) -> Value {
    match result {
        Ok(quote) => stamped(&quote),
        Err(err) => failure(&err),
    }
}

/// Shapes a batch of quotes: per-symbol payloads under `quotes`, plus the
/// batch timestamp.
pub fn batch(batch: BatchQuotes) -> Value {
    let quotes: Map<String, Value> = batch
        .quotes
        .into_iter()
        .map(|(symbol, result)| (symbol, quote(result)))
        .collect();
    json!({
        "timestamp": batch.fetched_at.to_rfc3339(),
        "quotes": quotes,
    })
}

/// Shapes a search result as a list. Failures become a single-element
/// list carrying an `error` field rather than a `success` mapping.
pub fn search(result: Result<Vec<SymbolMatch>, Error>) -> Value {
    match result {
        Ok(matches) => serde_json::to_value(&matches).unwrap_or_else(|_| Value::Array(Vec::new())),
        Err(err) => json!([{ "error": err.to_string() }]),
    }
}

/// Shapes a company overview result: record fields plus `success` and a
/// timestamp.
pub fn overview(result: Result<CompanyOverview, Error>) -> Value {
    match result {
        Ok(overview) => stamped(&overview),
        Err(err) => failure(&err),
    }
}

/// Shapes a daily series result. Unlike the other record payloads this
/// one carries no timestamp; `last_refreshed` already dates the data.
pub fn daily(result: Result<DailySeries, Error>) -> Value {
    match result {
        Ok(series) => {
            let mut object = to_object(&series);
            object.insert("success".to_string(), Value::Bool(true));
            Value::Object(object)
        }
        Err(err) => failure(&err),
    }
}

/// Shapes a market movers result: the three capped lists plus `success`
/// and a timestamp.
pub fn movers(result: Result<MarketMovers, Error>) -> Value {
    match result {
        Ok(movers) => stamped(&movers),
        Err(err) => failure(&err),
    }
}

fn stamped<T: Serialize>(record: &T) -> Value {
    let mut object = to_object(record);
    object.insert("success".to_string(), Value::Bool(true));
    object.insert(
        "timestamp".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );
    Value::Object(object)
}

fn to_object<T: Serialize>(record: &T) -> Map<String, Value> {
    match serde_json::to_value(record) {
        Ok(Value::Object(object)) => object,
        _ => Map::new(),
    }
}

fn failure(err: &Error) -> Value {
    json!({
        "success": false,
        "error": err.to_string(),
    })
}
