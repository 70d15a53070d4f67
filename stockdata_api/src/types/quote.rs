use serde::{Deserialize, Serialize};

use super::{f64_or_zero, i64_or_zero};

/// Top-level response for the GLOBAL_QUOTE endpoint.
///
/// Exactly one of these fields is populated: the quote object on success,
/// `Error Message` when the upstream rejects the request, or `Note` when
/// the rate limit is exhausted.
#[derive(Deserialize)]
pub struct QuoteEnvelope {
    #[serde(rename = "Global Quote")]
    pub global_quote: Option<RawQuote>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
}

/// The `Global Quote` object exactly as upstream returns it: every value
/// is a decimal string behind a numbered key. Unknown symbols come back as
/// an empty object, so every field is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "02. open")]
    pub open: Option<String>,
    #[serde(rename = "03. high")]
    pub high: Option<String>,
    #[serde(rename = "04. low")]
    pub low: Option<String>,
    #[serde(rename = "05. price")]
    pub price: Option<String>,
    #[serde(rename = "06. volume")]
    pub volume: Option<String>,
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    pub previous_close: Option<String>,
    #[serde(rename = "09. change")]
    pub change: Option<String>,
    #[serde(rename = "10. change percent")]
    pub change_percent: Option<String>,
}

/// A point-in-time price and volume snapshot for one ticker.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    /// Verbatim upstream percentage string, e.g. `"1.0770%"`.
    pub change_percent: String,
    pub volume: i64,
    pub latest_trading_day: Option<String>,
    pub previous_close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
}

impl From<RawQuote> for Quote {
    fn from(raw: RawQuote) -> Self {
        Self {
            symbol: raw.symbol.unwrap_or_default(),
            price: f64_or_zero(raw.price.as_deref()),
            change: f64_or_zero(raw.change.as_deref()),
            change_percent: raw.change_percent.unwrap_or_else(|| "0%".to_string()),
            volume: i64_or_zero(raw.volume.as_deref()),
            latest_trading_day: raw.latest_trading_day,
            previous_close: f64_or_zero(raw.previous_close.as_deref()),
            open: f64_or_zero(raw.open.as_deref()),
            high: f64_or_zero(raw.high.as_deref()),
            low: f64_or_zero(raw.low.as_deref()),
        }
    }
}
