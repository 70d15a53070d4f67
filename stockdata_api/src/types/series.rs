use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{f64_or_zero, i64_or_zero};

/// Number of most-recent bars kept from the upstream map.
const RECENT_BARS: usize = 10;

/// Top-level response for the TIME_SERIES_DAILY endpoint.
#[derive(Deserialize)]
pub struct SeriesEnvelope {
    #[serde(rename = "Meta Data")]
    pub meta: Option<SeriesMeta>,
    #[serde(rename = "Time Series (Daily)")]
    pub series: Option<BTreeMap<String, RawDailyBar>>,
}

/// The slice of response metadata we surface.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesMeta {
    #[serde(rename = "2. Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: Option<String>,
}

/// One trading day as upstream returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyBar {
    #[serde(rename = "1. open")]
    pub open: Option<String>,
    #[serde(rename = "2. high")]
    pub high: Option<String>,
    #[serde(rename = "3. low")]
    pub low: Option<String>,
    #[serde(rename = "4. close")]
    pub close: Option<String>,
    #[serde(rename = "5. volume")]
    pub volume: Option<String>,
}

/// One trading day of OHLCV data.
#[derive(Debug, Clone, Serialize)]
pub struct DailyBar {
    /// Upstream `YYYY-MM-DD` date key, passed through verbatim.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// The shaped daily series: resolved symbol, last-refreshed date, and the
/// most recent bars, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct DailySeries {
    pub symbol: String,
    pub last_refreshed: String,
    #[serde(rename = "time_series")]
    pub bars: Vec<DailyBar>,
}

impl DailySeries {
    /// The upstream serves the series newest-first; date keys sort
    /// ascending in the map, so walking it in reverse recovers that order.
    pub(crate) fn from_envelope(
        meta: Option<SeriesMeta>,
        series: BTreeMap<String, RawDailyBar>,
    ) -> Self {
        let bars = series
            .iter()
            .rev()
            .take(RECENT_BARS)
            .map(|(date, raw)| DailyBar {
                date: date.clone(),
                open: f64_or_zero(raw.open.as_deref()),
                high: f64_or_zero(raw.high.as_deref()),
                low: f64_or_zero(raw.low.as_deref()),
                close: f64_or_zero(raw.close.as_deref()),
                volume: i64_or_zero(raw.volume.as_deref()),
            })
            .collect();
        let meta = meta.unwrap_or(SeriesMeta {
            symbol: None,
            last_refreshed: None,
        });
        Self {
            symbol: meta.symbol.unwrap_or_default(),
            last_refreshed: meta.last_refreshed.unwrap_or_default(),
            bars,
        }
    }
}
