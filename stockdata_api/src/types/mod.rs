//! Response envelopes and the shaped records exposed to callers.
//!
//! Each endpoint has a raw envelope mirroring the upstream JSON (numbered
//! string keys, decimal-string values) and a shaped record with the fields
//! callers actually use. Shaping is lenient about numerics: a missing or
//! malformed value becomes zero rather than an error.

mod movers;
mod overview;
mod quote;
mod search;
mod series;

pub use self::movers::{MarketMovers, MoverEntry, MoversEnvelope};
pub use self::overview::{CompanyOverview, RawOverview};
pub use self::quote::{Quote, QuoteEnvelope, RawQuote};
pub use self::search::{RawSymbolMatch, SearchEnvelope, SymbolMatch};
pub use self::series::{DailyBar, DailySeries, RawDailyBar, SeriesEnvelope, SeriesMeta};

pub(crate) fn f64_or_zero(value: Option<&str>) -> f64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0.0)
}

pub(crate) fn i64_or_zero(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_numeric_parsing() {
        assert_eq!(f64_or_zero(Some("189.4100")), 189.41);
        assert_eq!(f64_or_zero(Some("-1.2500")), -1.25);
        assert_eq!(f64_or_zero(Some("not a number")), 0.0);
        assert_eq!(f64_or_zero(None), 0.0);

        assert_eq!(i64_or_zero(Some("58414460")), 58_414_460);
        assert_eq!(i64_or_zero(Some("12.5")), 0);
        assert_eq!(i64_or_zero(None), 0);
    }
}
