use std::fmt;
use std::str::FromStr;

use url::Url;

use super::common::Query;

/// How much daily history the upstream returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputSize {
    /// Roughly the last 100 trading days. This is the default.
    #[default]
    Compact,
    /// The full history, 20+ years.
    Full,
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OutputSize::Compact => "compact",
                OutputSize::Full => "full",
            }
        )
    }
}

impl FromStr for OutputSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(OutputSize::Compact),
            "full" => Ok(OutputSize::Full),
            _ => Err(()),
        }
    }
}

/// Query for the daily OHLCV time series of a ticker.
pub struct SeriesQuery {
    symbol: String,
    output_size: OutputSize,
}

impl SeriesQuery {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            output_size: OutputSize::default(),
        }
    }

    pub fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = output_size;
        self
    }
}

impl Query for SeriesQuery {
    fn function(&self) -> &'static str {
        "TIME_SERIES_DAILY"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("symbol", &self.symbol)
            .append_pair("outputsize", &self.output_size.to_string());
        url
    }
}
