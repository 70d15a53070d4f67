use url::Url;

use super::common::Query;

/// Query for the latest quote of a single ticker.
pub struct QuoteQuery {
    symbol: String,
}

impl QuoteQuery {
    /// Builds a quote query. The symbol is uppercased to match how the
    /// upstream indexes tickers.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
        }
    }

    /// The normalized symbol this query asks for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Query for QuoteQuery {
    fn function(&self) -> &'static str {
        "GLOBAL_QUOTE"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("symbol", &self.symbol);
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_quote_query() {
        let url = Url::parse("https://example.com/query").unwrap();

        assert_eq!(QuoteQuery::new("aapl").symbol(), "AAPL");
        assert_eq!(QuoteQuery::new("MSFT").function(), "GLOBAL_QUOTE");

        insta::assert_snapshot!(
            QuoteQuery::new("aapl").add_to_url(&url).to_string(),
            @"https://example.com/query?symbol=AAPL"
        );
    }
}
