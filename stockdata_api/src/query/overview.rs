use url::Url;

use super::common::Query;

/// Query for a company's descriptive and fundamental data.
pub struct OverviewQuery {
    symbol: String,
}

impl OverviewQuery {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
        }
    }
}

impl Query for OverviewQuery {
    fn function(&self) -> &'static str {
        "OVERVIEW"
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
    fn test_overview_query() {
        let url = Url::parse("https://example.com/query").unwrap();

        insta::assert_snapshot!(
            OverviewQuery::new("brk.b").add_to_url(&url).to_string(),
            @"https://example.com/query?symbol=BRK.B"
        );
    }
}
