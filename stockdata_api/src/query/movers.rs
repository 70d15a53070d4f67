use url::Url;

use super::common::Query;

/// Query for the market-wide movers snapshot. Takes no parameters.
pub struct MoversQuery;

impl Query for MoversQuery {
    fn function(&self) -> &'static str {
        "TOP_GAINERS_LOSERS"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }
}
