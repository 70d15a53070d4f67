use url::Url;

use super::common::Query;

/// Free-text symbol search query. Keywords are passed through as typed.
pub struct SearchQuery {
    keywords: String,
}

impl SearchQuery {
    pub fn new(keywords: &str) -> Self {
        Self {
            keywords: keywords.to_string(),
        }
    }
}

impl Query for SearchQuery {
    fn function(&self) -> &'static str {
        "SYMBOL_SEARCH"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("keywords", &self.keywords);
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_search_query() {
        let url = Url::parse("https://example.com/query").unwrap();

        insta::assert_snapshot!(
            SearchQuery::new("tesla motors").add_to_url(&url).to_string(),
            @"https://example.com/query?keywords=tesla+motors"
        );
    }
}
