use stockdata_api::{
    MoversQuery, OutputSize, OverviewQuery, Query, QuoteQuery, SearchQuery, SeriesQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/query").unwrap()
}

#[test]
fn quote_query_params() {
    assert_eq!(QuoteQuery::new("aapl").function(), "GLOBAL_QUOTE");
    let url = QuoteQuery::new("aapl").add_to_url(&base_url());
    assert!(url.query().unwrap().contains("symbol=AAPL"));
}

#[test]
fn search_query_params() {
    assert_eq!(SearchQuery::new("tesla").function(), "SYMBOL_SEARCH");
    let url = SearchQuery::new("tesla motors").add_to_url(&base_url());
    assert!(url.query().unwrap().contains("keywords=tesla+motors"));
}

#[test]
fn overview_query_params() {
    assert_eq!(OverviewQuery::new("ibm").function(), "OVERVIEW");
    let url = OverviewQuery::new("ibm").add_to_url(&base_url());
    assert!(url.query().unwrap().contains("symbol=IBM"));
}

#[test]
fn series_query_params() {
    assert_eq!(SeriesQuery::new("ibm").function(), "TIME_SERIES_DAILY");

    let url = SeriesQuery::new("ibm").add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("symbol=IBM"));
    assert!(query.contains("outputsize=compact"));

    let url = SeriesQuery::new("ibm")
        .with_output_size(OutputSize::Full)
        .add_to_url(&base_url());
    assert!(url.query().unwrap().contains("outputsize=full"));
}

#[test]
fn movers_query_has_no_params() {
    assert_eq!(MoversQuery.function(), "TOP_GAINERS_LOSERS");
    let url = MoversQuery.add_to_url(&base_url());
    assert!(url.query().is_none());
}
