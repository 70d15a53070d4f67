//! HTTP client for the Alpha Vantage query API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{MoversQuery, OutputSize, OverviewQuery, Query, QuoteQuery, SearchQuery, SeriesQuery},
    types::{
        CompanyOverview, DailySeries, MarketMovers, MoversEnvelope, Quote, QuoteEnvelope,
        RawOverview, SearchEnvelope, SeriesEnvelope, SymbolMatch,
    },
    Error,
};

/// Request timeout applied uniformly to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of matches the capped search variant keeps.
const TOP_MATCHES: usize = 5;

/// HTTP client for the Alpha Vantage query API.
///
/// Every endpoint lives behind the single `/query` path and is selected by
/// a `function` parameter; the API key rides along as `apikey` on every
/// request. One `reqwest::Client` with a 30-second timeout is shared by
/// all calls. The client holds no other state and never retries.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    /// Fully resolved `<base>/query` URL requests start from.
    query_url: Url,
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url("https://www.alphavantage.co", api_key)
    }

    /// Creates a client with a custom base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let query_url = Url::parse(&format!("{}/query", base_url.trim_end_matches('/')))
            .map_err(|e| Error::BaseUrl(e.to_string()))?;
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_key: api_key.to_string(),
            query_url,
        })
    }

    fn request_url<Q: Query>(&self, query: &Q) -> Url {
        let mut url = self.query_url.clone();
        url.query_pairs_mut()
            .append_pair("function", query.function());
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        url
    }

    async fn get<T, Q>(&self, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.request_url(query);
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("{} request failed: {}", query.function(), e);
            Error::Network(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::Status {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Parse(e.to_string())
        })
    }

    /// Fetches the latest quote for one ticker symbol.
    ///
    /// The symbol is uppercased before the request. A response carrying the
    /// quote object shapes to [`Quote`]; an upstream `Error Message` or
    /// rate-limit `Note` becomes the matching error kind.
    pub async fn quote(&self, symbol: &str) -> Result<Quote, Error> {
        let envelope: QuoteEnvelope = self.get(&QuoteQuery::new(symbol)).await?;
        if let Some(raw) = envelope.global_quote {
            Ok(Quote::from(raw))
        } else if let Some(message) = envelope.error_message {
            Err(Error::Api(message))
        } else if envelope.note.is_some() {
            Err(Error::RateLimited)
        } else {
            Err(Error::MissingData("Unknown error occurred"))
        }
    }

    /// Searches for symbols by company name or free-text keywords,
    /// returning every match upstream provides. A response with no match
    /// list is an empty result, not an error.
    pub async fn search(&self, keywords: &str) -> Result<Vec<SymbolMatch>, Error> {
        let envelope: SearchEnvelope = self.get(&SearchQuery::new(keywords)).await?;
        Ok(envelope
            .best_matches
            .unwrap_or_default()
            .into_iter()
            .map(SymbolMatch::from)
            .collect())
    }

    /// Same lookup as [`search`](Self::search), capped to the first five
    /// matches. Kept as its own operation for callers that only want the
    /// closest hits.
    pub async fn search_top(&self, keywords: &str) -> Result<Vec<SymbolMatch>, Error> {
        let mut matches = self.search(keywords).await?;
        matches.truncate(TOP_MATCHES);
        Ok(matches)
    }

    /// Fetches descriptive and fundamental data for one company.
    pub async fn company_overview(&self, symbol: &str) -> Result<CompanyOverview, Error> {
        let raw: RawOverview = self.get(&OverviewQuery::new(symbol)).await?;
        raw.into_overview()
            .ok_or(Error::MissingData("Company data not found"))
    }

    /// Fetches the daily OHLCV series for one symbol, shaped down to the
    /// ten most recent trading days.
    pub async fn daily_series(
        &self,
        symbol: &str,
        output_size: OutputSize,
    ) -> Result<DailySeries, Error> {
        let query = SeriesQuery::new(symbol).with_output_size(output_size);
        let envelope: SeriesEnvelope = self.get(&query).await?;
        let series = envelope
            .series
            .ok_or(Error::MissingData("Time series data not found"))?;
        Ok(DailySeries::from_envelope(envelope.meta, series))
    }

    /// Fetches the market-wide movers snapshot: top five gainers, losers,
    /// and most actively traded tickers.
    pub async fn market_movers(&self) -> Result<MarketMovers, Error> {
        let envelope: MoversEnvelope = self.get(&MoversQuery).await?;
        envelope
            .into_movers()
            .ok_or(Error::MissingData("Market movers data not available"))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
