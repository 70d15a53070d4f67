//! Error types for the API client.

/// Errors that can occur when querying the market data API.
///
/// Every operation classifies failures into one of these kinds so callers
/// can tell a transport problem from an upstream rejection or an absent
/// data field. Nothing retries; one failed call yields one error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request itself failed (connection, TLS, or timeout).
    #[error("Network error")]
    Network(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    Status { status: u16, body: String },
    /// The response body was not the JSON shape we asked for.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The response carried the upstream rate-limit note instead of data.
    #[error("API rate limit reached. Please wait.")]
    RateLimited,
    /// The upstream rejected the request with an explicit error message.
    #[error("{0}")]
    Api(String),
    /// The response parsed but the expected data field was absent.
    #[error("{0}")]
    MissingData(&'static str),
    /// The client could not be constructed from the given base URL.
    #[error("Invalid base URL: {0}")]
    BaseUrl(String),
}
