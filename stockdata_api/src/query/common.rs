//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by all query builders.
///
/// Every upstream endpoint lives behind the same `/query` path and is
/// selected by a fixed `function` parameter; the remaining parameters are
/// endpoint-specific and appended by `add_to_url`. The API key is not part
/// of a query -- the client appends it to every request.
pub trait Query {
    /// Fixed value for the upstream `function` selector.
    fn function(&self) -> &'static str;

    /// Appends this query's parameters to the given URL, returning the
    /// modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
