use serde::{Deserialize, Serialize};

/// Top-level response for the SYMBOL_SEARCH endpoint. A response with no
/// `bestMatches` field means no results, not a failure.
#[derive(Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "bestMatches")]
    pub best_matches: Option<Vec<RawSymbolMatch>>,
}

/// One `bestMatches` entry as upstream returns it. The upstream sends more
/// numbered fields (match score, market hours, timezone) than we keep.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSymbolMatch {
    #[serde(rename = "1. symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "2. name")]
    pub name: Option<String>,
    #[serde(rename = "3. type")]
    pub kind: Option<String>,
    #[serde(rename = "4. region")]
    pub region: Option<String>,
    #[serde(rename = "8. currency")]
    pub currency: Option<String>,
}

/// One search hit, reduced to the fields callers use.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolMatch {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    pub currency: String,
}

impl From<RawSymbolMatch> for SymbolMatch {
    fn from(raw: RawSymbolMatch) -> Self {
        Self {
            symbol: raw.symbol.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            kind: raw.kind.unwrap_or_default(),
            region: raw.region.unwrap_or_default(),
            currency: raw.currency.unwrap_or_default(),
        }
    }
}
