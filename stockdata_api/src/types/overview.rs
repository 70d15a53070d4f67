use serde::{Deserialize, Serialize};

/// The OVERVIEW endpoint returns a flat object whose `Symbol` field doubles
/// as the success indicator: unknown symbols come back as `{}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOverview {
    #[serde(rename = "Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Sector")]
    pub sector: Option<String>,
    #[serde(rename = "Industry")]
    pub industry: Option<String>,
    #[serde(rename = "MarketCapitalization")]
    pub market_capitalization: Option<String>,
    #[serde(rename = "PERatio")]
    pub pe_ratio: Option<String>,
    #[serde(rename = "DividendYield")]
    pub dividend_yield: Option<String>,
    #[serde(rename = "52WeekHigh")]
    pub week_52_high: Option<String>,
    #[serde(rename = "52WeekLow")]
    pub week_52_low: Option<String>,
    #[serde(rename = "AnalystTargetPrice")]
    pub analyst_target_price: Option<String>,
}

/// Descriptive and fundamental company metadata. The numeric-looking
/// fields (market cap, ratios, price levels) stay as upstream-formatted
/// strings; callers that need numbers parse what they use.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyOverview {
    pub symbol: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_cap: Option<String>,
    pub pe_ratio: Option<String>,
    pub dividend_yield: Option<String>,
    #[serde(rename = "52_week_high")]
    pub week_52_high: Option<String>,
    #[serde(rename = "52_week_low")]
    pub week_52_low: Option<String>,
    pub analyst_target: Option<String>,
}

impl RawOverview {
    /// Shapes the raw response, or `None` when it carried no `Symbol`
    /// field (upstream's way of saying the company is unknown).
    pub fn into_overview(self) -> Option<CompanyOverview> {
        let symbol = self.symbol?;
        Some(CompanyOverview {
            symbol,
            name: self.name,
            description: self.description,
            sector: self.sector,
            industry: self.industry,
            market_cap: self.market_capitalization,
            pe_ratio: self.pe_ratio,
            dividend_yield: self.dividend_yield,
            week_52_high: self.week_52_high,
            week_52_low: self.week_52_low,
            analyst_target: self.analyst_target_price,
        })
    }
}
