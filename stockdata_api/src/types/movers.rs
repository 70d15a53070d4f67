use serde::{Deserialize, Serialize};

/// Number of entries kept per movers category.
const MOVERS_PER_CATEGORY: usize = 5;

/// Top-level response for the TOP_GAINERS_LOSERS endpoint. Presence of
/// `top_gainers` is what distinguishes data from an error body.
#[derive(Deserialize)]
pub struct MoversEnvelope {
    pub top_gainers: Option<Vec<MoverEntry>>,
    pub top_losers: Option<Vec<MoverEntry>>,
    pub most_actively_traded: Option<Vec<MoverEntry>>,
}

/// One mover row, passed through as upstream formats it: every value is a
/// pre-rendered string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoverEntry {
    pub ticker: String,
    pub price: String,
    pub change_amount: String,
    pub change_percentage: String,
    pub volume: String,
}

/// The session's biggest gainers, losers, and highest-volume tickers,
/// capped to the top five of each.
#[derive(Debug, Clone, Serialize)]
pub struct MarketMovers {
    pub top_gainers: Vec<MoverEntry>,
    pub top_losers: Vec<MoverEntry>,
    pub most_active: Vec<MoverEntry>,
}

impl MoversEnvelope {
    /// Shapes the snapshot, or `None` when the response carried no
    /// `top_gainers` field.
    pub fn into_movers(self) -> Option<MarketMovers> {
        let mut top_gainers = self.top_gainers?;
        let mut top_losers = self.top_losers.unwrap_or_default();
        let mut most_active = self.most_actively_traded.unwrap_or_default();
        top_gainers.truncate(MOVERS_PER_CATEGORY);
        top_losers.truncate(MOVERS_PER_CATEGORY);
        most_active.truncate(MOVERS_PER_CATEGORY);
        Some(MarketMovers {
            top_gainers,
            top_losers,
            most_active,
        })
    }
}
