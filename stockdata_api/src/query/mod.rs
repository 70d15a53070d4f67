mod common;
mod movers;
mod overview;
mod quote;
mod search;
mod series;

pub use self::common::Query;
pub use self::movers::MoversQuery;
pub use self::overview::OverviewQuery;
pub use self::quote::QuoteQuery;
pub use self::search::SearchQuery;
pub use self::series::{OutputSize, SeriesQuery};
