//! Output rendering: plain tables for humans, pretty JSON for pipelines.

use stockdata_lib::types::{CompanyOverview, DailySeries, MarketMovers, MoverEntry, Quote, SymbolMatch};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Change %")]
    change_percent: String,
    #[tabled(rename = "Volume")]
    volume: i64,
    #[tabled(rename = "Trading Day")]
    latest_trading_day: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Currency")]
    currency: String,
}

#[derive(Tabled)]
struct BarRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    volume: i64,
}

#[derive(Tabled)]
struct MoverRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    change_amount: String,
    #[tabled(rename = "Change %")]
    change_percentage: String,
    #[tabled(rename = "Volume")]
    volume: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_quote_rows(quotes: &[Quote]) -> Vec<QuoteRow> {
    quotes
        .iter()
        .map(|q| QuoteRow {
            symbol: q.symbol.clone(),
            price: format!("{:.2}", q.price),
            change: format!("{:+.2}", q.change),
            change_percent: q.change_percent.clone(),
            volume: q.volume,
            latest_trading_day: q.latest_trading_day.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_match_rows(matches: &[SymbolMatch]) -> Vec<MatchRow> {
    matches
        .iter()
        .map(|m| MatchRow {
            symbol: m.symbol.clone(),
            name: m.name.clone(),
            kind: m.kind.clone(),
            region: m.region.clone(),
            currency: m.currency.clone(),
        })
        .collect()
}

fn build_bar_rows(series: &DailySeries) -> Vec<BarRow> {
    series
        .bars
        .iter()
        .map(|b| BarRow {
            date: b.date.clone(),
            open: format!("{:.2}", b.open),
            high: format!("{:.2}", b.high),
            low: format!("{:.2}", b.low),
            close: format!("{:.2}", b.close),
            volume: b.volume,
        })
        .collect()
}

fn build_mover_rows(entries: &[MoverEntry]) -> Vec<MoverRow> {
    entries
        .iter()
        .map(|e| MoverRow {
            ticker: e.ticker.clone(),
            price: e.price.clone(),
            change_amount: e.change_amount.clone(),
            change_percentage: e.change_percentage.clone(),
            volume: e.volume.clone(),
        })
        .collect()
}

fn build_overview_rows(overview: &CompanyOverview) -> Vec<FieldRow> {
    let field = |name: &str, value: &Option<String>| FieldRow {
        field: name.to_string(),
        value: value.clone().unwrap_or_default(),
    };
    vec![
        FieldRow {
            field: "Symbol".to_string(),
            value: overview.symbol.clone(),
        },
        field("Name", &overview.name),
        field("Sector", &overview.sector),
        field("Industry", &overview.industry),
        field("Market Cap", &overview.market_cap),
        field("P/E Ratio", &overview.pe_ratio),
        field("Dividend Yield", &overview.dividend_yield),
        field("52-Week High", &overview.week_52_high),
        field("52-Week Low", &overview.week_52_low),
        field("Analyst Target", &overview.analyst_target),
    ]
}

// -- Table output --

pub fn print_quotes_table(quotes: &[Quote]) {
    println!("{}", Table::new(build_quote_rows(quotes)));
}

pub fn print_matches_table(matches: &[SymbolMatch]) {
    println!("{}", Table::new(build_match_rows(matches)));
}

pub fn print_series_table(series: &DailySeries) {
    println!("{} (last refreshed {})", series.symbol, series.last_refreshed);
    println!("{}", Table::new(build_bar_rows(series)));
}

pub fn print_overview_table(overview: &CompanyOverview) {
    println!("{}", Table::new(build_overview_rows(overview)));
}

pub fn print_movers_tables(movers: &MarketMovers) {
    println!("Top gainers");
    println!("{}", Table::new(build_mover_rows(&movers.top_gainers)));
    println!("\nTop losers");
    println!("{}", Table::new(build_mover_rows(&movers.top_losers)));
    println!("\nMost active");
    println!("{}", Table::new(build_mover_rows(&movers.most_active)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> Quote {
        Quote {
            symbol: "AAPL".to_string(),
            price: 189.41,
            change: -2.02,
            change_percent: "-1.0780%".to_string(),
            volume: 58_414_460,
            latest_trading_day: Some("2024-06-14".to_string()),
            previous_close: 187.39,
            open: 187.15,
            high: 189.98,
            low: 186.77,
        }
    }

    #[test]
    fn quote_rows_format_prices() {
        let rows = build_quote_rows(&[sample_quote()]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].price, "189.41");
        assert_eq!(rows[0].change, "-2.02");
        assert_eq!(rows[0].latest_trading_day, "2024-06-14");
    }

    #[test]
    fn overview_rows_blank_missing_fields() {
        let overview = CompanyOverview {
            symbol: "IBM".to_string(),
            name: Some("International Business Machines".to_string()),
            description: None,
            sector: None,
            industry: None,
            market_cap: None,
            pe_ratio: None,
            dividend_yield: None,
            week_52_high: None,
            week_52_low: None,
            analyst_target: None,
        };
        let rows = build_overview_rows(&overview);
        assert_eq!(rows[0].value, "IBM");
        assert_eq!(rows[1].value, "International Business Machines");
        assert_eq!(rows[2].value, "");
    }
}
