//! Wire DTOs for the gateway's JSON contract. Field names are camelCase on
//! the wire; historical dates are short display strings ("Jan 5"), a
//! presentation decision the transport layer owns.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use stockboard_core::{HistoricalBar, MarketQuote, QuoteSnapshot};

/// Merged single-stock response: quote snapshot plus historical sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReportDto {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub previous_close: f64,
    pub week52_high: f64,
    pub week52_low: f64,
    pub avg_volume: u64,
    pub volume: u64,
    pub historical: Vec<HistoricalPointDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPointDto {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Batch ticker entry: a snapshot, or an isolated per-symbol failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarketEntryDto {
    Quote {
        price: f64,
        change: f64,
        #[serde(rename = "changePercent")]
        change_percent: f64,
    },
    Failed {
        error: String,
    },
}

impl StockReportDto {
    pub fn build(snapshot: QuoteSnapshot, bars: &[HistoricalBar]) -> Self {
        Self {
            symbol: snapshot.symbol.to_string(),
            name: snapshot.name,
            current_price: snapshot.current_price,
            previous_close: snapshot.previous_close,
            week52_high: snapshot.week52_high,
            week52_low: snapshot.week52_low,
            avg_volume: snapshot.avg_volume,
            volume: snapshot.volume,
            historical: bars.iter().map(HistoricalPointDto::from_bar).collect(),
        }
    }
}

impl HistoricalPointDto {
    pub fn from_bar(bar: &HistoricalBar) -> Self {
        Self {
            date: display_date(bar.ts),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
        }
    }
}

impl From<MarketQuote> for MarketEntryDto {
    fn from(quote: MarketQuote) -> Self {
        Self::Quote {
            price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent,
        }
    }
}

/// "Jan 5"-style label for chart x-axis categories.
fn display_date(ts: OffsetDateTime) -> String {
    let format = format_description!("[month repr:short] [day padding:none]");
    ts.format(&format)
        .unwrap_or_else(|_| ts.date().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockboard_core::Symbol;

    #[test]
    fn renders_short_display_dates() {
        // 2024-01-05T12:00:00Z
        let ts = OffsetDateTime::from_unix_timestamp(1_704_456_000).expect("timestamp");
        assert_eq!(display_date(ts), "Jan 5");
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let symbol = Symbol::parse("AAPL").expect("symbol");
        let snapshot = QuoteSnapshot::new(symbol, "Apple Inc.", 190.5, 188.0, 199.6, 124.2, 10, 20)
            .expect("snapshot");
        let report = StockReportDto::build(snapshot, &[]);

        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["currentPrice"], 190.5);
        assert_eq!(value["week52High"], 199.6);
        assert_eq!(value["avgVolume"], 10);
    }

    #[test]
    fn failed_entry_serializes_as_error_object() {
        let entry = MarketEntryDto::Failed {
            error: "Failed to fetch data for TSLA".to_owned(),
        };
        let value = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(value["error"], "Failed to fetch data for TSLA");
    }
}
