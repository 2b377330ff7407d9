//! View models the UI binds to. Formatting rules follow the dashboard's
//! display conventions: two-decimal prices, signed change with percent,
//! K/M/B volume suffixes.

use std::collections::BTreeMap;

use stockboard_core::predict_next_close;

use crate::api::{MarketEntry, StockReport};
use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// Header card: live price, change vs previous close, 52-week stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockInfoView {
    pub header: String,
    pub price: String,
    pub change_text: String,
    pub direction: Direction,
    pub week52_high: String,
    pub week52_low: String,
    pub high_diff: String,
    pub low_diff: String,
    pub avg_volume: String,
    pub volume: String,
}

impl StockInfoView {
    pub fn build(report: &StockReport) -> Self {
        let change = report.current_price - report.previous_close;
        let change_percent = if report.previous_close > 0.0 {
            change / report.previous_close * 100.0
        } else {
            0.0
        };

        let high_diff = if report.week52_high > 0.0 {
            (report.week52_high - report.current_price) / report.week52_high * 100.0
        } else {
            0.0
        };
        let low_diff = if report.week52_low > 0.0 {
            (report.current_price - report.week52_low) / report.week52_low * 100.0
        } else {
            0.0
        };

        Self {
            header: format!("{} ({})", report.name, report.symbol),
            price: format!("${:.2}", report.current_price),
            change_text: format_signed_change(change, change_percent),
            direction: Direction::from_change(change),
            week52_high: format!("${:.2}", report.week52_high),
            week52_low: format!("${:.2}", report.week52_low),
            high_diff: format!("{high_diff:.2}%"),
            low_diff: format!("{low_diff:.2}%"),
            avg_volume: format_volume(report.avg_volume),
            volume: format_volume(report.volume),
        }
    }
}

/// Predicted next close and its delta against the live price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionView {
    pub price: String,
    pub change_text: String,
    pub direction: Direction,
}

impl PredictionView {
    pub fn build(report: &StockReport) -> Result<Self, DashboardError> {
        let prediction = predict_next_close(&report.closes(), report.current_price)?;

        Ok(Self {
            price: format!("${:.2}", prediction.predicted_price),
            change_text: format_signed_change(prediction.change, prediction.change_percent),
            direction: Direction::from_change(prediction.change),
        })
    }
}

/// Sidebar price-ticker state. Total batch failure is an explicit
/// unavailable state, never synthesized prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerState {
    Quotes(BTreeMap<String, TickerEntry>),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerEntry {
    Price { text: String, direction: Direction },
    Unavailable,
}

impl TickerState {
    pub fn from_entries(entries: &BTreeMap<String, MarketEntry>) -> Self {
        let quotes = entries
            .iter()
            .map(|(symbol, entry)| {
                let ticker = match entry {
                    MarketEntry::Quote { price, change, .. } => TickerEntry::Price {
                        text: format!("${price:.2}"),
                        direction: Direction::from_change(*change),
                    },
                    MarketEntry::Failed { .. } => TickerEntry::Unavailable,
                };
                (symbol.clone(), ticker)
            })
            .collect();

        Self::Quotes(quotes)
    }
}

pub fn format_signed_change(change: f64, percent: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{change:.2} ({percent:.2}%)")
}

/// 1234 -> "1.2K", 58_000_000 -> "58.0M", 1_200_000_000 -> "1.2B".
pub fn format_volume(value: u64) -> String {
    let value_f = value as f64;
    if value >= 1_000_000_000 {
        format!("{:.1}B", value_f / 1_000_000_000.0)
    } else if value >= 1_000_000 {
        format!("{:.1}M", value_f / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value_f / 1_000.0)
    } else {
        value.to_string()
    }
}
