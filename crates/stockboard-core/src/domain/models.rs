use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Symbol, ValidationError};

/// Reference-list entry shown in the dashboard sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub symbol: Symbol,
    pub name: String,
}

impl Company {
    pub fn new(symbol: Symbol, name: impl Into<String>) -> Self {
        Self {
            symbol,
            name: name.into(),
        }
    }
}

/// Point-in-time quote for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub symbol: Symbol,
    pub name: String,
    pub current_price: f64,
    pub previous_close: f64,
    pub week52_high: f64,
    pub week52_low: f64,
    pub avg_volume: u64,
    pub volume: u64,
}

impl QuoteSnapshot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        current_price: f64,
        previous_close: f64,
        week52_high: f64,
        week52_low: f64,
        avg_volume: u64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("current_price", current_price)?;
        validate_non_negative("previous_close", previous_close)?;
        validate_non_negative("week52_high", week52_high)?;
        validate_non_negative("week52_low", week52_low)?;

        Ok(Self {
            symbol,
            name: name.into(),
            current_price,
            previous_close,
            week52_high,
            week52_low,
            avg_volume,
            volume,
        })
    }
}

/// One OHLC observation at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalBar {
    pub ts: OffsetDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl HistoricalBar {
    pub fn new(
        ts: OffsetDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }
        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        Ok(Self {
            ts,
            open,
            high,
            low,
            close,
        })
    }
}

/// Ticker entry served by the batch market-data endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl MarketQuote {
    pub fn new(price: f64, change: f64, change_percent: f64) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;
        validate_finite("change", change)?;
        validate_finite("change_percent", change_percent)?;

        Ok(Self {
            price,
            change,
            change_percent,
        })
    }
}

/// One-step-ahead extrapolation of the closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_price: f64,
    pub change: f64,
    pub change_percent: f64,
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
