//! Core contracts for stockboard.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The market-data provider trait and its Yahoo adapter
//! - Request pacing for upstream rate-limit courtesy
//! - The least-squares price extrapolation used by the dashboard

pub mod companies;
pub mod domain;
pub mod error;
pub mod pacing;
pub mod provider;
pub mod providers;
pub mod regression;

pub use companies::{fallback_companies, filter_companies};
pub use domain::{
    Company, FetchPlan, HistoricalBar, Interval, MarketQuote, Prediction, QuoteSnapshot, Symbol,
    TimeRange,
};
pub use error::ValidationError;
pub use pacing::{RequestPacer, COURTESY_GAP};
pub use provider::{MarketDataProvider, ProviderError, ProviderErrorKind, ProviderFuture};
pub use providers::YahooProvider;
pub use regression::{predict_next_close, LinearFit};
