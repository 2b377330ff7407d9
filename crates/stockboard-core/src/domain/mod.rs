mod interval;
mod models;
mod range;
mod symbol;

pub use interval::Interval;
pub use models::{Company, HistoricalBar, MarketQuote, Prediction, QuoteSnapshot};
pub use range::{FetchPlan, TimeRange};
pub use symbol::Symbol;
