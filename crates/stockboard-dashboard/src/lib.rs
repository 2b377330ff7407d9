//! Dashboard client.
//!
//! Browser-agnostic controller logic for the stock dashboard: explicit
//! session state with stale-fetch protection, the gateway API client, a
//! chart-surface abstraction with idempotent re-render, and the view models
//! the UI binds to.

pub mod api;
pub mod chart;
pub mod controller;
pub mod error;
pub mod session;
pub mod view;

pub use api::{ApiFuture, GatewayApi, HistoricalPoint, HttpGatewayApi, MarketEntry, StockReport};
pub use chart::{ChartId, ChartSlot, ChartSpec, ChartSurface, HeadlessSurface};
pub use controller::Dashboard;
pub use error::DashboardError;
pub use session::{Commit, FetchTicket, Session, SessionEvent, SessionOutcome};
pub use view::{Direction, PredictionView, StockInfoView, TickerEntry, TickerState};
