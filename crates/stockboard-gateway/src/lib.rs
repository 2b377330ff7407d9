//! Market Data Gateway.
//!
//! Read-only axum service that translates dashboard requests into provider
//! calls, reshapes the responses into the wire schema, and returns JSON.
//! Stateless and idempotent per request; nothing is fatal to the process.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
