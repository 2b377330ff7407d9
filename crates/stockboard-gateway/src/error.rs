use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use stockboard_core::ProviderError;

/// API-layer error mapped onto the wire contract.
#[derive(Debug)]
pub enum ApiError {
    /// 400 - the batch endpoint was called without a symbols parameter.
    MissingSymbols,

    /// 500 - the single-stock pipeline failed upstream.
    StockFetch { details: Option<String> },

    /// 500 - the batch handler itself failed.
    MarketData { details: Option<String> },
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    /// Detail text is only attached in a development configuration.
    pub fn stock_fetch(err: &ProviderError, expose_details: bool) -> Self {
        Self::StockFetch {
            details: expose_details.then(|| err.to_string()),
        }
    }

    pub fn market_data(message: impl Into<String>, expose_details: bool) -> Self {
        Self::MarketData {
            details: expose_details.then(|| message.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::MissingSymbols => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Symbols parameter required",
                    details: None,
                },
            ),
            Self::StockFetch { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Failed to fetch stock data",
                    details,
                },
            ),
            Self::MarketData { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Failed to fetch market data",
                    details,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
