use thiserror::Error;

use stockboard_core::ValidationError;

/// Client-side failure surfaced to the UI layer.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("gateway request failed: {0}")]
    Gateway(String),

    #[error("gateway returned an unexpected payload: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DashboardError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Gateway(err.to_string())
        }
    }
}
