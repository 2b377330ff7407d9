use std::sync::Arc;

use stockboard_core::{fallback_companies, Company, MarketDataProvider, RequestPacer};

use crate::GatewayConfig;

/// Shared state for all handlers.
pub struct AppState {
    pub provider: Arc<dyn MarketDataProvider>,
    pub pacer: RequestPacer,
    pub companies: Vec<Company>,
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: &GatewayConfig) -> Arc<Self> {
        Self::with_pacer(provider, config, RequestPacer::courtesy())
    }

    /// Suites shrink the pacing gap to keep batch tests fast.
    pub fn with_pacer(
        provider: Arc<dyn MarketDataProvider>,
        config: &GatewayConfig,
        pacer: RequestPacer,
    ) -> Arc<Self> {
        Arc::new(Self {
            provider,
            pacer,
            companies: fallback_companies(),
            expose_error_details: config.expose_error_details,
        })
    }
}
