//! Client-side mirror of the gateway's wire contract and the API seam the
//! controller drives.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;

use stockboard_core::{Company, Symbol, TimeRange};

use crate::error::DashboardError;

/// Boxed future returned by API trait methods.
pub type ApiFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, DashboardError>> + Send + 'a>>;

/// Merged quote-plus-history payload from `GET /stock/:symbol`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReport {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub previous_close: f64,
    pub week52_high: f64,
    pub week52_low: f64,
    pub avg_volume: u64,
    pub volume: u64,
    pub historical: Vec<HistoricalPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalPoint {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl StockReport {
    pub fn closes(&self) -> Vec<f64> {
        self.historical.iter().map(|point| point.close).collect()
    }

    pub fn date_labels(&self) -> Vec<String> {
        self.historical
            .iter()
            .map(|point| point.date.clone())
            .collect()
    }
}

/// One entry of the `GET /market-data` map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MarketEntry {
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

/// Gateway API seam. The controller is generic over this so behavior can be
/// driven by scripted implementations.
pub trait GatewayApi: Send + Sync {
    fn fetch_companies(&self) -> ApiFuture<'_, Vec<Company>>;

    fn fetch_stock<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: TimeRange,
    ) -> ApiFuture<'a, StockReport>;

    fn fetch_market_data<'a>(
        &'a self,
        symbols: &'a [Symbol],
    ) -> ApiFuture<'a, BTreeMap<String, MarketEntry>>;
}

/// reqwest-backed gateway client over plain loopback HTTP.
#[derive(Debug, Clone)]
pub struct HttpGatewayApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGatewayApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path_and_query: String,
    ) -> Result<T, DashboardError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(DashboardError::from_transport)?;

        if !response.status().is_success() {
            return Err(DashboardError::Gateway(format!(
                "gateway responded with status {}",
                response.status()
            )));
        }

        response.json().await.map_err(DashboardError::from_transport)
    }
}

impl GatewayApi for HttpGatewayApi {
    fn fetch_companies(&self) -> ApiFuture<'_, Vec<Company>> {
        Box::pin(self.get_json("/companies".to_owned()))
    }

    fn fetch_stock<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: TimeRange,
    ) -> ApiFuture<'a, StockReport> {
        let plan = range.fetch_plan();
        let path = format!(
            "/stock/{}?period={}&interval={}",
            urlencoding::encode(symbol.as_str()),
            range,
            plan.interval
        );
        Box::pin(self.get_json(path))
    }

    fn fetch_market_data<'a>(
        &'a self,
        symbols: &'a [Symbol],
    ) -> ApiFuture<'a, BTreeMap<String, MarketEntry>> {
        let joined = symbols
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Box::pin(self.get_json(format!("/market-data?symbols={joined}")))
    }
}
