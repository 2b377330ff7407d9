use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use stockboard_core::{Company, Interval, Symbol, TimeRange};

use crate::dto::{MarketEntryDto, StockReportDto};
use crate::error::ApiError;
use crate::state::AppState;

/// Build the gateway router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/stock/:symbol", get(stock))
        .route("/market-data", get(market_data))
        .route("/companies", get(companies))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct StockQuery {
    period: Option<String>,
    interval: Option<String>,
}

/// GET /stock/:symbol - merged quote snapshot plus historical sequence.
///
/// The period query selects the trailing fetch window through the fixed
/// range table; the interval hint is coerced to daily or weekly.
async fn stock(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<StockQuery>,
) -> Result<Json<StockReportDto>, ApiError> {
    let expose = state.expose_error_details;

    let symbol = Symbol::parse(&symbol).map_err(|err| {
        tracing::warn!(error = %err, "rejected stock request symbol");
        ApiError::StockFetch {
            details: expose.then(|| err.to_string()),
        }
    })?;

    let range = query
        .period
        .as_deref()
        .map(TimeRange::parse_or_default)
        .unwrap_or(TimeRange::DEFAULT);
    let plan = range.fetch_plan();
    let interval = query
        .interval
        .as_deref()
        .and_then(|value| Interval::from_str(value).ok())
        .unwrap_or(plan.interval)
        .coerce_daily_or_weekly();

    tracing::info!(symbol = %symbol, range = %range, interval = %interval, "fetching stock report");

    let snapshot = state.provider.quote(&symbol).await.map_err(|err| {
        tracing::error!(symbol = %symbol, error = %err, "quote fetch failed");
        ApiError::stock_fetch(&err, expose)
    })?;
    let bars = state
        .provider
        .history(&symbol, interval, plan.window)
        .await
        .map_err(|err| {
            tracing::error!(symbol = %symbol, error = %err, "history fetch failed");
            ApiError::stock_fetch(&err, expose)
        })?;

    Ok(Json(StockReportDto::build(snapshot, &bars)))
}

#[derive(Debug, Deserialize)]
struct MarketDataQuery {
    symbols: Option<String>,
}

/// GET /market-data?symbols=A,B,C - per-symbol snapshot-or-error map.
///
/// Sub-fetches run sequentially in input order, each gated by the pacer.
/// A failure for one symbol is recorded for that symbol only.
async fn market_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MarketDataQuery>,
) -> Result<Json<BTreeMap<String, MarketEntryDto>>, ApiError> {
    let raw = query
        .symbols
        .filter(|value| !value.trim().is_empty())
        .ok_or(ApiError::MissingSymbols)?;

    let mut entries = BTreeMap::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        state.pacer.pause().await;

        let key = token.to_ascii_uppercase();
        let entry = match Symbol::parse(token) {
            Ok(symbol) => match state.provider.market_quote(&symbol).await {
                Ok(quote) => MarketEntryDto::from(quote),
                Err(err) => {
                    tracing::warn!(symbol = %symbol, error = %err, "market quote failed");
                    failed_entry(&key)
                }
            },
            Err(err) => {
                tracing::warn!(symbol = token, error = %err, "invalid market-data symbol");
                failed_entry(&key)
            }
        };
        entries.insert(key, entry);
    }

    Ok(Json(entries))
}

/// GET /companies - static reference list.
async fn companies(State(state): State<Arc<AppState>>) -> Json<Vec<Company>> {
    Json(state.companies.clone())
}

fn failed_entry(symbol: &str) -> MarketEntryDto {
    MarketEntryDto::Failed {
        error: format!("Failed to fetch data for {symbol}"),
    }
}
