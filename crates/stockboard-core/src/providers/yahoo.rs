//! Yahoo Finance adapter for the provider contract.
//!
//! Quotes come from the v7 quote endpoint, history from the v8 chart
//! endpoint. Chart points with null holes are skipped.

use serde::Deserialize;
use time::{Duration, OffsetDateTime};

use crate::provider::{MarketDataProvider, ProviderError, ProviderFuture};
use crate::{HistoricalBar, Interval, MarketQuote, QuoteSnapshot, Symbol};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Debug, Clone)]
pub struct YahooProvider {
    http: reqwest::Client,
    base_url: String,
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl YahooProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Inject a preconfigured client, e.g. one with a custom timeout.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    async fn fetch_quote_result(&self, symbol: &Symbol) -> Result<QuoteResult, ProviderError> {
        let url = format!(
            "{}/v7/finance/quote?symbols={}",
            self.base_url,
            urlencoding::encode(symbol.as_str())
        );
        tracing::debug!(symbol = %symbol, "fetching quote");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        check_status(symbol, response.status())?;

        let envelope: QuoteEnvelope = response.json().await.map_err(transport_error)?;
        envelope
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::symbol_not_found(symbol))
    }

    async fn fetch_chart(
        &self,
        symbol: &Symbol,
        interval: Interval,
        window: Duration,
    ) -> Result<Vec<HistoricalBar>, ProviderError> {
        let period2 = OffsetDateTime::now_utc().unix_timestamp();
        let period1 = period2 - window.whole_seconds();
        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            period1,
            period2,
            interval
        );
        tracing::debug!(symbol = %symbol, interval = %interval, "fetching chart history");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        check_status(symbol, response.status())?;

        let envelope: ChartEnvelope = response.json().await.map_err(transport_error)?;
        if let Some(error) = envelope.chart.error {
            return Err(ProviderError::upstream(format!(
                "chart error for '{symbol}': {} ({})",
                error.description, error.code
            )));
        }

        let result = envelope
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| ProviderError::symbol_not_found(symbol))?;

        let bars = collect_bars(result)?;
        if bars.is_empty() {
            return Err(ProviderError::upstream(format!(
                "provider returned no usable history for '{symbol}'"
            )));
        }
        Ok(bars)
    }
}

impl MarketDataProvider for YahooProvider {
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> ProviderFuture<'a, QuoteSnapshot> {
        Box::pin(async move {
            let raw = self.fetch_quote_result(symbol).await?;
            let price = raw
                .regular_market_price
                .ok_or_else(|| ProviderError::decode("quote missing regularMarketPrice"))?;
            let name = raw
                .long_name
                .or(raw.short_name)
                .unwrap_or_else(|| symbol.as_str().to_owned());

            QuoteSnapshot::new(
                symbol.clone(),
                name,
                price,
                raw.regular_market_previous_close.unwrap_or(price),
                raw.fifty_two_week_high.unwrap_or(price),
                raw.fifty_two_week_low.unwrap_or(price),
                raw.average_daily_volume3_month.unwrap_or(0),
                raw.regular_market_volume.unwrap_or(0),
            )
            .map_err(|err| ProviderError::decode(err.to_string()))
        })
    }

    fn market_quote<'a>(&'a self, symbol: &'a Symbol) -> ProviderFuture<'a, MarketQuote> {
        Box::pin(async move {
            let raw = self.fetch_quote_result(symbol).await?;
            let price = raw
                .regular_market_price
                .ok_or_else(|| ProviderError::decode("quote missing regularMarketPrice"))?;

            MarketQuote::new(
                price,
                raw.regular_market_change.unwrap_or(0.0),
                raw.regular_market_change_percent.unwrap_or(0.0),
            )
            .map_err(|err| ProviderError::decode(err.to_string()))
        })
    }

    fn history<'a>(
        &'a self,
        symbol: &'a Symbol,
        interval: Interval,
        window: Duration,
    ) -> ProviderFuture<'a, Vec<HistoricalBar>> {
        Box::pin(self.fetch_chart(symbol, interval, window))
    }
}

fn collect_bars(result: ChartResult) -> Result<Vec<HistoricalBar>, ProviderError> {
    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .unwrap_or_default();

    let mut bars = Vec::with_capacity(timestamps.len());
    for (index, ts) in timestamps.iter().enumerate() {
        let point = (
            quote.open.get(index).copied().flatten(),
            quote.high.get(index).copied().flatten(),
            quote.low.get(index).copied().flatten(),
            quote.close.get(index).copied().flatten(),
        );
        let (Some(open), Some(high), Some(low), Some(close)) = point else {
            continue;
        };

        let ts = OffsetDateTime::from_unix_timestamp(*ts)
            .map_err(|err| ProviderError::decode(format!("bad chart timestamp: {err}")))?;
        let bar = HistoricalBar::new(ts, open, high, low, close)
            .map_err(|err| ProviderError::decode(err.to_string()))?;
        bars.push(bar);
    }

    Ok(bars)
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::timeout(err.to_string())
    } else if err.is_decode() {
        ProviderError::decode(err.to_string())
    } else {
        ProviderError::network(err.to_string())
    }
}

fn check_status(symbol: &Symbol, status: reqwest::StatusCode) -> Result<(), ProviderError> {
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ProviderError::symbol_not_found(symbol));
    }
    if !status.is_success() {
        return Err(ProviderError::upstream(format!(
            "provider responded with status {status}"
        )));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    result: Vec<QuoteResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResult {
    long_name: Option<String>,
    short_name: Option<String>,
    regular_market_price: Option<f64>,
    regular_market_previous_close: Option<f64>,
    fifty_two_week_high: Option<f64>,
    fifty_two_week_low: Option<f64>,
    average_daily_volume3_month: Option<u64>,
    regular_market_volume: Option<u64>,
    regular_market_change: Option<f64>,
    regular_market_change_percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartResponse,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}
