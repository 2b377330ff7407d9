//! Shared stubs for the behavioral suites: a scripted market-data provider
//! for gateway tests and a scripted gateway API for dashboard tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use time::{Duration, OffsetDateTime};

use stockboard_core::{
    Company, HistoricalBar, Interval, MarketDataProvider, MarketQuote, ProviderError,
    ProviderFuture, QuoteSnapshot, Symbol, TimeRange,
};
use stockboard_dashboard::api::ApiFuture;
use stockboard_dashboard::{DashboardError, GatewayApi, HistoricalPoint, MarketEntry, StockReport};

/// Scripted provider for gateway handler tests. Records every market-quote
/// call with its timestamp so pacing and ordering can be asserted.
#[derive(Default)]
pub struct StubProvider {
    quotes: HashMap<String, QuoteSnapshot>,
    market: HashMap<String, Result<MarketQuote, String>>,
    bars: Vec<HistoricalBar>,
    calls: Arc<Mutex<Vec<(String, Instant)>>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, snapshot: QuoteSnapshot) -> Self {
        self.quotes
            .insert(snapshot.symbol.as_str().to_owned(), snapshot);
        self
    }

    pub fn with_market_quote(mut self, symbol: &str, quote: MarketQuote) -> Self {
        self.market.insert(symbol.to_owned(), Ok(quote));
        self
    }

    pub fn with_market_failure(mut self, symbol: &str) -> Self {
        self.market
            .insert(symbol.to_owned(), Err(format!("upstream refused {symbol}")));
        self
    }

    pub fn with_bars(mut self, bars: Vec<HistoricalBar>) -> Self {
        self.bars = bars;
        self
    }

    pub fn call_log(&self) -> Arc<Mutex<Vec<(String, Instant)>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, symbol: &Symbol) {
        self.calls
            .lock()
            .expect("call log lock")
            .push((symbol.as_str().to_owned(), Instant::now()));
    }
}

impl MarketDataProvider for StubProvider {
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> ProviderFuture<'a, QuoteSnapshot> {
        Box::pin(async move {
            self.quotes
                .get(symbol.as_str())
                .cloned()
                .ok_or_else(|| ProviderError::symbol_not_found(symbol))
        })
    }

    fn market_quote<'a>(&'a self, symbol: &'a Symbol) -> ProviderFuture<'a, MarketQuote> {
        Box::pin(async move {
            self.record(symbol);
            match self.market.get(symbol.as_str()) {
                Some(Ok(quote)) => Ok(quote.clone()),
                Some(Err(message)) => Err(ProviderError::upstream(message.clone())),
                None => Err(ProviderError::symbol_not_found(symbol)),
            }
        })
    }

    fn history<'a>(
        &'a self,
        symbol: &'a Symbol,
        _interval: Interval,
        _window: Duration,
    ) -> ProviderFuture<'a, Vec<HistoricalBar>> {
        Box::pin(async move {
            if self.bars.is_empty() {
                return Err(ProviderError::upstream(format!(
                    "provider returned no usable history for '{symbol}'"
                )));
            }
            Ok(self.bars.clone())
        })
    }
}

/// Daily bars over the given closes, in chronological order.
pub fn daily_bars(closes: &[f64]) -> Vec<HistoricalBar> {
    closes
        .iter()
        .enumerate()
        .map(|(index, close)| {
            let ts = OffsetDateTime::from_unix_timestamp(1_700_000_000 + index as i64 * 86_400)
                .expect("timestamp");
            HistoricalBar::new(ts, *close, close + 1.0, (close - 1.0).max(0.0), *close)
                .expect("bar")
        })
        .collect()
}

pub fn snapshot(symbol: &str, price: f64, previous_close: f64) -> QuoteSnapshot {
    let symbol = Symbol::parse(symbol).expect("symbol");
    let name = format!("{} Test Co.", symbol.as_str());
    QuoteSnapshot::new(
        symbol,
        name,
        price,
        previous_close,
        price * 1.2,
        price * 0.6,
        58_000_000,
        61_000_000,
    )
    .expect("snapshot")
}

/// Scripted gateway API for dashboard controller tests.
#[derive(Default)]
pub struct ScriptedApi {
    companies: Option<Vec<Company>>,
    reports: HashMap<(String, TimeRange), StockReport>,
    market: Option<BTreeMap<String, MarketEntry>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_companies(mut self, companies: Vec<Company>) -> Self {
        self.companies = Some(companies);
        self
    }

    pub fn with_report(mut self, symbol: &str, range: TimeRange, report: StockReport) -> Self {
        self.reports.insert((symbol.to_owned(), range), report);
        self
    }

    pub fn with_market_data(mut self, entries: BTreeMap<String, MarketEntry>) -> Self {
        self.market = Some(entries);
        self
    }
}

impl GatewayApi for ScriptedApi {
    fn fetch_companies(&self) -> ApiFuture<'_, Vec<Company>> {
        Box::pin(async move {
            self.companies.clone().ok_or_else(|| {
                DashboardError::Gateway("companies endpoint unreachable".to_owned())
            })
        })
    }

    fn fetch_stock<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: TimeRange,
    ) -> ApiFuture<'a, StockReport> {
        Box::pin(async move {
            self.reports
                .get(&(symbol.as_str().to_owned(), range))
                .cloned()
                .ok_or_else(|| {
                    DashboardError::Gateway(format!("no scripted report for {symbol} at {range}"))
                })
        })
    }

    fn fetch_market_data<'a>(
        &'a self,
        _symbols: &'a [Symbol],
    ) -> ApiFuture<'a, BTreeMap<String, MarketEntry>> {
        Box::pin(async move {
            self.market.clone().ok_or_else(|| {
                DashboardError::Gateway("market-data endpoint unreachable".to_owned())
            })
        })
    }
}

/// Report with the given closes; date labels are "Day 1", "Day 2", ...
pub fn report(symbol: &str, closes: &[f64], current_price: f64) -> StockReport {
    StockReport {
        symbol: symbol.to_owned(),
        name: format!("{symbol} Test Co."),
        current_price,
        previous_close: current_price,
        week52_high: current_price * 1.2,
        week52_low: current_price * 0.6,
        avg_volume: 58_000_000,
        volume: 61_000_000,
        historical: closes
            .iter()
            .enumerate()
            .map(|(index, close)| HistoricalPoint {
                date: format!("Day {}", index + 1),
                open: *close,
                high: close + 1.0,
                low: (close - 1.0).max(0.0),
                close: *close,
            })
            .collect(),
    }
}
