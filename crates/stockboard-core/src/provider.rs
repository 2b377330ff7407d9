use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use time::Duration;

use crate::{HistoricalBar, Interval, MarketQuote, QuoteSnapshot, Symbol};

/// Boxed future returned by provider trait methods.
pub type ProviderFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, ProviderError>> + Send + 'a>>;

/// Upstream error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    SymbolNotFound,
    Network,
    Timeout,
    Decode,
    Upstream,
}

/// Structured provider error surfaced through the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
    retryable: bool,
}

impl ProviderError {
    pub fn symbol_not_found(symbol: &Symbol) -> Self {
        Self {
            kind: ProviderErrorKind::SymbolNotFound,
            message: format!("no data for symbol '{symbol}'"),
            retryable: false,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Network,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Timeout,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Decode,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Upstream,
            message: message.into(),
            retryable: true,
        }
    }

    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ProviderErrorKind::SymbolNotFound => "provider.symbol_not_found",
            ProviderErrorKind::Network => "provider.network",
            ProviderErrorKind::Timeout => "provider.timeout",
            ProviderErrorKind::Decode => "provider.decode",
            ProviderErrorKind::Upstream => "provider.upstream",
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ProviderError {}

/// Market-data provider contract.
///
/// The gateway holds this behind a trait object so handler behavior can be
/// exercised against scripted providers without touching the network.
pub trait MarketDataProvider: Send + Sync {
    /// Full quote snapshot for the single-stock endpoint.
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> ProviderFuture<'a, QuoteSnapshot>;

    /// Reduced price/change quote for the batch ticker endpoint.
    fn market_quote<'a>(&'a self, symbol: &'a Symbol) -> ProviderFuture<'a, MarketQuote>;

    /// Chronological OHLC history over the trailing `window`.
    fn history<'a>(
        &'a self,
        symbol: &'a Symbol,
        interval: Interval,
        window: Duration,
    ) -> ProviderFuture<'a, Vec<HistoricalBar>>;
}
