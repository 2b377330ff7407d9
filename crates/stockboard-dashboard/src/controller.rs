//! Dashboard controller: orchestrates the session, the gateway API, and the
//! chart surface. One logical task at a time; every fetch commits through
//! its ticket so stale responses are discarded instead of rendered.

use stockboard_core::{fallback_companies, filter_companies, Company, Symbol, TimeRange};

use crate::api::GatewayApi;
use crate::chart::{ChartSlot, ChartSpec, ChartSurface};
use crate::error::DashboardError;
use crate::session::{Commit, FetchTicket, Session, SessionEvent, SessionOutcome};
use crate::view::{PredictionView, StockInfoView, TickerState};

pub const DEFAULT_SYMBOL: &str = "AAPL";

pub struct Dashboard<A: GatewayApi, S: ChartSurface> {
    api: A,
    surface: S,
    session: Session,
    slot: ChartSlot,
    info: Option<StockInfoView>,
    prediction: Option<PredictionView>,
    ticker: TickerState,
}

impl<A: GatewayApi, S: ChartSurface> Dashboard<A, S> {
    pub fn new(api: A, surface: S) -> Result<Self, DashboardError> {
        let default_symbol = Symbol::parse(DEFAULT_SYMBOL)?;
        Ok(Self {
            api,
            surface,
            session: Session::new(default_symbol),
            slot: ChartSlot::new(),
            info: None,
            prediction: None,
            ticker: TickerState::Unavailable,
        })
    }

    /// Load companies (falling back to the static list), then the default
    /// symbol at the default range.
    pub async fn init(&mut self) -> Result<(), DashboardError> {
        let companies = match self.api.fetch_companies().await {
            Ok(companies) if !companies.is_empty() => companies,
            Ok(_) => fallback_companies(),
            Err(err) => {
                tracing::warn!(error = %err, "company fetch failed, using fallback list");
                fallback_companies()
            }
        };
        self.session.apply(SessionEvent::CompaniesLoaded(companies));

        self.dispatch(SessionEvent::Refresh).await
    }

    pub async fn select_company(&mut self, symbol: Symbol) -> Result<(), DashboardError> {
        self.dispatch(SessionEvent::SelectSymbol(symbol)).await
    }

    pub async fn select_range(&mut self, range: TimeRange) -> Result<(), DashboardError> {
        self.dispatch(SessionEvent::SelectRange(range)).await
    }

    pub async fn refresh(&mut self) -> Result<(), DashboardError> {
        self.dispatch(SessionEvent::Refresh).await
    }

    /// Filter the sidebar list. Pure over session state, never refetches.
    pub fn filter_companies(&self, filter: &str) -> Vec<Company> {
        filter_companies(self.session.companies(), filter)
    }

    /// Batch-refresh sidebar prices. Total failure becomes an explicit
    /// unavailable state.
    pub async fn update_ticker(&mut self) -> &TickerState {
        let symbols: Vec<Symbol> = self
            .session
            .companies()
            .iter()
            .map(|company| company.symbol.clone())
            .collect();

        self.ticker = if symbols.is_empty() {
            TickerState::Unavailable
        } else {
            match self.api.fetch_market_data(&symbols).await {
                Ok(entries) => TickerState::from_entries(&entries),
                Err(err) => {
                    tracing::warn!(error = %err, "market-data batch failed");
                    TickerState::Unavailable
                }
            }
        };

        &self.ticker
    }

    async fn dispatch(&mut self, event: SessionEvent) -> Result<(), DashboardError> {
        match self.session.apply(event) {
            SessionOutcome::Fetch(ticket) => self.run_fetch(ticket).await,
            _ => Ok(()),
        }
    }

    async fn run_fetch(&mut self, ticket: FetchTicket) -> Result<(), DashboardError> {
        let fetched = self.api.fetch_stock(&ticket.symbol, ticket.range).await;

        match fetched {
            Ok(report) => {
                let outcome = self.session.apply(SessionEvent::ReportLoaded { ticket, report });
                match outcome {
                    SessionOutcome::Committed(Commit::Applied) => self.render_current(),
                    _ => Ok(()),
                }
            }
            Err(err) => {
                self.session.apply(SessionEvent::FetchFailed { ticket });
                Err(err)
            }
        }
    }

    fn render_current(&mut self) -> Result<(), DashboardError> {
        let Some(report) = self.session.current_data() else {
            return Ok(());
        };

        let spec = ChartSpec::from_report(report)?;
        let info = StockInfoView::build(report);
        let prediction = PredictionView::build(report)?;

        self.slot.render(&mut self.surface, &spec);
        self.info = Some(info);
        self.prediction = Some(prediction);
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn info(&self) -> Option<&StockInfoView> {
        self.info.as_ref()
    }

    pub fn prediction(&self) -> Option<&PredictionView> {
        self.prediction.as_ref()
    }

    pub fn ticker(&self) -> &TickerState {
        &self.ticker
    }
}
