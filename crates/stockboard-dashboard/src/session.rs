//! Explicit session state with stale-fetch protection.
//!
//! All mutation funnels through [`Session::apply`]. Every fetch is stamped
//! with a monotonically increasing sequence number; only the result carrying
//! the most recent ticket may commit, so a superseded in-flight response can
//! never overwrite a newer selection.

use stockboard_core::{Company, Symbol, TimeRange};

use crate::api::StockReport;

/// Stamp handed out when a fetch begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    pub symbol: Symbol,
    pub range: TimeRange,
}

/// Result of attempting to commit fetched data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Applied,
    Stale,
}

/// State transition requested by the controller.
#[derive(Debug)]
pub enum SessionEvent {
    CompaniesLoaded(Vec<Company>),
    SelectSymbol(Symbol),
    SelectRange(TimeRange),
    Refresh,
    ReportLoaded {
        ticket: FetchTicket,
        report: StockReport,
    },
    FetchFailed {
        ticket: FetchTicket,
    },
}

/// What the controller must do after a transition.
#[derive(Debug)]
pub enum SessionOutcome {
    None,
    Fetch(FetchTicket),
    Committed(Commit),
}

/// The single mutable session: selected symbol, selected range, last
/// committed data, company list, and the fetch sequence counter.
#[derive(Debug)]
pub struct Session {
    companies: Vec<Company>,
    current_symbol: Symbol,
    current_range: TimeRange,
    current_data: Option<StockReport>,
    next_seq: u64,
    active_seq: Option<u64>,
}

impl Session {
    pub fn new(default_symbol: Symbol) -> Self {
        Self {
            companies: Vec::new(),
            current_symbol: default_symbol,
            current_range: TimeRange::DEFAULT,
            current_data: None,
            next_seq: 0,
            active_seq: None,
        }
    }

    pub fn apply(&mut self, event: SessionEvent) -> SessionOutcome {
        match event {
            SessionEvent::CompaniesLoaded(companies) => {
                self.companies = companies;
                SessionOutcome::None
            }
            SessionEvent::SelectSymbol(symbol) => {
                self.current_symbol = symbol;
                SessionOutcome::Fetch(self.begin_fetch())
            }
            SessionEvent::SelectRange(range) => {
                self.current_range = range;
                SessionOutcome::Fetch(self.begin_fetch())
            }
            SessionEvent::Refresh => SessionOutcome::Fetch(self.begin_fetch()),
            SessionEvent::ReportLoaded { ticket, report } => {
                if self.active_seq == Some(ticket.seq) {
                    self.current_data = Some(report);
                    self.active_seq = None;
                    SessionOutcome::Committed(Commit::Applied)
                } else {
                    SessionOutcome::Committed(Commit::Stale)
                }
            }
            SessionEvent::FetchFailed { ticket } => {
                if self.active_seq == Some(ticket.seq) {
                    self.active_seq = None;
                }
                SessionOutcome::None
            }
        }
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.next_seq += 1;
        self.active_seq = Some(self.next_seq);
        FetchTicket {
            seq: self.next_seq,
            symbol: self.current_symbol.clone(),
            range: self.current_range,
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn current_symbol(&self) -> &Symbol {
        &self.current_symbol
    }

    pub fn current_range(&self) -> TimeRange {
        self.current_range
    }

    pub fn current_data(&self) -> Option<&StockReport> {
        self.current_data.as_ref()
    }
}
