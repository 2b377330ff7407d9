//! Chart-surface abstraction.
//!
//! The renderer is an external collaborator (draws a line chart from labels
//! and a numeric series, supports destroy/recreate). [`ChartSlot`] owns the
//! destroy-before-create dance so re-rendering always leaves exactly one
//! active chart bound to the surface.

use stockboard_core::ValidationError;

use crate::api::StockReport;
use crate::error::DashboardError;

pub type ChartId = u64;

/// Single-series line chart: date labels on the x-axis, closes on the y.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<f64>,
}

impl ChartSpec {
    /// Build the closing-price chart for a report. An empty historical
    /// sequence is an error, never an empty chart.
    pub fn from_report(report: &StockReport) -> Result<Self, DashboardError> {
        if report.historical.is_empty() {
            return Err(ValidationError::InsufficientData { len: 0, min: 1 }.into());
        }

        Ok(Self {
            title: format!("{} ({})", report.name, report.symbol),
            labels: report.date_labels(),
            series: report.closes(),
        })
    }
}

/// External charting collaborator.
pub trait ChartSurface: Send {
    fn create(&mut self, spec: &ChartSpec) -> ChartId;
    fn destroy(&mut self, id: ChartId);
}

/// Tracks the single chart instance currently bound to the canvas.
#[derive(Debug, Default)]
pub struct ChartSlot {
    active: Option<ChartId>,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroys the prior instance (if any) before creating the next one.
    pub fn render(&mut self, surface: &mut dyn ChartSurface, spec: &ChartSpec) -> ChartId {
        if let Some(previous) = self.active.take() {
            surface.destroy(previous);
        }
        let id = surface.create(spec);
        self.active = Some(id);
        id
    }

    pub fn clear(&mut self, surface: &mut dyn ChartSurface) {
        if let Some(previous) = self.active.take() {
            surface.destroy(previous);
        }
    }

    pub fn active(&self) -> Option<ChartId> {
        self.active
    }
}

/// In-memory surface for headless use: hands out sequential ids and tracks
/// which instances are still alive.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    next_id: ChartId,
    live: Vec<ChartId>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, id: ChartId) -> bool {
        self.live.contains(&id)
    }
}

impl ChartSurface for HeadlessSurface {
    fn create(&mut self, _spec: &ChartSpec) -> ChartId {
        self.next_id += 1;
        self.live.push(self.next_id);
        self.next_id
    }

    fn destroy(&mut self, id: ChartId) {
        self.live.retain(|live| *live != id);
    }
}
