//! Page controllers, one per tool.
//!
//! A page owns its form state, chart and request bookkeeping. User actions
//! return at most one [`Dispatch`] for the worker; completions come back
//! through [`PageController::complete`].

mod calculus;
mod equations;
mod general;
mod matrix;
mod parametric;
mod plot;
mod rose;

pub use calculus::{CalculusPage, CalculusTask};
pub use equations::{EquationsPage, Solver};
pub use general::GeneralPlotPage;
pub use matrix::{MatrixCursor, MatrixPage, Operand};
pub use parametric::ParametricPage;
pub use plot::SyncedPlot;
pub use rose::RosePage;

use crate::api::ApiResponse;
use crate::chart::{Chart, PanDirection};
use crate::error::{MathscopeError, Result};
use crate::forms::FieldList;
use crate::view::ViewRange;
use crate::worker::Dispatch;

/// Identifies a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Quadratic, cubic and polynomial solvers.
    Equations,
    /// Rose curve plotter.
    Rose,
    /// Matrix calculator.
    Matrix,
    /// Differentiation and integration.
    Calculus,
    /// y = f(x) plotter.
    General,
    /// (x(t), y(t)) plotter.
    Parametric,
}

impl PageId {
    /// Pages in tab order.
    pub const ALL: [PageId; 6] = [
        PageId::Equations,
        PageId::Rose,
        PageId::Matrix,
        PageId::Calculus,
        PageId::General,
        PageId::Parametric,
    ];

    /// Tab title.
    pub fn name(self) -> &'static str {
        match self {
            PageId::Equations => "Solvers",
            PageId::Rose => "Rose Curve",
            PageId::Matrix => "Matrix",
            PageId::Calculus => "Calculus",
            PageId::General => "Plotter",
            PageId::Parametric => "Parametric",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&p| p == self).unwrap_or(0)
    }

    /// Next page, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What a page currently reports to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageStatus {
    /// Textual result.
    pub result: Option<String>,
    /// Error message.
    pub error: Option<String>,
    /// Whether a request is outstanding.
    pub loading: bool,
}

/// Behaviour shared by every page.
///
/// Editing defaults operate on [`PageController::fields_mut`]; pages with a
/// different input model override them.
pub trait PageController {
    /// Page identity.
    fn id(&self) -> PageId;

    /// Editable fields, if the page uses a plain field list.
    fn fields(&self) -> Option<&FieldList> {
        None
    }

    /// Mutable editable fields.
    fn fields_mut(&mut self) -> Option<&mut FieldList> {
        None
    }

    /// Called after any edit.
    fn on_edit(&mut self) {}

    /// Called whenever the page becomes the active one.
    fn on_show(&mut self) -> Option<Dispatch> {
        None
    }

    /// Type into the focused input.
    fn input(&mut self, c: char) -> bool {
        let accepted = self.fields_mut().map(|f| f.input(c)).unwrap_or(false);
        if accepted {
            self.on_edit();
        }
        accepted
    }

    /// Delete backwards in the focused input.
    fn backspace(&mut self) -> bool {
        let changed = self.fields_mut().map(|f| f.backspace()).unwrap_or(false);
        if changed {
            self.on_edit();
        }
        changed
    }

    /// Focus the next input.
    fn focus_next(&mut self) {
        if let Some(fields) = self.fields_mut() {
            fields.focus_next();
        }
    }

    /// Focus the previous input.
    fn focus_prev(&mut self) {
        if let Some(fields) = self.fields_mut() {
            fields.focus_prev();
        }
    }

    /// Primary action (Enter).
    fn submit(&mut self) -> Option<Dispatch>;

    /// Page-specific action bound to function key `n` (F2..F8).
    fn action(&mut self, _n: u8) -> Option<Dispatch> {
        None
    }

    /// Pan the chart one step.
    fn pan(&mut self, _direction: PanDirection) -> Option<Dispatch> {
        None
    }

    /// Zoom the chart by `factor`.
    fn zoom(&mut self, _factor: f64) -> Option<Dispatch> {
        None
    }

    /// Show an explicit x-interval.
    fn set_range(&mut self, _range: ViewRange) -> Option<Dispatch> {
        None
    }

    /// Reset pan/zoom (and the data range, where synced).
    fn reset_zoom(&mut self) -> Option<Dispatch> {
        None
    }

    /// Apply a completed request.
    fn complete(&mut self, seq: u64, result: Result<ApiResponse>);

    /// Chart shown on the page.
    fn chart(&self) -> Option<&Chart> {
        None
    }

    /// File name used when exporting the chart.
    fn export_file_name(&self) -> String;

    /// Result, error and loading state.
    fn status(&self) -> PageStatus;

    /// Help text for page-specific keys.
    fn key_help(&self) -> &'static str;
}

/// Error for a response that does not match the request's endpoint.
pub(crate) fn unexpected_response(response: &ApiResponse) -> MathscopeError {
    MathscopeError::Transport(format!("unexpected response: {:?}", response))
}
