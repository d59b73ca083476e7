//! Quadratic, cubic and general polynomial solvers.
//!
//! Roots come from the backend. The graph is sampled locally whenever every
//! coefficient parses, so it follows edits and pan/zoom without any request.

use super::{unexpected_response, PageController, PageId, PageStatus};
use crate::api::ApiResponse;
use crate::chart::{Chart, ChartData, ChartDataset, PanDirection, Rgb, SeriesStyle};
use crate::error::Result;
use crate::forms::{EquationForm, EquationKind, FieldList};
use crate::sampler::polynomial;
use crate::sync::RequestTracker;
use crate::view::ViewRange;
use crate::worker::Dispatch;

/// One solver: coefficient form, roots and a locally sampled graph.
#[derive(Debug, Clone)]
pub struct Solver {
    /// Coefficients.
    pub form: EquationForm,
    /// Rendered graph.
    pub chart: Chart,
    result: Option<String>,
    error: Option<String>,
    tracker: RequestTracker,
    view: ViewRange,
}

impl Solver {
    /// Create an empty solver of `kind`.
    pub fn new(kind: EquationKind) -> Self {
        let mut chart = Chart::new(graph_data(kind));
        chart.set_home_x(Some(ViewRange::default()));
        Self {
            form: EquationForm::new(kind),
            chart,
            result: None,
            error: None,
            tracker: RequestTracker::new(),
            view: ViewRange::default(),
        }
    }

    /// Solver kind.
    pub fn kind(&self) -> EquationKind {
        self.form.kind()
    }

    /// Range the graph is sampled over.
    pub fn view(&self) -> ViewRange {
        self.view
    }

    /// Resample the graph, if every coefficient is a number.
    pub fn replot(&mut self) {
        let kind = self.kind();
        match self.form.coefficients() {
            Ok(coefficients) => {
                let series = polynomial::sample(&coefficients, self.view);
                self.chart.set_data(graph_data(kind).with_dataset(ChartDataset::new(
                    format!("{} Graph", kind.name()),
                    series,
                    SeriesStyle::solid(graph_color(kind), 2.0),
                )));
            },
            Err(_) => self.chart.set_data(graph_data(kind)),
        }
    }

    fn set_view(&mut self, view: ViewRange) {
        if view != self.view {
            self.view = view;
            self.chart.set_home_x(Some(view));
            self.replot();
        }
    }

    fn reset(&mut self) {
        self.chart.reset_transform();
        self.set_view(ViewRange::default());
    }

    /// Validate and build the solve request. Restores the default view.
    fn solve(&mut self, seq: u64) -> Option<Dispatch> {
        self.result = None;
        self.error = None;
        let request = match self.form.build() {
            Ok(request) => request,
            Err(err) => {
                self.error = Some(err.user_message());
                return None;
            },
        };
        self.reset();
        Some(Dispatch {
            page: PageId::Equations,
            seq: self.tracker.issue_as(seq),
            request,
        })
    }

    fn complete(&mut self, seq: u64, result: Result<ApiResponse>) {
        if !self.tracker.settle(seq) {
            return;
        }
        match result {
            Ok(ApiResponse::Roots(roots)) => {
                self.result = Some(format!("Roots: {}", roots.join(", ")));
            },
            Ok(other) => self.error = Some(unexpected_response(&other).user_message()),
            Err(err) => self.error = Some(err.user_message()),
        }
    }

    fn status(&self) -> PageStatus {
        PageStatus {
            result: self.result.clone(),
            error: self.error.clone(),
            loading: self.tracker.is_loading(),
        }
    }
}

fn graph_data(kind: EquationKind) -> ChartData {
    ChartData::new(format!("{} Graph", kind.name())).with_axes("x-axis", "y-axis")
}

fn graph_color(kind: EquationKind) -> Rgb {
    match kind {
        EquationKind::Quadratic => Rgb::TEAL,
        EquationKind::Cubic => Rgb::PURPLE,
        EquationKind::Polynomial => Rgb::AMBER,
    }
}

/// The three solvers, one shown at a time.
#[derive(Debug, Clone)]
pub struct EquationsPage {
    solvers: Vec<Solver>,
    active: usize,
    seq: u64,
}

impl Default for EquationsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl EquationsPage {
    /// One solver per equation kind, quadratic first.
    pub fn new() -> Self {
        Self {
            solvers: vec![
                Solver::new(EquationKind::Quadratic),
                Solver::new(EquationKind::Cubic),
                Solver::new(EquationKind::Polynomial),
            ],
            active: 0,
            seq: 0,
        }
    }

    /// Solver currently shown.
    pub fn solver(&self) -> &Solver {
        &self.solvers[self.active]
    }

    /// Mutable solver currently shown.
    pub fn solver_mut(&mut self) -> &mut Solver {
        &mut self.solvers[self.active]
    }

    /// Show the next solver.
    pub fn cycle_kind(&mut self) {
        self.active = (self.active + 1) % self.solvers.len();
    }

    /// Show the solver of `kind`.
    pub fn select(&mut self, kind: EquationKind) {
        if let Some(i) = self.solvers.iter().position(|s| s.kind() == kind) {
            self.active = i;
        }
    }

    /// Change the polynomial degree by `delta`.
    pub fn adjust_degree(&mut self, delta: isize) {
        let solver = self.solver_mut();
        let degree = solver.form.degree().saturating_add_signed(delta);
        let before = solver.form.degree();
        solver.form.set_degree(degree);
        if solver.form.degree() != before {
            solver.replot();
        }
    }
}

impl PageController for EquationsPage {
    fn id(&self) -> PageId {
        PageId::Equations
    }

    fn fields(&self) -> Option<&FieldList> {
        Some(&self.solver().form.fields)
    }

    fn fields_mut(&mut self) -> Option<&mut FieldList> {
        Some(&mut self.solver_mut().form.fields)
    }

    fn on_edit(&mut self) {
        self.solver_mut().replot();
    }

    fn submit(&mut self) -> Option<Dispatch> {
        self.seq += 1;
        let seq = self.seq;
        self.solver_mut().solve(seq)
    }

    fn action(&mut self, n: u8) -> Option<Dispatch> {
        match n {
            2 => self.cycle_kind(),
            3 => self.adjust_degree(-1),
            4 => self.adjust_degree(1),
            _ => {},
        }
        None
    }

    fn pan(&mut self, direction: PanDirection) -> Option<Dispatch> {
        let solver = self.solver_mut();
        if solver.chart.has_data() {
            let range = solver.chart.pan(direction);
            solver.set_view(range);
        }
        None
    }

    fn zoom(&mut self, factor: f64) -> Option<Dispatch> {
        let solver = self.solver_mut();
        if solver.chart.has_data() {
            let range = solver.chart.zoom(factor);
            solver.set_view(range);
        }
        None
    }

    fn reset_zoom(&mut self) -> Option<Dispatch> {
        self.solver_mut().reset();
        None
    }

    fn complete(&mut self, seq: u64, result: Result<ApiResponse>) {
        match self.solvers.iter_mut().find(|s| s.tracker.is_current(seq)) {
            Some(solver) => solver.complete(seq, result),
            None => tracing::debug!("Discarding stale solver response #{}", seq),
        }
    }

    fn chart(&self) -> Option<&Chart> {
        Some(&self.solver().chart)
    }

    fn export_file_name(&self) -> String {
        format!("{}.png", self.solver().kind().export_stem())
    }

    fn status(&self) -> PageStatus {
        self.solver().status()
    }

    fn key_help(&self) -> &'static str {
        "Enter:solve | F2:solver | F3/F4:degree -/+"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiRequest, SolveRequest};

    fn type_into(page: &mut EquationsPage, values: &[&str]) {
        for (i, v) in values.iter().enumerate() {
            page.solver_mut().form.fields.set_focus(i);
            for c in v.chars() {
                page.input(c);
            }
        }
    }

    #[test]
    fn quadratic_with_empty_c_sends_nothing() {
        let mut page = EquationsPage::new();
        type_into(&mut page, &["1", "-3"]);
        assert!(page.submit().is_none());
        assert_eq!(
            page.status().error.as_deref(),
            Some("All coefficient fields must be filled.")
        );
        assert!(!page.status().loading);
    }

    #[test]
    fn graph_follows_edits() {
        let mut page = EquationsPage::new();
        type_into(&mut page, &["1", "0"]);
        assert!(!page.solver().chart.has_data());
        type_into(&mut page, &["1", "0", "-4"]);
        let chart = &page.solver().chart;
        assert_eq!(chart.data.datasets[0].label, "Quadratic Graph");
        assert_eq!(chart.data.datasets[0].series.len(), polynomial::INTERVALS + 1);
    }

    #[test]
    fn solve_reports_roots() {
        let mut page = EquationsPage::new();
        type_into(&mut page, &["1", "-3", "2"]);
        let d = page.submit().unwrap();
        assert_eq!(
            d.request,
            ApiRequest::Solve(SolveRequest::Quadratic {
                a: "1".into(),
                b: "-3".into(),
                c: "2".into()
            })
        );
        assert!(page.status().loading);
        page.complete(d.seq, Ok(ApiResponse::Roots(vec!["1".into(), "2".into()])));
        assert_eq!(page.status().result.as_deref(), Some("Roots: 1, 2"));
    }

    #[test]
    fn pan_resamples_locally_and_reset_restores_default() {
        let mut page = EquationsPage::new();
        type_into(&mut page, &["1", "0", "0"]);
        assert!(page.pan(PanDirection::Right).is_none());
        let view = page.solver().view();
        assert_ne!(view, ViewRange::default());
        let first_x = page.solver().chart.data.datasets[0].series.points()[0].0;
        assert_eq!(first_x, view.min);

        page.reset_zoom();
        assert_eq!(page.solver().view(), ViewRange { min: -10.0, max: 10.0 });
        assert!(page.solver().chart.transform.is_identity());
        assert_eq!(page.solver().chart.visible_bounds().x, (-10.0, 10.0));
    }

    #[test]
    fn solvers_complete_independently() {
        let mut page = EquationsPage::new();
        type_into(&mut page, &["1", "-3", "2"]);
        let quad = page.submit().unwrap();

        page.cycle_kind();
        type_into(&mut page, &["1", "0", "0", "0"]);
        let cubic = page.submit().unwrap();

        page.complete(quad.seq, Ok(ApiResponse::Roots(vec!["1".into(), "2".into()])));
        page.complete(cubic.seq, Ok(ApiResponse::Roots(vec!["0".into()])));
        assert_eq!(page.status().result.as_deref(), Some("Roots: 0"));
        page.select(EquationKind::Quadratic);
        assert_eq!(page.status().result.as_deref(), Some("Roots: 1, 2"));
    }

    #[test]
    fn degree_change_clears_coefficients_and_graph() {
        let mut page = EquationsPage::new();
        page.select(EquationKind::Polynomial);
        type_into(&mut page, &["1", "0", "0", "0", "1"]);
        assert!(page.solver().chart.has_data());

        page.action(3);
        assert_eq!(page.solver().form.degree(), 3);
        assert_eq!(page.solver().form.fields.len(), 4);
        assert!(!page.solver().chart.has_data());
        assert_eq!(page.export_file_name(), "polynomial-graph.png");
    }
}
