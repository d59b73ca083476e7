//! Application state and logic.

use std::time::Duration;

use crate::api::ApiClient;
use crate::chart::{export_png, PanDirection};
use crate::config::Config;
use crate::pages::{
    CalculusPage, EquationsPage, GeneralPlotPage, MatrixPage, PageController, PageId,
    ParametricPage, RosePage,
};
use crate::util;
use crate::worker::{Completion, Dispatch, RequestWorker};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Resolved configuration.
    pub config: Config,
    /// Page shown.
    pub active: PageId,
    /// Equation solvers.
    pub equations: EquationsPage,
    /// Rose curve explorer.
    pub rose: RosePage,
    /// Matrix calculator.
    pub matrix: MatrixPage,
    /// Calculus toolkit.
    pub calculus: CalculusPage,
    /// General function plotter.
    pub general: GeneralPlotPage,
    /// Parametric plotter.
    pub parametric: ParametricPage,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    worker: RequestWorker,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: Config) -> Self {
        let worker = RequestWorker::new(ApiClient::new(&config));
        let status = format!("Backend: {}", config.api_url);
        Self {
            config,
            active: PageId::Equations,
            equations: EquationsPage::new(),
            rose: RosePage::new(),
            matrix: MatrixPage::new(),
            calculus: CalculusPage::new(),
            general: GeneralPlotPage::new(),
            parametric: ParametricPage::new(),
            status,
            theme: Theme::GruvboxDark,
            worker,
        }
    }

    /// Page controller by id.
    pub fn page(&self, id: PageId) -> &dyn PageController {
        match id {
            PageId::Equations => &self.equations,
            PageId::Rose => &self.rose,
            PageId::Matrix => &self.matrix,
            PageId::Calculus => &self.calculus,
            PageId::General => &self.general,
            PageId::Parametric => &self.parametric,
        }
    }

    /// Mutable page controller by id.
    pub fn page_mut(&mut self, id: PageId) -> &mut dyn PageController {
        match id {
            PageId::Equations => &mut self.equations,
            PageId::Rose => &mut self.rose,
            PageId::Matrix => &mut self.matrix,
            PageId::Calculus => &mut self.calculus,
            PageId::General => &mut self.general,
            PageId::Parametric => &mut self.parametric,
        }
    }

    /// Page shown.
    pub fn current(&self) -> &dyn PageController {
        self.page(self.active)
    }

    fn current_mut(&mut self) -> &mut dyn PageController {
        self.page_mut(self.active)
    }

    /// Show the next page.
    pub fn next_page(&mut self) {
        self.show(self.active.next());
    }

    /// Show the previous page.
    pub fn prev_page(&mut self) {
        self.show(self.active.prev());
    }

    fn show(&mut self, id: PageId) {
        self.active = id;
        self.status = id.name().to_string();
        let dispatch = self.current_mut().on_show();
        self.dispatch(dispatch);
    }

    fn dispatch(&mut self, dispatch: Option<Dispatch>) {
        if let Some(dispatch) = dispatch {
            self.status = format!("Requesting {}...", dispatch.request.path());
            self.worker.submit(dispatch);
        }
    }

    /// Enter.
    pub fn submit(&mut self) {
        let dispatch = self.current_mut().submit();
        self.dispatch(dispatch);
    }

    /// Function key `n`.
    pub fn action(&mut self, n: u8) {
        let dispatch = self.current_mut().action(n);
        self.dispatch(dispatch);
    }

    /// Type into the focused input.
    pub fn input(&mut self, c: char) {
        self.current_mut().input(c);
    }

    /// Delete backwards in the focused input.
    pub fn backspace(&mut self) {
        self.current_mut().backspace();
    }

    /// Focus the next input.
    pub fn focus_next(&mut self) {
        self.current_mut().focus_next();
    }

    /// Focus the previous input.
    pub fn focus_prev(&mut self) {
        self.current_mut().focus_prev();
    }

    /// Pan the chart.
    pub fn pan(&mut self, direction: PanDirection) {
        let dispatch = self.current_mut().pan(direction);
        self.dispatch(dispatch);
    }

    /// Zoom the chart.
    pub fn zoom(&mut self, factor: f64) {
        let dispatch = self.current_mut().zoom(factor);
        self.dispatch(dispatch);
    }

    /// Reset pan/zoom and the data range.
    pub fn reset_zoom(&mut self) {
        let dispatch = self.current_mut().reset_zoom();
        self.dispatch(dispatch);
        self.status = "Zoom reset".to_string();
    }

    fn deliver(&mut self, completion: Completion) {
        tracing::info!(
            "Completed #{} for {} ({})",
            completion.seq,
            completion.page.name(),
            if completion.result.is_ok() { "ok" } else { "error" }
        );
        if completion.page == self.active && self.worker.in_flight() == 0 {
            self.status = "Ready".to_string();
        }
        self.page_mut(completion.page)
            .complete(completion.seq, completion.result);
    }

    /// Apply every completion that has arrived.
    pub fn poll_worker(&mut self) {
        for completion in self.worker.poll() {
            self.deliver(completion);
        }
    }

    /// Block until one completion arrives or `timeout` elapses.
    pub fn wait_for_worker(&mut self, timeout: Duration) -> bool {
        match self.worker.wait(timeout) {
            Some(completion) => {
                self.deliver(completion);
                true
            },
            None => false,
        }
    }

    /// Requests still running.
    pub fn in_flight(&self) -> usize {
        self.worker.in_flight()
    }

    /// Export the chart of the current page as PNG into the export directory.
    pub fn export_chart(&mut self) {
        let page = self.current();
        let Some(chart) = page.chart().filter(|c| c.has_data()) else {
            self.status = "No data to export.".to_string();
            return;
        };
        let path = self.config.export.dir.join(page.export_file_name());
        let (width, height) = (self.config.export.width, self.config.export.height);
        self.status = match export_png(chart, &path, width, height) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                format!("Export failed: {}", e)
            },
        };
    }

    /// Text of the current page's result, if any.
    pub fn result_text(&self) -> Option<(String, String)> {
        if self.active == PageId::Matrix {
            let rows = self.matrix.result()?;
            return Some((
                util::matrix_heading(self.matrix.operation()),
                util::format_matrix(rows),
            ));
        }
        let result = self.current().status().result?;
        Some((String::new(), result))
    }

    /// Copy the current result to the clipboard.
    pub fn copy_result(&mut self) {
        let Some((heading, body)) = self.result_text() else {
            self.status = "No result to copy".to_string();
            return;
        };
        self.status = match util::copy_result(&heading, &body) {
            Ok(()) => "Result copied!".to_string(),
            Err(e) => format!("Copy failed: {}", e),
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
