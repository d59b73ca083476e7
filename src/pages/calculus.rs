//! Differentiate or integrate a function and plot both curves.

use super::{unexpected_response, PageController, PageId, PageStatus, SyncedPlot};
use crate::api::{ApiResponse, CalculusOperation};
use crate::chart::{Chart, ChartData, ChartDataset, PanDirection, Rgb, SeriesStyle};
use crate::error::Result;
use crate::forms::{self, FieldList, InputField};
use crate::sync::{PlotUpdate, SyncController, Ticket};
use crate::view::ViewRange;
use crate::worker::Dispatch;

/// Memorized calculus computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculusTask {
    /// Function of x.
    pub expression: String,
    /// Operation.
    pub operation: CalculusOperation,
}

/// Calculus toolkit page.
#[derive(Debug, Clone)]
pub struct CalculusPage {
    /// Expression input.
    pub fields: FieldList,
    /// Synced chart.
    pub plot: SyncedPlot<CalculusTask>,
    result_expression: Option<String>,
}

impl Default for CalculusPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculusPage {
    /// Create the page with a sample function.
    pub fn new() -> Self {
        Self {
            fields: FieldList::new(vec![InputField::text("f(x)", "x**2")]),
            plot: SyncedPlot::new(SyncController::new(), Chart::new(ChartData::new("Function Plot"))),
            result_expression: None,
        }
    }

    /// Run `operation` on the entered expression as a fresh computation.
    pub fn perform(&mut self, operation: CalculusOperation) -> Option<Dispatch> {
        let expression = self.fields.value(0).to_string();
        if let Err(err) = forms::calculus_request(&expression, operation, Default::default()) {
            self.plot.sync.reject(err.user_message());
            return None;
        }
        let task = CalculusTask {
            expression: expression.trim().to_string(),
            operation,
        };
        let ticket = self.plot.perform_fresh(task);
        self.dispatch(ticket)
    }

    fn dispatch(&mut self, ticket: Ticket<CalculusTask>) -> Option<Dispatch> {
        match forms::calculus_request(&ticket.task.expression, ticket.task.operation, ticket.view) {
            Ok(request) => Some(Dispatch {
                page: PageId::Calculus,
                seq: ticket.seq,
                request,
            }),
            Err(err) => {
                self.plot.sync.reject(err.user_message());
                None
            },
        }
    }

    fn rebuild_chart(&mut self) {
        let Some(task) = self.plot.sync.pending().cloned() else {
            return;
        };
        let series = self.plot.sync.series();
        let mut data = ChartData::new("Function Plot");
        if let Some(original) = series.first() {
            data = data.with_dataset(ChartDataset::new(
                format!("f(x) = {}", task.expression),
                original.clone(),
                SeriesStyle::solid(Rgb::BLUE, 2.0),
            ));
        }
        if let Some(result) = series.get(1) {
            data = data.with_dataset(ChartDataset::new(
                format!(
                    "{} = {}",
                    task.operation.series_prefix(),
                    self.result_expression.as_deref().unwrap_or("?")
                ),
                result.clone(),
                SeriesStyle::dashed(Rgb::RED, 3.0),
            ));
        }
        self.plot.chart.set_data(data);
    }
}

impl PageController for CalculusPage {
    fn id(&self) -> PageId {
        PageId::Calculus
    }

    fn fields(&self) -> Option<&FieldList> {
        Some(&self.fields)
    }

    fn fields_mut(&mut self) -> Option<&mut FieldList> {
        Some(&mut self.fields)
    }

    fn submit(&mut self) -> Option<Dispatch> {
        self.perform(CalculusOperation::Differentiate)
    }

    fn action(&mut self, n: u8) -> Option<Dispatch> {
        match n {
            2 => self.perform(CalculusOperation::Differentiate),
            3 => self.perform(CalculusOperation::Integrate),
            _ => None,
        }
    }

    fn pan(&mut self, direction: PanDirection) -> Option<Dispatch> {
        let ticket = self.plot.pan(direction)?;
        self.dispatch(ticket)
    }

    fn zoom(&mut self, factor: f64) -> Option<Dispatch> {
        let ticket = self.plot.zoom(factor)?;
        self.dispatch(ticket)
    }

    fn set_range(&mut self, range: ViewRange) -> Option<Dispatch> {
        let ticket = self.plot.set_range(range)?;
        self.dispatch(ticket)
    }

    fn reset_zoom(&mut self) -> Option<Dispatch> {
        let ticket = self.plot.reset()?;
        self.dispatch(ticket)
    }

    fn complete(&mut self, seq: u64, result: Result<ApiResponse>) {
        let operation = self.plot.sync.pending().map(|t| t.operation);
        let outcome = result.and_then(|response| match response {
            ApiResponse::Calculus {
                expression,
                original,
                result,
            } => {
                let text = operation.map(|op| format!("{} {}", op.result_heading(), expression));
                Ok((expression, PlotUpdate {
                    text,
                    series: vec![original, result],
                }))
            },
            other => Err(unexpected_response(&other)),
        });

        match outcome {
            Ok((expression, update)) => {
                if self.plot.sync.apply(seq, Ok(update)) {
                    self.result_expression = Some(expression);
                    self.rebuild_chart();
                }
            },
            Err(err) => {
                self.plot.sync.apply(seq, Err(err));
            },
        }
    }

    fn chart(&self) -> Option<&Chart> {
        Some(&self.plot.chart)
    }

    fn export_file_name(&self) -> String {
        "calculus-graph.png".to_string()
    }

    fn status(&self) -> PageStatus {
        PageStatus {
            result: self.plot.sync.result().map(str::to_string),
            error: self.plot.sync.error().map(str::to_string),
            loading: self.plot.sync.is_loading(),
        }
    }

    fn key_help(&self) -> &'static str {
        "Enter/F2:differentiate | F3:integrate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiRequest;
    use crate::error::MathscopeError;
    use crate::series::PlotSeries;

    fn response(expr: &str) -> ApiResponse {
        ApiResponse::Calculus {
            expression: expr.to_string(),
            original: PlotSeries::new(vec![(-10.0, 100.0), (10.0, 100.0)]),
            result: PlotSeries::new(vec![(-10.0, -20.0), (10.0, 20.0)]),
        }
    }

    #[test]
    fn differentiate_then_pan_replays_operation() {
        let mut page = CalculusPage::new();
        let first = page.submit().unwrap();
        match &first.request {
            ApiRequest::Calculus(req) => {
                assert_eq!(req.expression, "x**2");
                assert_eq!(req.operation, CalculusOperation::Differentiate);
                assert_eq!(req.x_range, ViewRange::default());
            },
            other => panic!("unexpected request {:?}", other),
        }
        page.complete(first.seq, Ok(response("2*x")));
        assert_eq!(page.status().result.as_deref(), Some("Derivative: 2*x"));
        assert_eq!(page.plot.chart.data.datasets.len(), 2);
        assert_eq!(page.plot.chart.data.datasets[1].label, "f'(x) = 2*x");
        assert!(page.plot.chart.data.datasets[1].style.dashed);

        // Edits after the computation do not change the replayed task.
        page.fields.set_value(0, "x**3");
        let refresh = page.pan(PanDirection::Right).unwrap();
        assert!(refresh.seq > first.seq);
        let range = refresh.request.x_range().unwrap();
        assert_eq!(range, page.plot.sync.view());
        match &refresh.request {
            ApiRequest::Calculus(req) => assert_eq!(req.expression, "x**2"),
            other => panic!("unexpected request {:?}", other),
        }

        page.complete(refresh.seq, Ok(response("2*x")));
        assert_eq!(page.status().result.as_deref(), Some("Derivative: 2*x"));
    }

    #[test]
    fn pan_before_any_computation_sends_nothing() {
        let mut page = CalculusPage::new();
        assert!(page.pan(PanDirection::Left).is_none());
        assert!(page.zoom(0.5).is_none());
        assert!(page.reset_zoom().is_none());
        assert_eq!(page.plot.sync.requests_issued(), 0);
    }

    #[test]
    fn integrate_uses_integral_labels() {
        let mut page = CalculusPage::new();
        let d = page.action(3).unwrap();
        page.complete(d.seq, Ok(response("x**3/3")));
        assert_eq!(page.status().result.as_deref(), Some("Integral: x**3/3"));
        assert_eq!(page.plot.chart.data.datasets[1].label, "∫f(x)dx = x**3/3");
    }

    #[test]
    fn empty_expression_is_rejected_locally() {
        let mut page = CalculusPage::new();
        page.fields.set_value(0, "");
        assert!(page.submit().is_none());
        assert_eq!(page.status().error.as_deref(), Some("Please enter a function."));
        assert_eq!(page.plot.sync.requests_issued(), 0);
    }

    #[test]
    fn backend_error_is_shown_verbatim() {
        let mut page = CalculusPage::new();
        let d = page.submit().unwrap();
        page.complete(
            d.seq,
            Err(MathscopeError::Backend("Invalid mathematical expression.".into())),
        );
        let status = page.status();
        assert_eq!(status.error.as_deref(), Some("Invalid mathematical expression."));
        assert!(!status.loading);
    }
}
