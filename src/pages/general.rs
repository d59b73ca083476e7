//! y = f(x) plotter.

use super::{unexpected_response, PageController, PageId, PageStatus, SyncedPlot};
use crate::api::ApiResponse;
use crate::chart::{plot_file_name, Chart, ChartData, ChartDataset, PanDirection, Rgb, SeriesStyle};
use crate::error::Result;
use crate::forms::{self, FieldList, InputField};
use crate::sync::{PlotUpdate, SyncController, Ticket};
use crate::view::ViewRange;
use crate::worker::Dispatch;

/// y = f(x) plotter.
#[derive(Debug, Clone)]
pub struct GeneralPlotPage {
    /// The expression field.
    pub fields: FieldList,
    /// Chart kept in step with the visible range.
    pub plot: SyncedPlot<String>,
}

impl Default for GeneralPlotPage {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneralPlotPage {
    /// Create the page with its sample expression.
    pub fn new() -> Self {
        Self {
            fields: FieldList::new(vec![InputField::text("y", "sin(x) / x")]),
            plot: SyncedPlot::new(
                SyncController::new().clearing_chart_on_error(),
                Chart::new(ChartData::new("Function Plot")),
            ),
        }
    }

    /// Plot the entered expression over the default range.
    pub fn plot_expression(&mut self) -> Option<Dispatch> {
        let expression = self.fields.value(0).trim().to_string();
        if let Err(err) = forms::general_plot_request(&expression, ViewRange::default()) {
            self.plot.sync.reject(err.user_message());
            return None;
        }
        let ticket = self.plot.perform_fresh(expression);
        self.dispatch(ticket)
    }

    fn dispatch(&mut self, ticket: Ticket<String>) -> Option<Dispatch> {
        match forms::general_plot_request(&ticket.task, ticket.view) {
            Ok(request) => Some(Dispatch {
                page: PageId::General,
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
        let mut data = ChartData::new("Function Plot");
        if let (Some(expression), Some(series)) =
            (self.plot.sync.pending(), self.plot.sync.series().first())
        {
            data = data.with_dataset(ChartDataset::new(
                format!("y = {}", expression),
                series.clone(),
                SeriesStyle::solid(Rgb::FUCHSIA, 2.5),
            ));
        }
        self.plot.chart.set_data(data);
    }
}

impl PageController for GeneralPlotPage {
    fn id(&self) -> PageId {
        PageId::General
    }

    fn fields(&self) -> Option<&FieldList> {
        Some(&self.fields)
    }

    fn fields_mut(&mut self) -> Option<&mut FieldList> {
        Some(&mut self.fields)
    }

    fn submit(&mut self) -> Option<Dispatch> {
        self.plot_expression()
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
        let label = self.plot.sync.pending().map(|e| format!("y = {}", e));
        let outcome = result.and_then(|response| match response {
            ApiResponse::Plot(series) => Ok(PlotUpdate {
                text: label,
                series: vec![series],
            }),
            other => Err(unexpected_response(&other)),
        });
        let failed = outcome.is_err();
        if self.plot.sync.apply(seq, outcome) || (failed && self.plot.sync.series().is_empty()) {
            self.rebuild_chart();
        }
    }

    fn chart(&self) -> Option<&Chart> {
        Some(&self.plot.chart)
    }

    fn export_file_name(&self) -> String {
        let expression = self
            .plot
            .sync
            .pending()
            .cloned()
            .unwrap_or_else(|| self.fields.value(0).trim().to_string());
        plot_file_name(&expression)
    }

    fn status(&self) -> PageStatus {
        PageStatus {
            result: self.plot.sync.result().map(str::to_string),
            error: self.plot.sync.error().map(str::to_string),
            loading: self.plot.sync.is_loading(),
        }
    }

    fn key_help(&self) -> &'static str {
        "Enter:plot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiRequest;
    use crate::error::MathscopeError;
    use crate::series::PlotSeries;

    fn sinc(range: ViewRange) -> ApiResponse {
        let points = (0..=10)
            .map(|i| {
                let x = range.min + range.span() * i as f64 / 10.0;
                (x, if x == 0.0 { 1.0 } else { x.sin() / x })
            })
            .collect();
        ApiResponse::Plot(PlotSeries::new(points))
    }

    #[test]
    fn panning_refreshes_range_and_keeps_result() {
        let mut page = GeneralPlotPage::new();
        let first = page.submit().unwrap();
        assert_eq!(first.request.x_range(), Some(ViewRange::new(-10.0, 10.0)));
        page.complete(first.seq, Ok(sinc(ViewRange::default())));
        assert_eq!(page.status().result.as_deref(), Some("y = sin(x) / x"));

        let refresh = page.set_range(ViewRange::new(-5.0, 5.0)).unwrap();
        match &refresh.request {
            ApiRequest::GeneralPlot(req) => {
                assert_eq!(req.expression, "sin(x) / x");
                assert_eq!(req.x_range, ViewRange { min: -5.0, max: 5.0 });
            },
            other => panic!("unexpected request {:?}", other),
        }
        page.complete(refresh.seq, Ok(sinc(ViewRange::new(-5.0, 5.0))));

        let status = page.status();
        assert_eq!(status.result.as_deref(), Some("y = sin(x) / x"));
        assert_eq!(status.error, None);
        let first_x = page.plot.chart.data.datasets[0].series.points()[0].0;
        assert_eq!(first_x, -5.0);
        assert_eq!(page.plot.chart.visible_bounds().x, (-5.0, 5.0));
    }

    #[test]
    fn reset_restores_default_range() {
        let mut page = GeneralPlotPage::new();
        let first = page.submit().unwrap();
        page.complete(first.seq, Ok(sinc(ViewRange::default())));
        let zoomed = page.zoom(0.5).unwrap();
        page.complete(zoomed.seq, Ok(sinc(zoomed.request.x_range().unwrap())));

        let reset = page.reset_zoom().unwrap();
        assert_eq!(reset.request.x_range(), Some(ViewRange::default()));
        assert!(page.plot.chart.transform.is_identity());
        assert_eq!(page.plot.chart.visible_bounds().x, (-10.0, 10.0));

        let panned = page.pan(PanDirection::Right).unwrap();
        assert_eq!(panned.request.x_range(), Some(ViewRange::new(-8.0, 12.0)));
    }

    #[test]
    fn stale_pan_response_is_ignored() {
        let mut page = GeneralPlotPage::new();
        let first = page.submit().unwrap();
        page.complete(first.seq, Ok(sinc(ViewRange::default())));

        let slow = page.set_range(ViewRange::new(-5.0, 5.0)).unwrap();
        let fast = page.set_range(ViewRange::new(0.0, 10.0)).unwrap();
        page.complete(fast.seq, Ok(sinc(ViewRange::new(0.0, 10.0))));
        page.complete(slow.seq, Ok(sinc(ViewRange::new(-5.0, 5.0))));

        let first_x = page.plot.chart.data.datasets[0].series.points()[0].0;
        assert_eq!(first_x, 0.0);
    }

    #[test]
    fn error_clears_chart() {
        let mut page = GeneralPlotPage::new();
        let first = page.submit().unwrap();
        page.complete(first.seq, Ok(sinc(ViewRange::default())));
        assert!(page.plot.chart.has_data());

        page.fields.set_value(0, "sin(");
        let bad = page.submit().unwrap();
        page.complete(bad.seq, Err(MathscopeError::Backend("Invalid mathematical expression.".into())));
        assert!(!page.plot.chart.has_data());
        assert_eq!(page.status().error.as_deref(), Some("Invalid mathematical expression."));
    }

    #[test]
    fn export_name_uses_plotted_expression() {
        let mut page = GeneralPlotPage::new();
        page.submit();
        page.fields.set_value(0, "x");
        assert_eq!(page.export_file_name(), "plot-sin(x)___x.png");
    }
}
