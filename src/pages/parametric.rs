//! Parametric curves (x(t), y(t)).
//!
//! The parameter range is entered explicitly, so pan and zoom are purely
//! visual here and never trigger a new request.

use super::{unexpected_response, PageController, PageId, PageStatus};
use crate::api::ApiResponse;
use crate::chart::{Chart, ChartData, ChartDataset, PanDirection, Rgb, SeriesStyle};
use crate::error::Result;
use crate::forms::{self, FieldList, InputField};
use crate::sync::RequestTracker;
use crate::worker::Dispatch;

const TITLE: &str = "Parametric Plot";

/// Parametric plotter.
#[derive(Debug, Clone)]
pub struct ParametricPage {
    /// x(t), y(t), t min, t max.
    pub fields: FieldList,
    /// Rendered curve.
    pub chart: Chart,
    tracker: RequestTracker,
    error: Option<String>,
    shown: bool,
}

impl Default for ParametricPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ParametricPage {
    /// Create the page with a circle of radius 3 entered.
    pub fn new() -> Self {
        Self {
            fields: FieldList::new(vec![
                InputField::text("x(t)", "3 * cos(t)"),
                InputField::text("y(t)", "3 * sin(t)"),
                InputField::text("t min", "0"),
                InputField::text("t max", "2*pi"),
            ]),
            chart: Chart::new(ChartData::new(TITLE).with_axes("x(t)", "y(t)")),
            tracker: RequestTracker::new(),
            error: None,
            shown: false,
        }
    }

    fn label(&self) -> String {
        format!("({}, {})", self.fields.value(0).trim(), self.fields.value(1).trim())
    }
}

impl PageController for ParametricPage {
    fn id(&self) -> PageId {
        PageId::Parametric
    }

    fn fields(&self) -> Option<&FieldList> {
        Some(&self.fields)
    }

    fn fields_mut(&mut self) -> Option<&mut FieldList> {
        Some(&mut self.fields)
    }

    // The sample curve is plotted the first time the page is shown.
    fn on_show(&mut self) -> Option<Dispatch> {
        if std::mem::replace(&mut self.shown, true) {
            return None;
        }
        self.submit()
    }

    fn submit(&mut self) -> Option<Dispatch> {
        let request = match forms::parametric_request(
            self.fields.value(0),
            self.fields.value(1),
            self.fields.value(2),
            self.fields.value(3),
        ) {
            Ok(request) => request,
            Err(err) => {
                self.error = Some(err.user_message());
                return None;
            },
        };
        self.error = None;
        self.chart.reset_transform();
        Some(Dispatch {
            page: PageId::Parametric,
            seq: self.tracker.issue(),
            request,
        })
    }

    fn pan(&mut self, direction: PanDirection) -> Option<Dispatch> {
        if self.chart.has_data() {
            self.chart.pan(direction);
        }
        None
    }

    fn zoom(&mut self, factor: f64) -> Option<Dispatch> {
        if self.chart.has_data() {
            self.chart.zoom(factor);
        }
        None
    }

    fn reset_zoom(&mut self) -> Option<Dispatch> {
        self.chart.reset_transform();
        None
    }

    fn complete(&mut self, seq: u64, result: Result<ApiResponse>) {
        if !self.tracker.settle(seq) {
            return;
        }
        let series = result.and_then(|response| match response {
            ApiResponse::Plot(series) => Ok(series),
            other => Err(unexpected_response(&other)),
        });
        match series {
            Ok(series) => {
                let data = ChartData::new(TITLE).with_axes("x(t)", "y(t)").with_dataset(
                    ChartDataset::new(self.label(), series, SeriesStyle::solid(Rgb::VIOLET, 2.5)),
                );
                self.chart.set_data(data);
            },
            Err(err) => {
                self.error = Some(err.user_message());
                self.chart.set_data(ChartData::new(TITLE).with_axes("x(t)", "y(t)"));
            },
        }
    }

    fn chart(&self) -> Option<&Chart> {
        Some(&self.chart)
    }

    fn export_file_name(&self) -> String {
        "parametric-plot.png".to_string()
    }

    fn status(&self) -> PageStatus {
        PageStatus {
            result: None,
            error: self.error.clone(),
            loading: self.tracker.is_loading(),
        }
    }

    fn key_help(&self) -> &'static str {
        "Enter:plot"
    }
}
