//! Rose curve explorer. Everything is computed locally.

use super::{PageController, PageId, PageStatus};
use crate::api::ApiResponse;
use crate::chart::{Bounds, Chart, ChartData, ChartDataset, PanDirection, Rgb, SeriesStyle};
use crate::error::Result;
use crate::forms::{FieldList, InputField};
use crate::sampler::{rose, RoseParams};
use crate::worker::Dispatch;

/// Curve colours, cycled with F3.
pub const PALETTE: [Rgb; 5] = [Rgb::RED, Rgb::BLUE, Rgb::GREEN, Rgb::VIOLET, Rgb::AMBER];

/// Rose curve explorer.
#[derive(Debug, Clone)]
pub struct RosePage {
    /// a, n, d.
    pub fields: FieldList,
    /// Sampled curve.
    pub chart: Chart,
    params: RoseParams,
    color: usize,
}

impl Default for RosePage {
    fn default() -> Self {
        Self::new()
    }
}

impl RosePage {
    /// Create the page and sample the default curve.
    pub fn new() -> Self {
        let params = RoseParams::default();
        let mut page = Self {
            fields: FieldList::new(vec![
                InputField::numeric("a").with_value(params.a.to_string()),
                InputField::numeric("n").with_value(params.n.to_string()),
                InputField::numeric("d").with_value(params.d.to_string()),
            ]),
            chart: Chart::default(),
            params,
            color: 0,
        };
        page.redraw();
        page
    }

    /// Parameters in force.
    pub fn params(&self) -> RoseParams {
        self.params
    }

    /// Current curve colour.
    pub fn color(&self) -> Rgb {
        PALETTE[self.color]
    }

    /// Switch between cos and sin.
    pub fn toggle_trig(&mut self) {
        self.params.trig = self.params.trig.toggle();
        self.redraw();
    }

    /// Next palette colour.
    pub fn cycle_color(&mut self) {
        self.color = (self.color + 1) % PALETTE.len();
        self.redraw();
    }

    // Unparseable or empty fields keep the previous value; the rest is
    // clamped into the accepted intervals.
    fn read_fields(&mut self) {
        let parse = |text: &str, previous: f64| {
            text.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or(previous)
        };
        let params = RoseParams {
            a: parse(self.fields.value(0), self.params.a),
            n: parse(self.fields.value(1), self.params.n),
            d: parse(self.fields.value(2), self.params.d),
            trig: self.params.trig,
        };
        self.params = params.clamped();
    }

    fn redraw(&mut self) {
        let series = rose::sample(&self.params);
        let extent = self.params.a.abs() + 0.1;
        self.chart.set_fixed_bounds(Some(Bounds::symmetric(extent)));
        self.chart.set_data(ChartData::new("Rose Curve").with_dataset(ChartDataset::new(
            self.params.to_string(),
            series,
            SeriesStyle::solid(self.color(), 2.0),
        )));
    }
}

impl PageController for RosePage {
    fn id(&self) -> PageId {
        PageId::Rose
    }

    fn fields(&self) -> Option<&FieldList> {
        Some(&self.fields)
    }

    fn fields_mut(&mut self) -> Option<&mut FieldList> {
        Some(&mut self.fields)
    }

    fn on_edit(&mut self) {
        let before = self.params;
        self.read_fields();
        if self.params != before {
            self.redraw();
        }
    }

    fn submit(&mut self) -> Option<Dispatch> {
        self.on_edit();
        None
    }

    fn action(&mut self, n: u8) -> Option<Dispatch> {
        match n {
            2 => self.toggle_trig(),
            3 => self.cycle_color(),
            _ => {},
        }
        None
    }

    fn pan(&mut self, direction: PanDirection) -> Option<Dispatch> {
        self.chart.pan(direction);
        None
    }

    fn zoom(&mut self, factor: f64) -> Option<Dispatch> {
        self.chart.zoom(factor);
        None
    }

    fn reset_zoom(&mut self) -> Option<Dispatch> {
        self.chart.reset_transform();
        None
    }

    fn complete(&mut self, seq: u64, _result: Result<ApiResponse>) {
        tracing::debug!("Rose page ignores completion #{}", seq);
    }

    fn chart(&self) -> Option<&Chart> {
        Some(&self.chart)
    }

    fn export_file_name(&self) -> String {
        let p = self.params;
        format!("rose-curve-{}-a{}-n{}-d{}.png", p.trig.name(), p.a, p.n, p.d)
    }

    fn status(&self) -> PageStatus {
        PageStatus::default()
    }

    fn key_help(&self) -> &'static str {
        "F2:cos/sin | F3:colour"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::Trig;

    #[test]
    fn default_curve_is_drawn_with_fixed_bounds() {
        let page = RosePage::new();
        let dataset = &page.chart.data.datasets[0];
        assert_eq!(dataset.label, "r = 1 * cos((2/5)θ)");
        assert_eq!(dataset.series.points()[0], (1.0, 0.0));
        assert_eq!(dataset.style.color, Rgb::RED);
        assert_eq!(page.chart.home_bounds(), Bounds::symmetric(1.1));
    }

    #[test]
    fn invalid_or_empty_edits_keep_previous_value() {
        let mut page = RosePage::new();
        page.fields.set_focus(0);
        page.backspace();
        assert_eq!(page.params().a, 1.0);
        page.input('3');
        assert_eq!(page.params().a, 3.0);
        page.input('-');
        assert_eq!(page.params().a, 3.0);
    }

    #[test]
    fn out_of_range_edits_are_clamped() {
        let mut page = RosePage::new();
        page.fields.set_value(2, "1e20");
        page.on_edit();
        assert_eq!(page.params().d, 15.0);
        assert_eq!(page.chart.data.datasets[0].series.len(), rose::MAX_SAMPLES);

        page.fields.set_value(0, "0");
        page.on_edit();
        assert_eq!(page.params().a, 0.1);
        assert_eq!(page.export_file_name(), "rose-curve-cos-a0.1-n2-d15.png");
    }

    #[test]
    fn toggles_and_export_name() {
        let mut page = RosePage::new();
        page.action(2);
        assert_eq!(page.params().trig, Trig::Sin);
        page.action(3);
        assert_eq!(page.color(), Rgb::BLUE);
        assert_eq!(page.chart.data.datasets[0].style.color, Rgb::BLUE);
        assert_eq!(page.export_file_name(), "rose-curve-sin-a1-n2-d5.png");
    }

    #[test]
    fn never_dispatches() {
        let mut page = RosePage::new();
        assert!(page.submit().is_none());
        assert!(page.pan(PanDirection::Left).is_none());
        assert!(page.zoom(0.5).is_none());
        assert_eq!(page.status(), PageStatus::default());
    }
}
