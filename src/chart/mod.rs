//! Chart adapter: styled datasets, the visual pan/zoom transform and export.
//!
//! Two ranges exist for every synced plot: the *data* range the series were
//! sampled over (`ViewRange`, owned by the page) and the *visual* transform
//! held here. Pan and zoom change the transform and report the new visible
//! x-interval so the page can update its data range; reset clears both.

mod export;

pub use export::{export_png, plot_file_name};

use crate::series::PlotSeries;
use crate::view::ViewRange;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Function curves on the calculus page.
    pub const BLUE: Rgb = Rgb(59, 130, 246);
    /// Derivative/integral curves; default rose colour.
    pub const RED: Rgb = Rgb(239, 68, 68);
    /// General plots.
    pub const FUCHSIA: Rgb = Rgb(217, 70, 239);
    /// Parametric plots.
    pub const VIOLET: Rgb = Rgb(139, 92, 246);
    /// Quadratic graphs.
    pub const TEAL: Rgb = Rgb(75, 192, 192);
    /// Cubic graphs.
    pub const PURPLE: Rgb = Rgb(153, 102, 255);
    /// Polynomial graphs.
    pub const AMBER: Rgb = Rgb(234, 179, 8);
    /// Extra rose colours.
    pub const GREEN: Rgb = Rgb(34, 197, 94);
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    /// Line colour.
    pub color: Rgb,
    /// Line width in pixels (image export).
    pub width: f32,
    /// Dashed line.
    pub dashed: bool,
}

impl SeriesStyle {
    /// Solid line.
    pub fn solid(color: Rgb, width: f32) -> Self {
        Self {
            color,
            width,
            dashed: false,
        }
    }

    /// Dashed line.
    pub fn dashed(color: Rgb, width: f32) -> Self {
        Self {
            color,
            width,
            dashed: true,
        }
    }
}

/// One labelled, styled curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    /// Legend label.
    pub label: String,
    /// Points.
    pub series: PlotSeries,
    /// Drawing style.
    pub style: SeriesStyle,
}

impl ChartDataset {
    /// Create a dataset.
    pub fn new(label: impl Into<String>, series: PlotSeries, style: SeriesStyle) -> Self {
        Self {
            label: label.into(),
            series,
            style,
        }
    }
}

/// Axis-aligned plot bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Horizontal interval.
    pub x: (f64, f64),
    /// Vertical interval.
    pub y: (f64, f64),
}

impl Bounds {
    /// Square bounds `[-r, r]²`.
    pub fn symmetric(r: f64) -> Self {
        Self {
            x: (-r, r),
            y: (-r, r),
        }
    }

    /// The horizontal interval as a view range.
    pub fn x_range(&self) -> ViewRange {
        ViewRange::new(self.x.0, self.x.1)
    }

    fn padded(self, fraction: f64) -> Self {
        Self {
            x: pad(self.x, fraction),
            y: pad(self.y, fraction),
        }
    }
}

fn pad((lo, hi): (f64, f64), fraction: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        let margin = if lo.abs() > 1.0 { lo.abs() * 0.1 } else { 1.0 };
        return (lo - margin, hi + margin);
    }
    (lo - span * fraction, hi + span * fraction)
}

/// Datasets of one chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    /// Chart title.
    pub title: String,
    /// Curves in drawing order.
    pub datasets: Vec<ChartDataset>,
    /// X axis title.
    pub x_title: String,
    /// Y axis title.
    pub y_title: String,
}

impl ChartData {
    /// Create an empty chart.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            datasets: Vec::new(),
            x_title: "x".to_string(),
            y_title: "y".to_string(),
        }
    }

    /// Set axis titles.
    pub fn with_axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }

    /// Append a dataset.
    pub fn with_dataset(mut self, dataset: ChartDataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.datasets.iter().all(|d| d.series.is_empty())
    }

    /// Bounds enclosing every finite point.
    pub fn data_bounds(&self) -> Option<Bounds> {
        self.datasets
            .iter()
            .filter_map(|d| d.series.bounds())
            .fold(None, |acc: Option<Bounds>, (x, y)| {
                Some(match acc {
                    None => Bounds { x, y },
                    Some(b) => Bounds {
                        x: (b.x.0.min(x.0), b.x.1.max(x.1)),
                        y: (b.y.0.min(y.0), b.y.1.max(y.1)),
                    },
                })
            })
    }
}

/// Visual pan/zoom state of a rendered chart.
///
/// The identity transform shows the chart's home bounds: its fixed bounds
/// if it has them, otherwise the data fitted with a small margin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChartTransform {
    viewport: Option<Bounds>,
}

impl ChartTransform {
    /// Whether no pan or zoom is applied.
    pub fn is_identity(&self) -> bool {
        self.viewport.is_none()
    }

    /// Back to identity.
    pub fn reset(&mut self) {
        self.viewport = None;
    }

    /// Explicit viewport, if panned or zoomed.
    pub fn viewport(&self) -> Option<Bounds> {
        self.viewport
    }

    fn set(&mut self, bounds: Bounds) {
        self.viewport = Some(bounds);
    }
}

/// Pan/zoom direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    /// Towards smaller x.
    Left,
    /// Towards larger x.
    Right,
    /// Towards larger y.
    Up,
    /// Towards smaller y.
    Down,
}

/// Fraction of the visible span moved per pan step.
pub const PAN_STEP: f64 = 0.1;
/// Span factor per zoom-in step.
pub const ZOOM_IN: f64 = 0.8;
/// Span factor per zoom-out step.
pub const ZOOM_OUT: f64 = 1.25;

/// A chart as shown on a page: data plus visual transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    /// Datasets.
    pub data: ChartData,
    /// Pan/zoom state.
    pub transform: ChartTransform,
    fixed: Option<Bounds>,
    home_x: Option<ViewRange>,
}

impl Chart {
    /// Create a chart that fits its data.
    pub fn new(data: ChartData) -> Self {
        Self {
            data,
            transform: ChartTransform::default(),
            fixed: None,
            home_x: None,
        }
    }

    /// Use fixed home bounds instead of fitting the data.
    pub fn with_fixed_bounds(mut self, bounds: Bounds) -> Self {
        self.fixed = Some(bounds);
        self
    }

    /// Replace the datasets, keeping the transform.
    pub fn set_data(&mut self, data: ChartData) {
        self.data = data;
    }

    /// Change the fixed home bounds.
    pub fn set_fixed_bounds(&mut self, bounds: Option<Bounds>) {
        self.fixed = bounds;
    }

    /// Pin the horizontal home interval to the range the data was sampled
    /// over; only the vertical interval is fitted to the data then.
    pub fn set_home_x(&mut self, range: Option<ViewRange>) {
        self.home_x = range;
    }

    /// Bounds under the identity transform.
    pub fn home_bounds(&self) -> Bounds {
        if let Some(fixed) = self.fixed {
            return fixed;
        }
        let fitted = self
            .data
            .data_bounds()
            .map(|b| b.padded(0.05))
            .unwrap_or_else(|| Bounds::symmetric(10.0));
        match self.home_x {
            Some(range) => Bounds {
                x: (range.min, range.max),
                y: fitted.y,
            },
            None => fitted,
        }
    }

    /// Bounds currently visible.
    pub fn visible_bounds(&self) -> Bounds {
        self.transform.viewport().unwrap_or_else(|| self.home_bounds())
    }

    /// Pan one step and return the new visible x-interval.
    pub fn pan(&mut self, direction: PanDirection) -> ViewRange {
        let b = self.visible_bounds();
        let dx = (b.x.1 - b.x.0) * PAN_STEP;
        let dy = (b.y.1 - b.y.0) * PAN_STEP;
        let moved = match direction {
            PanDirection::Left => Bounds { x: (b.x.0 - dx, b.x.1 - dx), y: b.y },
            PanDirection::Right => Bounds { x: (b.x.0 + dx, b.x.1 + dx), y: b.y },
            PanDirection::Up => Bounds { x: b.x, y: (b.y.0 + dy, b.y.1 + dy) },
            PanDirection::Down => Bounds { x: b.x, y: (b.y.0 - dy, b.y.1 - dy) },
        };
        self.transform.set(moved);
        moved.x_range()
    }

    /// Zoom about the centre by `factor` and return the new visible x-interval.
    pub fn zoom(&mut self, factor: f64) -> ViewRange {
        let b = self.visible_bounds();
        let scale = |(lo, hi): (f64, f64)| {
            let center = (lo + hi) / 2.0;
            let half = (hi - lo) * factor / 2.0;
            (center - half, center + half)
        };
        let zoomed = Bounds {
            x: scale(b.x),
            y: scale(b.y),
        };
        self.transform.set(zoomed);
        zoomed.x_range()
    }

    /// Show exactly `range` horizontally, keeping the vertical interval.
    pub fn show_x_range(&mut self, range: ViewRange) {
        let y = self.visible_bounds().y;
        self.transform.set(Bounds {
            x: (range.min, range.max),
            y,
        });
    }

    /// Clear the visual transform.
    pub fn reset_transform(&mut self) {
        self.transform.reset();
    }

    /// Whether there is anything to show.
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_chart() -> Chart {
        Chart::new(ChartData::new("t").with_dataset(ChartDataset::new(
            "y = x",
            PlotSeries::new(vec![(-10.0, -10.0), (10.0, 10.0)]),
            SeriesStyle::solid(Rgb::FUCHSIA, 2.5),
        )))
    }

    #[test]
    fn identity_fits_data_with_margin() {
        let chart = line_chart();
        assert!(chart.transform.is_identity());
        assert_eq!(chart.visible_bounds().x, (-11.0, 11.0));
    }

    #[test]
    fn pinned_home_x_pans_from_the_sampled_range() {
        let mut chart = line_chart();
        chart.set_home_x(Some(ViewRange::default()));
        let home = chart.visible_bounds();
        assert_eq!(home.x, (-10.0, 10.0));
        assert_eq!(home.y, (-11.0, 11.0));

        assert_eq!(chart.pan(PanDirection::Right), ViewRange::new(-8.0, 12.0));
        chart.reset_transform();
        assert_eq!(chart.visible_bounds().x, (-10.0, 10.0));
    }

    #[test]
    fn zoom_reports_new_x_range() {
        let mut chart = line_chart().with_fixed_bounds(Bounds::symmetric(10.0));
        let range = chart.zoom(0.5);
        assert_eq!(range, ViewRange::new(-5.0, 5.0));
        assert!(!chart.transform.is_identity());
    }

    #[test]
    fn pan_moves_by_step_and_reset_restores_home() {
        let mut chart = line_chart().with_fixed_bounds(Bounds::symmetric(10.0));
        let range = chart.pan(PanDirection::Right);
        assert_eq!(range, ViewRange::new(-8.0, 12.0));
        chart.pan(PanDirection::Up);
        assert_eq!(chart.visible_bounds().y, (-8.0, 12.0));

        chart.reset_transform();
        assert_eq!(chart.visible_bounds(), Bounds::symmetric(10.0));
    }

    #[test]
    fn data_bounds_cover_all_datasets() {
        let data = ChartData::new("two")
            .with_dataset(ChartDataset::new(
                "a",
                PlotSeries::new(vec![(0.0, 1.0)]),
                SeriesStyle::solid(Rgb::BLUE, 2.0),
            ))
            .with_dataset(ChartDataset::new(
                "b",
                PlotSeries::new(vec![(2.0, -1.0)]),
                SeriesStyle::dashed(Rgb::RED, 3.0),
            ));
        assert_eq!(
            data.data_bounds(),
            Some(Bounds {
                x: (0.0, 2.0),
                y: (-1.0, 1.0)
            })
        );
    }

    #[test]
    fn empty_chart_has_default_home() {
        let chart = Chart::default();
        assert!(!chart.has_data());
        assert_eq!(chart.visible_bounds(), Bounds::symmetric(10.0));
    }
}
