//! PNG export of the visible chart area.

use std::path::Path;

use plotters::prelude::*;

use super::{Bounds, Chart, ChartDataset};
use crate::error::{MathscopeError, Result};

// Points per dash when drawing dashed series.
const DASH_POINTS: usize = 4;

/// Render the chart's datasets within its visible bounds to a PNG file.
///
/// The image carries the curves, a light grid and the coordinate axes; the
/// legend and title stay in the file name.
pub fn export_png(chart: &Chart, path: &Path, width: u32, height: u32) -> Result<()> {
    if !chart.has_data() {
        return Err(MathscopeError::export(path, "No data to export."));
    }
    let bounds = chart.visible_bounds();
    let err = |e: &dyn std::fmt::Display| MathscopeError::export(path, e);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut plot = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(bounds.x.0..bounds.x.1, bounds.y.0..bounds.y.1)
        .map_err(|e| err(&e))?;

    for line in grid_lines(&bounds) {
        plot.draw_series(LineSeries::new(line, RGBColor(235, 235, 235)))
            .map_err(|e| err(&e))?;
    }
    for axis in axis_lines(&bounds) {
        plot.draw_series(LineSeries::new(axis, RGBColor(120, 120, 120).stroke_width(1)))
            .map_err(|e| err(&e))?;
    }

    for dataset in &chart.data.datasets {
        draw_dataset(&mut plot, dataset).map_err(|e| err(&e))?;
    }

    root.present().map_err(|e| err(&e))?;
    tracing::info!("Exported chart to {}", path.display());
    Ok(())
}

type Plot<'a, 'b> = ChartContext<
    'a,
    BitMapBackend<'b>,
    Cartesian2d<plotters::coord::types::RangedCoordf64, plotters::coord::types::RangedCoordf64>,
>;

fn draw_dataset<'b>(
    plot: &mut Plot<'_, 'b>,
    dataset: &ChartDataset,
) -> std::result::Result<(), DrawingAreaErrorKind<<BitMapBackend<'b> as DrawingBackend>::ErrorType>>
{
    let super::Rgb(r, g, b) = dataset.style.color;
    let width = dataset.style.width.round().max(1.0) as u32;
    let style = RGBColor(r, g, b).stroke_width(width);

    for segment in dataset.series.segments() {
        if dataset.style.dashed && segment.len() > DASH_POINTS + 1 {
            for dash in segment.windows(DASH_POINTS + 1).step_by(DASH_POINTS * 2) {
                plot.draw_series(LineSeries::new(dash.iter().copied(), style))?;
            }
        } else {
            plot.draw_series(LineSeries::new(segment, style))?;
        }
    }
    Ok(())
}

fn axis_lines(bounds: &Bounds) -> Vec<Vec<(f64, f64)>> {
    let mut lines = Vec::new();
    if bounds.x.0 <= 0.0 && bounds.x.1 >= 0.0 {
        lines.push(vec![(0.0, bounds.y.0), (0.0, bounds.y.1)]);
    }
    if bounds.y.0 <= 0.0 && bounds.y.1 >= 0.0 {
        lines.push(vec![(bounds.x.0, 0.0), (bounds.x.1, 0.0)]);
    }
    lines
}

fn grid_lines(bounds: &Bounds) -> Vec<Vec<(f64, f64)>> {
    let mut lines = Vec::new();
    for x in ticks(bounds.x) {
        lines.push(vec![(x, bounds.y.0), (x, bounds.y.1)]);
    }
    for y in ticks(bounds.y) {
        lines.push(vec![(bounds.x.0, y), (bounds.x.1, y)]);
    }
    lines
}

/// Round tick positions, about ten per axis.
fn ticks((lo, hi): (f64, f64)) -> Vec<f64> {
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    let raw = span / 10.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// File name for a general plot: `plot-<expr>.png` with `*`, spaces and `/`
/// replaced by `_`.
pub fn plot_file_name(expression: &str) -> String {
    let stem: String = expression
        .chars()
        .map(|c| if matches!(c, '*' | ' ' | '/') { '_' } else { c })
        .collect();
    format!("plot-{}.png", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartData, Rgb, SeriesStyle};
    use crate::series::PlotSeries;

    #[test]
    fn plot_file_name_replaces_separators() {
        assert_eq!(plot_file_name("sin(x) / x"), "plot-sin(x)___x.png");
        assert_eq!(plot_file_name("x**2"), "plot-x__2.png");
    }

    #[test]
    fn ticks_are_round() {
        assert_eq!(ticks((-10.0, 10.0)), vec![-10.0, -8.0, -6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(ticks((1.0, 1.0)).is_empty());
    }

    #[test]
    fn exports_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line.png");
        let chart = Chart::new(ChartData::new("line").with_dataset(ChartDataset::new(
            "y = x",
            PlotSeries::new(vec![(-1.0, -1.0), (0.0, 0.0), (f64::NAN, f64::NAN), (1.0, 1.0), (2.0, 2.0)]),
            SeriesStyle::dashed(Rgb::RED, 3.0),
        )));
        export_png(&chart, &path, 320, 240).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn empty_chart_is_not_exported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        assert!(export_png(&Chart::default(), &path, 100, 100).is_err());
        assert!(!path.exists());
    }
}
