//! Local sampling of a polynomial over the visible range.

use crate::series::PlotSeries;
use crate::view::ViewRange;

/// Number of intervals the visible range is divided into.
pub const INTERVALS: usize = 100;

/// Evaluate a polynomial with coefficients ordered from the highest degree.
pub fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Sample `INTERVALS + 1` evenly spaced points over `view`, both ends included.
pub fn sample(coefficients: &[f64], view: ViewRange) -> PlotSeries {
    let step = view.span() / INTERVALS as f64;
    let points = (0..=INTERVALS)
        .map(|i| {
            let x = view.min + i as f64 * step;
            (x, evaluate(coefficients, x))
        })
        .collect();
    PlotSeries::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_expanded_form() {
        // x³ - 2x + 1 at x = 3
        assert_eq!(evaluate(&[1.0, 0.0, -2.0, 1.0], 3.0), 22.0);
        assert_eq!(evaluate(&[], 3.0), 0.0);
    }

    #[test]
    fn samples_cover_view_inclusive() {
        let series = sample(&[1.0, 0.0, 0.0], ViewRange::new(-5.0, 5.0));
        assert_eq!(series.len(), INTERVALS + 1);
        assert_eq!(series.points()[0], (-5.0, 25.0));
        let (x, y) = series.points()[INTERVALS];
        assert!((x - 5.0).abs() < 1e-12);
        assert!((y - 25.0).abs() < 1e-9);
    }
}
