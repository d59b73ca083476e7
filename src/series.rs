//! Plot series: ordered (x, y) points forming one curve.

use serde::{Deserialize, Serialize};

/// A single point as exchanged with the backend.
///
/// Either coordinate may be `null` where the function is undefined or an
/// asymptote was cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WirePoint {
    /// Horizontal coordinate.
    pub x: Option<f64>,
    /// Vertical coordinate.
    pub y: Option<f64>,
}

/// Ordered sequence of points forming one rendered curve.
///
/// Points with a non-finite coordinate are gap markers: the curve is broken
/// there instead of being joined across.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSeries {
    points: Vec<(f64, f64)>,
}

impl PlotSeries {
    /// Create a series from points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Build from backend points, turning `null` coordinates into gaps.
    pub fn from_wire(points: &[WirePoint]) -> Self {
        let points = points
            .iter()
            .map(|p| (p.x.unwrap_or(f64::NAN), p.y.unwrap_or(f64::NAN)))
            .collect();
        Self { points }
    }

    /// All points including gap markers.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of points including gap markers.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finite points only.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Runs of consecutive finite points, split at gap markers.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in &self.points {
            if x.is_finite() && y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Bounding box of the finite points as `((x_min, x_max), (y_min, y_max))`.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        self.finite_points().fold(None, |acc, (x, y)| match acc {
            None => Some(((x, x), (y, y))),
            Some(((x0, x1), (y0, y1))) => Some(((x0.min(x), x1.max(x)), (y0.min(y), y1.max(y)))),
        })
    }
}

impl From<Vec<(f64, f64)>> for PlotSeries {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_coordinates_become_gaps() {
        let wire = [
            WirePoint { x: Some(0.0), y: Some(1.0) },
            WirePoint { x: Some(1.0), y: None },
            WirePoint { x: Some(2.0), y: Some(3.0) },
            WirePoint { x: Some(3.0), y: Some(4.0) },
        ];
        let series = PlotSeries::from_wire(&wire);
        assert_eq!(series.len(), 4);
        assert_eq!(
            series.segments(),
            vec![vec![(0.0, 1.0)], vec![(2.0, 3.0), (3.0, 4.0)]]
        );
    }

    #[test]
    fn bounds_skip_gaps() {
        let series = PlotSeries::new(vec![(-1.0, 2.0), (f64::NAN, f64::NAN), (4.0, -3.0)]);
        assert_eq!(series.bounds(), Some(((-1.0, 4.0), (-3.0, 2.0))));
        assert_eq!(PlotSeries::default().bounds(), None);
    }
}
