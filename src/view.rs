//! Visible horizontal range of a plot.

use serde::{Deserialize, Serialize};

/// Lower bound of the default view.
pub const DEFAULT_MIN: f64 = -10.0;
/// Upper bound of the default view.
pub const DEFAULT_MAX: f64 = 10.0;

/// The currently visible interval on a plot's horizontal axis.
///
/// Serializes as `{"min": .., "max": ..}`, the shape the backend expects for
/// `x_range`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRange {
    /// Left edge.
    pub min: f64,
    /// Right edge.
    pub max: f64,
}

impl Default for ViewRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl ViewRange {
    /// Create a range, swapping the bounds if given in reverse.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Whether this is exactly the default `{-10, 10}` range.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range.
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Shift by a fraction of the span (negative moves left).
    pub fn panned(&self, fraction: f64) -> Self {
        let delta = self.span() * fraction;
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Scale the span about the centre. A factor below 1 zooms in.
    pub fn zoomed(&self, factor: f64) -> Self {
        let half = self.span() * factor / 2.0;
        let center = self.center();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Whether `x` lies inside the range.
    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_minus_ten_to_ten() {
        let view = ViewRange::default();
        assert_eq!(view, ViewRange { min: -10.0, max: 10.0 });
        assert!(view.is_default());
    }

    #[test]
    fn new_orders_bounds() {
        assert_eq!(ViewRange::new(5.0, -5.0), ViewRange { min: -5.0, max: 5.0 });
    }

    #[test]
    fn zoom_in_halves_span_about_center() {
        let view = ViewRange::default().zoomed(0.5);
        assert_eq!(view, ViewRange { min: -5.0, max: 5.0 });
        assert!(!view.is_default());
    }

    #[test]
    fn pan_keeps_span() {
        let view = ViewRange::default().panned(0.25);
        assert_eq!(view, ViewRange { min: -5.0, max: 15.0 });
        assert_eq!(view.span(), 20.0);
    }
}
