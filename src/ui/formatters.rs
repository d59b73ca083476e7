//! Shared formatting utilities for UI components.

use crate::view::ViewRange;

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val < 1e-9 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Three labels: both ends and the middle of an interval.
pub fn axis_labels((lo, hi): (f64, f64)) -> Vec<String> {
    vec![
        format_axis_label(lo),
        format_axis_label((lo + hi) / 2.0),
        format_axis_label(hi),
    ]
}

/// `x ∈ [min, max]`.
pub fn format_view(view: ViewRange) -> String {
    format!(
        "x ∈ [{}, {}]",
        format_axis_label(view.min),
        format_axis_label(view.max)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels_use_smart_precision() {
        assert_eq!(axis_labels((-10.0, 10.0)), vec!["-10.0", "0", "10.0"]);
        assert_eq!(format_axis_label(0.5), "0.50");
        assert_eq!(format_axis_label(250.0), "250");
        assert_eq!(format_axis_label(1e6), "1.0e6");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn view_is_shown_as_interval() {
        assert_eq!(format_view(ViewRange::default()), "x ∈ [-10.0, 10.0]");
    }
}
