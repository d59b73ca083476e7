//! Form state and request builders.
//!
//! Every builder validates its input first; an incomplete form yields a
//! `Validation` error and never produces a request.

pub mod equation;
pub mod field;
pub mod matrix;

pub use equation::{EquationForm, EquationKind};
pub use field::{FieldKind, FieldList, InputField};
pub use matrix::MatrixGrid;

use crate::api::{
    ApiRequest, CalculusOperation, CalculusRequest, GeneralPlotRequest, ParameterRange,
    ParametricRequest,
};
use crate::error::{MathscopeError, Result};
use crate::view::ViewRange;

/// Message for a missing function.
pub const MISSING_EXPRESSION: &str = "Please enter a function.";
/// Message for a missing parametric component.
pub const MISSING_PARAMETRIC: &str = "Please enter both x(t) and y(t).";

fn required(expression: &str, message: &str) -> Result<String> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(MathscopeError::validation(message));
    }
    Ok(trimmed.to_string())
}

/// Build a calculus request.
pub fn calculus_request(
    expression: &str,
    operation: CalculusOperation,
    x_range: ViewRange,
) -> Result<ApiRequest> {
    Ok(ApiRequest::Calculus(CalculusRequest {
        expression: required(expression, MISSING_EXPRESSION)?,
        operation,
        x_range,
    }))
}

/// Build a general plot request.
pub fn general_plot_request(expression: &str, x_range: ViewRange) -> Result<ApiRequest> {
    Ok(ApiRequest::GeneralPlot(GeneralPlotRequest {
        expression: required(expression, MISSING_EXPRESSION)?,
        x_range,
    }))
}

/// Build a parametric plot request. Blank bounds fall back to `0` and `2*pi`.
pub fn parametric_request(
    x_expr: &str,
    y_expr: &str,
    t_min: &str,
    t_max: &str,
) -> Result<ApiRequest> {
    let x_expr = required(x_expr, MISSING_PARAMETRIC)?;
    let y_expr = required(y_expr, MISSING_PARAMETRIC)?;
    let bound = |text: &str, fallback: &str| {
        let text = text.trim();
        if text.is_empty() {
            fallback.to_string()
        } else {
            text.to_string()
        }
    };
    Ok(ApiRequest::Parametric(ParametricRequest {
        x_expr,
        y_expr,
        t_range: ParameterRange {
            min: bound(t_min, "0"),
            max: bound(t_max, "2*pi"),
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_expression_is_rejected() {
        let err = general_plot_request("   ", ViewRange::default()).unwrap_err();
        assert_eq!(err.user_message(), MISSING_EXPRESSION);
        assert!(calculus_request("", CalculusOperation::Differentiate, ViewRange::default())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn general_plot_uses_view_as_x_range() {
        let req = general_plot_request("sin(x) / x", ViewRange::new(-5.0, 5.0)).unwrap();
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({"expression": "sin(x) / x", "x_range": {"min": -5.0, "max": 5.0}})
        );
    }

    #[test]
    fn parametric_bounds_default() {
        let req = parametric_request("3 * cos(t)", "3 * sin(t)", "", " ").unwrap();
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({"x_expr": "3 * cos(t)", "y_expr": "3 * sin(t)", "t_range": {"min": "0", "max": "2*pi"}})
        );
        assert_eq!(
            parametric_request("t", "", "0", "1").unwrap_err().user_message(),
            MISSING_PARAMETRIC
        );
    }
}
