//! Request and response bodies of the computation backend.

use serde::{Deserialize, Serialize};

use crate::series::{PlotSeries, WirePoint};
use crate::view::ViewRange;

/// `POST /api/solve`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SolveRequest {
    /// `ax² + bx + c = 0`.
    Quadratic {
        /// x² coefficient.
        a: String,
        /// x coefficient.
        b: String,
        /// Constant term.
        c: String,
    },
    /// `ax³ + bx² + cx + d = 0`.
    Cubic {
        /// x³ coefficient.
        a: String,
        /// x² coefficient.
        b: String,
        /// x coefficient.
        c: String,
        /// Constant term.
        d: String,
    },
}

/// `POST /api/solve-polynomial`, coefficients from highest degree down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolynomialRequest {
    /// Coefficients as entered.
    pub coefficients: Vec<String>,
}

/// Matrix operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixOperation {
    /// A + B.
    Add,
    /// A - B.
    Subtract,
    /// A · B.
    Multiply,
}

impl MatrixOperation {
    /// Short symbolic form, e.g. `A + B`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "A + B",
            Self::Subtract => "A - B",
            Self::Multiply => "A * B",
        }
    }
}

/// `POST /api/matrix-operation`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRequest {
    /// Operation to apply.
    pub operation: MatrixOperation,
    /// Left operand, cells as entered.
    #[serde(rename = "matrixA")]
    pub matrix_a: Vec<Vec<String>>,
    /// Right operand, cells as entered.
    #[serde(rename = "matrixB")]
    pub matrix_b: Vec<Vec<String>>,
}

/// Calculus operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculusOperation {
    /// Symbolic derivative.
    Differentiate,
    /// Symbolic antiderivative.
    Integrate,
}

impl CalculusOperation {
    /// Heading used for the textual result.
    pub fn result_heading(self) -> &'static str {
        match self {
            Self::Differentiate => "Derivative:",
            Self::Integrate => "Integral:",
        }
    }

    /// Label prefix of the result series.
    pub fn series_prefix(self) -> &'static str {
        match self {
            Self::Differentiate => "f'(x)",
            Self::Integrate => "∫f(x)dx",
        }
    }
}

/// `POST /api/calculus`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculusRequest {
    /// Function of `x`.
    pub expression: String,
    /// Operation to apply.
    pub operation: CalculusOperation,
    /// Sampling interval for the plot data.
    pub x_range: ViewRange,
}

/// `POST /api/plot-general`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralPlotRequest {
    /// Function of `x`.
    pub expression: String,
    /// Sampling interval.
    pub x_range: ViewRange,
}

/// Parameter interval of a parametric plot, bounds as expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRange {
    /// Lower bound, e.g. `0`.
    pub min: String,
    /// Upper bound, e.g. `2*pi`.
    pub max: String,
}

/// `POST /api/plot-parametric`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParametricRequest {
    /// x(t).
    pub x_expr: String,
    /// y(t).
    pub y_expr: String,
    /// Interval of `t`.
    pub t_range: ParameterRange,
}

/// Any request the client can send.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiRequest {
    /// Quadratic or cubic roots.
    Solve(SolveRequest),
    /// Roots of a general polynomial.
    Polynomial(PolynomialRequest),
    /// Matrix arithmetic.
    Matrix(MatrixRequest),
    /// Differentiate or integrate with plot data.
    Calculus(CalculusRequest),
    /// Sample y = f(x).
    GeneralPlot(GeneralPlotRequest),
    /// Sample (x(t), y(t)).
    Parametric(ParametricRequest),
}

impl ApiRequest {
    /// Endpoint path for this request.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Solve(_) => "/api/solve",
            Self::Polynomial(_) => "/api/solve-polynomial",
            Self::Matrix(_) => "/api/matrix-operation",
            Self::Calculus(_) => "/api/calculus",
            Self::GeneralPlot(_) => "/api/plot-general",
            Self::Parametric(_) => "/api/plot-parametric",
        }
    }

    /// Horizontal range carried by the request, if any.
    pub fn x_range(&self) -> Option<ViewRange> {
        match self {
            Self::Calculus(req) => Some(req.x_range),
            Self::GeneralPlot(req) => Some(req.x_range),
            _ => None,
        }
    }
}

/// Roots as returned: numbers for real roots, strings like `1 + 2i` otherwise.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RootsBody {
    pub(crate) roots: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MatrixBody {
    pub(crate) result: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CalculusPlotData {
    pub(crate) original: Vec<WirePoint>,
    pub(crate) result: Vec<WirePoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CalculusBody {
    pub(crate) result_expression: String,
    pub(crate) plot_data: CalculusPlotData,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlotBody {
    pub(crate) plot_data: Vec<WirePoint>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) error: Option<String>,
}

/// Decoded successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Roots, already rendered as text.
    Roots(Vec<String>),
    /// Matrix result.
    Matrix(Vec<Vec<f64>>),
    /// Calculus result with both curves.
    Calculus {
        /// Resulting expression, e.g. `2*x`.
        expression: String,
        /// f(x) samples.
        original: PlotSeries,
        /// Derivative or integral samples.
        result: PlotSeries,
    },
    /// Samples of a general or parametric plot.
    Plot(PlotSeries),
}

pub(crate) fn root_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) => f.to_string(),
            None => n.to_string(),
        },
        other => other.to_string(),
    }
}
