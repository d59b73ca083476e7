//! Coefficient forms of the equation solvers.

use super::field::{FieldList, InputField};
use crate::api::{ApiRequest, PolynomialRequest, SolveRequest};
use crate::error::{MathscopeError, Result};

/// Message for missing coefficients.
pub const MISSING_COEFFICIENTS: &str = "All coefficient fields must be filled.";

/// Lowest selectable polynomial degree.
pub const MIN_DEGREE: usize = 1;
/// Highest selectable polynomial degree.
pub const MAX_DEGREE: usize = 10;
/// Degree the polynomial solver starts with.
pub const DEFAULT_DEGREE: usize = 4;

/// Which solver a form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationKind {
    /// ax² + bx + c = 0
    Quadratic,
    /// ax³ + bx² + cx + d = 0
    Cubic,
    /// General polynomial of configurable degree.
    Polynomial,
}

impl EquationKind {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Quadratic => "Quadratic",
            Self::Cubic => "Cubic",
            Self::Polynomial => "Polynomial",
        }
    }

    /// Equation shown above the inputs.
    pub fn formula(self) -> &'static str {
        match self {
            Self::Quadratic => "ax² + bx + c = 0",
            Self::Cubic => "ax³ + bx² + cx + d = 0",
            Self::Polynomial => "aₙxⁿ + … + a₁x + a₀ = 0",
        }
    }

    /// Base name of exported images.
    pub fn export_stem(self) -> &'static str {
        match self {
            Self::Quadratic => "quadratic-graph",
            Self::Cubic => "cubic-graph",
            Self::Polynomial => "polynomial-graph",
        }
    }
}

/// Coefficients of one solver, highest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationForm {
    kind: EquationKind,
    degree: usize,
    /// Editable coefficient fields.
    pub fields: FieldList,
}

impl EquationForm {
    /// Create an empty form.
    pub fn new(kind: EquationKind) -> Self {
        let degree = match kind {
            EquationKind::Quadratic => 2,
            EquationKind::Cubic => 3,
            EquationKind::Polynomial => DEFAULT_DEGREE,
        };
        Self {
            kind,
            degree,
            fields: FieldList::new(coefficient_fields(kind, degree)),
        }
    }

    /// Solver kind.
    pub fn kind(&self) -> EquationKind {
        self.kind
    }

    /// Polynomial degree.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Change the degree of a general polynomial.
    ///
    /// The degree is clamped to `MIN_DEGREE..=MAX_DEGREE`. A change discards
    /// every entered coefficient. Fixed-degree solvers ignore this.
    pub fn set_degree(&mut self, degree: usize) {
        if self.kind != EquationKind::Polynomial {
            return;
        }
        let degree = degree.clamp(MIN_DEGREE, MAX_DEGREE);
        if degree == self.degree {
            return;
        }
        self.degree = degree;
        self.fields.replace(coefficient_fields(self.kind, degree));
    }

    /// Parse every coefficient, failing on the first missing or malformed one.
    pub fn coefficients(&self) -> Result<Vec<f64>> {
        if self.fields.fields().iter().any(InputField::is_blank) {
            return Err(MathscopeError::validation(MISSING_COEFFICIENTS));
        }
        self.fields
            .fields()
            .iter()
            .map(|field| {
                field.value.trim().parse::<f64>().map_err(|_| {
                    MathscopeError::validation(format!(
                        "Coefficient '{}' must be a number.",
                        coefficient_name(&field.label)
                    ))
                })
            })
            .collect()
    }

    /// Build the solve request, validating first.
    pub fn build(&self) -> Result<ApiRequest> {
        self.coefficients()?;
        let v: Vec<String> = self
            .fields
            .values()
            .into_iter()
            .map(|s| s.trim().to_string())
            .collect();
        let request = match self.kind {
            EquationKind::Quadratic => ApiRequest::Solve(SolveRequest::Quadratic {
                a: v[0].clone(),
                b: v[1].clone(),
                c: v[2].clone(),
            }),
            EquationKind::Cubic => ApiRequest::Solve(SolveRequest::Cubic {
                a: v[0].clone(),
                b: v[1].clone(),
                c: v[2].clone(),
                d: v[3].clone(),
            }),
            EquationKind::Polynomial => {
                ApiRequest::Polynomial(PolynomialRequest { coefficients: v })
            },
        };
        Ok(request)
    }
}

fn coefficient_fields(kind: EquationKind, degree: usize) -> Vec<InputField> {
    match kind {
        EquationKind::Quadratic => vec![
            InputField::numeric("a (x²)"),
            InputField::numeric("b (x)"),
            InputField::numeric("c"),
        ],
        EquationKind::Cubic => vec![
            InputField::numeric("a (x³)"),
            InputField::numeric("b (x²)"),
            InputField::numeric("c (x)"),
            InputField::numeric("d"),
        ],
        EquationKind::Polynomial => (0..=degree)
            .rev()
            .map(|power| InputField::numeric(format!("x^{}", power)))
            .collect(),
    }
}

// "a (x²)" -> "a"
fn coefficient_name(label: &str) -> &str {
    label.split_whitespace().next().unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fill(form: &mut EquationForm, values: &[&str]) {
        for (i, v) in values.iter().enumerate() {
            form.fields.set_value(i, *v);
        }
    }

    #[test]
    fn quadratic_with_empty_field_is_rejected() {
        let mut form = EquationForm::new(EquationKind::Quadratic);
        fill(&mut form, &["1", "-3", ""]);
        let err = form.build().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.user_message(), MISSING_COEFFICIENTS);
    }

    #[test]
    fn malformed_coefficient_is_named() {
        let mut form = EquationForm::new(EquationKind::Cubic);
        fill(&mut form, &["1", "2", "1e", "4"]);
        assert_eq!(
            form.build().unwrap_err().user_message(),
            "Coefficient 'c' must be a number."
        );
    }

    #[test]
    fn cubic_builds_solve_body() {
        let mut form = EquationForm::new(EquationKind::Cubic);
        fill(&mut form, &["1", "0", "-2", " 1 "]);
        let body = serde_json::to_value(form.build().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"type": "cubic", "a": "1", "b": "0", "c": "-2", "d": "1"})
        );
        assert_eq!(form.coefficients().unwrap(), vec![1.0, 0.0, -2.0, 1.0]);
    }

    #[test]
    fn polynomial_has_degree_plus_one_fields() {
        let mut form = EquationForm::new(EquationKind::Polynomial);
        assert_eq!(form.fields.len(), DEFAULT_DEGREE + 1);
        form.fields.set_value(0, "7");

        form.set_degree(2);
        assert_eq!(form.fields.len(), 3);
        assert!(form.fields.values().iter().all(String::is_empty));
        assert_eq!(form.fields.get(0).unwrap().label, "x^2");

        form.set_degree(0);
        assert_eq!(form.degree(), MIN_DEGREE);
        form.set_degree(99);
        assert_eq!(form.degree(), MAX_DEGREE);
        assert_eq!(form.fields.len(), MAX_DEGREE + 1);
    }

    #[test]
    fn polynomial_builds_coefficient_list() {
        let mut form = EquationForm::new(EquationKind::Polynomial);
        form.set_degree(2);
        fill(&mut form, &["1", "0", "-4"]);
        let body = serde_json::to_value(form.build().unwrap()).unwrap();
        assert_eq!(body, json!({"coefficients": ["1", "0", "-4"]}));
    }
}
