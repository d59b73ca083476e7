//! Matrix operand grids.

use crate::api::{ApiRequest, MatrixOperation, MatrixRequest};
use crate::error::{MathscopeError, Result};

/// Smallest allowed dimension.
pub const MIN_DIM: usize = 1;
/// Largest allowed dimension.
pub const MAX_DIM: usize = 5;

/// Message for incomplete grids.
pub const INCOMPLETE_MATRIX: &str = "Please fill all matrix cells before calculating.";

/// A rows × cols grid of cell texts; an empty string means unset.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<String>>,
}

impl Default for MatrixGrid {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

impl MatrixGrid {
    /// Create an empty grid; dimensions are clamped to `MIN_DIM..=MAX_DIM`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.clamp(MIN_DIM, MAX_DIM);
        let cols = cols.clamp(MIN_DIM, MAX_DIM);
        Self {
            rows,
            cols,
            cells: vec![vec![String::new(); cols]; rows],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Change both dimensions. Any change discards every cell value.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let resized = Self::new(rows, cols);
        if (resized.rows, resized.cols) != (self.rows, self.cols) {
            *self = resized;
        }
    }

    /// Change the row count.
    pub fn set_rows(&mut self, rows: usize) {
        self.resize(rows, self.cols);
    }

    /// Change the column count.
    pub fn set_cols(&mut self, cols: usize) {
        self.resize(self.rows, cols);
    }

    /// Cell text.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Set a cell; out-of-range positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value.into();
        }
    }

    /// Mutable cell text, for in-place editing.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut String> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Whether every cell has a value.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.trim().is_empty())
    }

    /// Cell texts row by row.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.trim().to_string()).collect())
            .collect()
    }
}

/// Build a matrix request; both grids must be complete.
pub fn build_request(
    operation: MatrixOperation,
    a: &MatrixGrid,
    b: &MatrixGrid,
) -> Result<ApiRequest> {
    if !a.is_complete() || !b.is_complete() {
        return Err(MathscopeError::validation(INCOMPLETE_MATRIX));
    }
    Ok(ApiRequest::Matrix(MatrixRequest {
        operation,
        matrix_a: a.to_rows(),
        matrix_b: b.to_rows(),
    }))
}

/// Parse `"1,2;3,4"` into a grid.
pub fn parse_grid(text: &str) -> Result<MatrixGrid> {
    let rows: Vec<Vec<&str>> = text
        .split(';')
        .map(|row| row.split(',').map(str::trim).collect())
        .collect();
    let cols = rows.first().map(Vec::len).unwrap_or(0);
    if rows.iter().any(|r| r.len() != cols) {
        return Err(MathscopeError::validation(
            "Every matrix row must have the same number of cells.",
        ));
    }
    if !(MIN_DIM..=MAX_DIM).contains(&rows.len()) || !(MIN_DIM..=MAX_DIM).contains(&cols) {
        return Err(MathscopeError::validation(format!(
            "Matrix dimensions must be between {} and {}.",
            MIN_DIM, MAX_DIM
        )));
    }
    let mut grid = MatrixGrid::new(rows.len(), cols);
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            grid.set(r, c, *cell);
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resize_discards_values() {
        let mut grid = MatrixGrid::default();
        grid.set(0, 0, "4");
        grid.set_rows(3);
        assert_eq!((grid.rows(), grid.cols()), (3, 2));
        assert!((0..3).all(|r| (0..2).all(|c| grid.get(r, c) == Some(""))));
    }

    #[test]
    fn same_dimensions_keep_values() {
        let mut grid = MatrixGrid::default();
        grid.set(1, 1, "9");
        grid.resize(2, 2);
        assert_eq!(grid.get(1, 1), Some("9"));
    }

    #[test]
    fn dimensions_are_clamped() {
        let grid = MatrixGrid::new(0, 9);
        assert_eq!((grid.rows(), grid.cols()), (1, 5));
    }

    #[test]
    fn incomplete_grid_blocks_request() {
        let a = parse_grid("1,2;3,4").unwrap();
        let mut b = MatrixGrid::new(2, 2);
        b.set(0, 0, "1");
        let err = build_request(MatrixOperation::Add, &a, &b).unwrap_err();
        assert_eq!(err.user_message(), INCOMPLETE_MATRIX);
    }

    #[test]
    fn complete_grids_build_request() {
        let a = parse_grid("1, 2; 3, 4").unwrap();
        let b = parse_grid("5;6").unwrap();
        let body =
            serde_json::to_value(build_request(MatrixOperation::Multiply, &a, &b).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"operation": "multiply", "matrixA": [["1", "2"], ["3", "4"]], "matrixB": [["5"], ["6"]]})
        );
    }

    #[test]
    fn ragged_text_is_rejected() {
        assert!(parse_grid("1,2;3").is_err());
        assert!(parse_grid("1,2,3,4,5,6").is_err());
    }
}
