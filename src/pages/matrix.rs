//! Matrix calculator with two editable operand grids.

use super::{unexpected_response, PageController, PageId, PageStatus};
use crate::api::{ApiResponse, MatrixOperation};
use crate::error::Result;
use crate::forms::matrix::{build_request, MAX_DIM, MIN_DIM};
use crate::forms::{FieldKind, MatrixGrid};
use crate::sync::RequestTracker;
use crate::worker::Dispatch;

/// Which operand grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Left operand.
    A,
    /// Right operand.
    B,
}

impl Operand {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Operand::A => "Matrix A",
            Operand::B => "Matrix B",
        }
    }
}

/// Focused cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixCursor {
    /// Grid being edited.
    pub operand: Operand,
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Default for MatrixCursor {
    fn default() -> Self {
        Self {
            operand: Operand::A,
            row: 0,
            col: 0,
        }
    }
}

/// Matrix calculator.
#[derive(Debug, Clone, Default)]
pub struct MatrixPage {
    /// Matrix A.
    pub a: MatrixGrid,
    /// Matrix B.
    pub b: MatrixGrid,
    /// Focused cell.
    pub cursor: MatrixCursor,
    operation: Option<MatrixOperation>,
    result: Option<Vec<Vec<f64>>>,
    error: Option<String>,
    tracker: RequestTracker,
}

impl MatrixPage {
    /// Two empty 2×2 grids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid of `operand`.
    pub fn grid(&self, operand: Operand) -> &MatrixGrid {
        match operand {
            Operand::A => &self.a,
            Operand::B => &self.b,
        }
    }

    fn grid_mut(&mut self, operand: Operand) -> &mut MatrixGrid {
        match operand {
            Operand::A => &mut self.a,
            Operand::B => &mut self.b,
        }
    }

    /// Last successful result.
    pub fn result(&self) -> Option<&[Vec<f64>]> {
        self.result.as_deref()
    }

    /// Operation of the last request.
    pub fn operation(&self) -> Option<MatrixOperation> {
        self.operation
    }

    /// Run `operation` on both grids.
    pub fn calculate(&mut self, operation: MatrixOperation) -> Option<Dispatch> {
        self.error = None;
        self.result = None;
        let request = match build_request(operation, &self.a, &self.b) {
            Ok(request) => request,
            Err(err) => {
                self.error = Some(err.user_message());
                return None;
            },
        };
        self.operation = Some(operation);
        Some(Dispatch {
            page: PageId::Matrix,
            seq: self.tracker.issue(),
            request,
        })
    }

    /// Resize the focused grid by `(drows, dcols)`, discarding its cells.
    pub fn resize_focused(&mut self, drows: isize, dcols: isize) {
        let operand = self.cursor.operand;
        let grid = self.grid_mut(operand);
        let rows = grid.rows().saturating_add_signed(drows).clamp(MIN_DIM, MAX_DIM);
        let cols = grid.cols().saturating_add_signed(dcols).clamp(MIN_DIM, MAX_DIM);
        grid.resize(rows, cols);
        self.cursor = MatrixCursor {
            operand,
            row: 0,
            col: 0,
        };
    }

    // Cells of A row by row, then cells of B.
    fn positions(&self) -> Vec<MatrixCursor> {
        [Operand::A, Operand::B]
            .into_iter()
            .flat_map(|operand| {
                let grid = self.grid(operand);
                (0..grid.rows()).flat_map(move |row| {
                    (0..grid.cols()).map(move |col| MatrixCursor { operand, row, col })
                })
            })
            .collect()
    }

    fn move_focus(&mut self, forward: bool) {
        let positions = self.positions();
        let n = positions.len();
        let current = positions.iter().position(|p| *p == self.cursor).unwrap_or(0);
        let next = if forward { (current + 1) % n } else { (current + n - 1) % n };
        self.cursor = positions[next];
    }
}

impl PageController for MatrixPage {
    fn id(&self) -> PageId {
        PageId::Matrix
    }

    fn input(&mut self, c: char) -> bool {
        if !FieldKind::Numeric.accepts(c) {
            return false;
        }
        let MatrixCursor { operand, row, col } = self.cursor;
        match self.grid_mut(operand).cell_mut(row, col) {
            Some(cell) => {
                cell.push(c);
                true
            },
            None => false,
        }
    }

    fn backspace(&mut self) -> bool {
        let MatrixCursor { operand, row, col } = self.cursor;
        self.grid_mut(operand)
            .cell_mut(row, col)
            .and_then(|cell| cell.pop())
            .is_some()
    }

    fn focus_next(&mut self) {
        self.move_focus(true);
    }

    fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn submit(&mut self) -> Option<Dispatch> {
        self.calculate(MatrixOperation::Add)
    }

    fn action(&mut self, n: u8) -> Option<Dispatch> {
        match n {
            2 => return self.calculate(MatrixOperation::Add),
            3 => return self.calculate(MatrixOperation::Subtract),
            4 => return self.calculate(MatrixOperation::Multiply),
            5 => self.resize_focused(-1, 0),
            6 => self.resize_focused(1, 0),
            7 => self.resize_focused(0, -1),
            8 => self.resize_focused(0, 1),
            _ => {},
        }
        None
    }

    fn complete(&mut self, seq: u64, result: Result<ApiResponse>) {
        if !self.tracker.settle(seq) {
            return;
        }
        match result {
            Ok(ApiResponse::Matrix(rows)) => self.result = Some(rows),
            Ok(other) => self.error = Some(unexpected_response(&other).user_message()),
            Err(err) => self.error = Some(err.user_message()),
        }
    }

    fn export_file_name(&self) -> String {
        "matrix.png".to_string()
    }

    fn status(&self) -> PageStatus {
        PageStatus {
            result: None,
            error: self.error.clone(),
            loading: self.tracker.is_loading(),
        }
    }

    fn key_help(&self) -> &'static str {
        "Enter/F2:A+B | F3:A-B | F4:A*B | F5/F6:rows -/+ | F7/F8:cols -/+"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiRequest;
    use crate::error::MathscopeError;

    fn fill(page: &mut MatrixPage, values: &[&str]) {
        page.cursor = MatrixCursor::default();
        for v in values {
            for c in v.chars() {
                page.input(c);
            }
            page.focus_next();
        }
    }

    #[test]
    fn incomplete_grid_is_rejected() {
        let mut page = MatrixPage::new();
        fill(&mut page, &["1", "2", "3"]);
        assert!(page.submit().is_none());
        assert_eq!(
            page.status().error.as_deref(),
            Some("Please fill all matrix cells before calculating.")
        );
    }

    #[test]
    fn multiply_sends_both_grids() {
        let mut page = MatrixPage::new();
        fill(&mut page, &["1", "2", "3", "4", "5", "6", "7", "8"]);
        let d = page.action(4).unwrap();
        match d.request {
            ApiRequest::Matrix(req) => {
                assert_eq!(req.operation, MatrixOperation::Multiply);
                assert_eq!(req.matrix_a, vec![vec!["1", "2"], vec!["3", "4"]]);
                assert_eq!(req.matrix_b, vec![vec!["5", "6"], vec!["7", "8"]]);
            },
            other => panic!("unexpected request {:?}", other),
        }
        page.complete(
            d.seq,
            Ok(ApiResponse::Matrix(vec![vec![19.0, 22.0], vec![43.0, 50.0]])),
        );
        assert_eq!(page.result().unwrap()[1], vec![43.0, 50.0]);
        assert_eq!(page.operation(), Some(MatrixOperation::Multiply));
    }

    #[test]
    fn resizing_reallocates_focused_grid() {
        let mut page = MatrixPage::new();
        fill(&mut page, &["1", "2", "3", "4"]);
        assert_eq!(page.cursor.operand, Operand::B);
        page.cursor.operand = Operand::A;
        page.action(6);
        page.action(8);
        assert_eq!((page.a.rows(), page.a.cols()), (3, 3));
        assert!((0..3).all(|r| (0..3).all(|c| page.a.get(r, c) == Some(""))));
        assert_eq!((page.b.rows(), page.b.cols()), (2, 2));
    }

    #[test]
    fn focus_wraps_across_grids() {
        let mut page = MatrixPage::new();
        page.focus_prev();
        assert_eq!(page.cursor, MatrixCursor { operand: Operand::B, row: 1, col: 1 });
        page.focus_next();
        assert_eq!(page.cursor, MatrixCursor::default());
    }

    #[test]
    fn backend_error_replaces_result() {
        let mut page = MatrixPage::new();
        fill(&mut page, &["1", "2", "3", "4", "5", "6", "7", "8"]);
        let d = page.action(2).unwrap();
        page.complete(d.seq, Ok(ApiResponse::Matrix(vec![vec![6.0, 8.0], vec![10.0, 12.0]])));

        let d = page.action(3).unwrap();
        assert!(page.result().is_none());
        page.complete(d.seq, Err(MathscopeError::Backend("Matrices must have the same dimensions.".into())));
        assert_eq!(
            page.status().error.as_deref(),
            Some("Matrices must have the same dimensions.")
        );
    }
}
