//! Formatting helpers shared by the TUI and the command line.

use crate::api::MatrixOperation;
use crate::clipboard;
use crate::error::Result;

/// Format a matrix cell with at most four decimals, trailing zeros trimmed.
pub fn format_cell(val: f64) -> String {
    if !val.is_finite() {
        return val.to_string();
    }
    let text = format!("{:.4}", val);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        _ => text.to_string(),
    }
}

/// Format a matrix as aligned rows.
pub fn format_matrix(rows: &[Vec<f64>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().copied().map(format_cell).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(1);
    cells
        .iter()
        .map(|row| {
            let row: Vec<String> = row.iter().map(|c| format!("{:>width$}", c)).collect();
            format!("[ {} ]", row.join("  "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heading of a matrix result, e.g. `Result (A * B)`.
pub fn matrix_heading(operation: Option<MatrixOperation>) -> String {
    match operation {
        Some(op) => format!("Result ({})", op.symbol()),
        None => "Result".to_string(),
    }
}

/// Copy a page result to the clipboard.
pub fn copy_result(heading: &str, body: &str) -> Result<()> {
    let mut text = String::new();
    if !heading.is_empty() {
        text.push_str(heading);
        text.push('\n');
    }
    text.push_str(body);
    clipboard::copy_to_clipboard(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_round_to_four_decimals() {
        assert_eq!(format_cell(2.0), "2");
        assert_eq!(format_cell(0.333333), "0.3333");
        assert_eq!(format_cell(-1.5), "-1.5");
        assert_eq!(format_cell(-0.00001), "0");
        assert_eq!(format_cell(f64::NAN), "NaN");
    }

    #[test]
    fn matrix_rows_are_aligned() {
        let text = format_matrix(&[vec![19.0, 22.0], vec![4.5, 50.0]]);
        assert_eq!(text, "[  19   22 ]\n[ 4.5   50 ]");
    }

    #[test]
    fn heading_names_operation() {
        assert_eq!(matrix_heading(Some(MatrixOperation::Multiply)), "Result (A * B)");
        assert_eq!(matrix_heading(None), "Result");
    }
}
