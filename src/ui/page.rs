//! Input panels: field lists, matrix grids and the result area.

use super::ThemeColors;
use crate::app::App;
use crate::forms::FieldList;
use crate::pages::{MatrixPage, Operand, PageId, PageStatus};
use crate::util;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the input panel of the active page.
pub(super) fn draw_inputs(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let page = app.current();
    let mut lines = Vec::new();

    match app.active {
        PageId::Equations => {
            let solver = app.equations.solver();
            let kind = solver.kind();
            lines.push(heading(&format!("{} Solver", kind.name()), colors));
            lines.push(Line::from(Span::styled(
                kind.formula(),
                Style::default().fg(colors.text),
            )));
            if kind == crate::forms::EquationKind::Polynomial {
                lines.push(label_value("Degree", &solver.form.degree().to_string(), colors));
            }
            lines.push(Line::default());
            lines.extend(field_lines(&solver.form.fields, colors));
        },
        PageId::Matrix => lines.extend(matrix_lines(&app.matrix, colors)),
        _ => {
            lines.push(heading(app.active.name(), colors));
            lines.push(Line::default());
            if let Some(fields) = page.fields() {
                lines.extend(field_lines(fields, colors));
            }
            if app.active == PageId::Rose {
                let params = app.rose.params();
                lines.push(label_value("function", params.trig.name(), colors));
                lines.push(Line::from(vec![
                    Span::styled(format!("{:>8}: ", "colour"), Style::default().fg(colors.label)),
                    Span::styled(
                        "■■■",
                        Style::default().fg(super::theme::series_color(app.rose.color())),
                    ),
                ]));
            }
        },
    }

    lines.push(Line::default());
    lines.extend(status_lines(&page.status(), colors));

    if app.active == PageId::Matrix {
        if let Some(rows) = app.matrix.result() {
            lines.push(heading(&util::matrix_heading(app.matrix.operation()), colors));
            for row in util::format_matrix(rows).lines() {
                lines.push(Line::from(Span::styled(
                    row.to_string(),
                    Style::default().fg(colors.value),
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Input ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn heading<'a>(text: &str, colors: &ThemeColors) -> Line<'a> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    ))
}

fn label_value<'a>(label: &str, value: &str, colors: &ThemeColors) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>8}: ", label), Style::default().fg(colors.label)),
        Span::styled(value.to_string(), Style::default().fg(colors.value)),
    ])
}

fn focused(colors: &ThemeColors) -> Style {
    Style::default()
        .fg(colors.cursor_fg)
        .bg(colors.cursor_bg)
        .add_modifier(Modifier::BOLD)
}

fn field_lines<'a>(fields: &FieldList, colors: &ThemeColors) -> Vec<Line<'a>> {
    let width = fields
        .fields()
        .iter()
        .map(|field| field.label.width())
        .max()
        .unwrap_or(0);
    fields
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let pad = width.saturating_sub(field.label.width());
            let value_style = if i == fields.focus() {
                focused(colors)
            } else {
                Style::default().fg(colors.value)
            };
            Line::from(vec![
                Span::styled(
                    format!("{}{}: ", " ".repeat(pad), field.label),
                    Style::default().fg(colors.label),
                ),
                Span::styled(format!(" {} ", field.value), value_style),
            ])
        })
        .collect()
}

fn matrix_lines<'a>(page: &MatrixPage, colors: &ThemeColors) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for operand in [Operand::A, Operand::B] {
        let grid = page.grid(operand);
        lines.push(heading(
            &format!("{} ({}×{})", operand.name(), grid.rows(), grid.cols()),
            colors,
        ));
        for row in 0..grid.rows() {
            let spans: Vec<Span<'a>> = (0..grid.cols())
                .map(|col| {
                    let text = grid.get(row, col).unwrap_or("");
                    let cell = format!("[{:^7}]", if text.is_empty() { "·" } else { text });
                    let is_cursor = page.cursor.operand == operand
                        && page.cursor.row == row
                        && page.cursor.col == col;
                    let style = if is_cursor {
                        focused(colors)
                    } else {
                        Style::default().fg(colors.value)
                    };
                    Span::styled(cell, style)
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }
    lines
}

fn status_lines<'a>(status: &PageStatus, colors: &ThemeColors) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if status.loading {
        lines.push(Line::from(Span::styled(
            "Calculating...",
            Style::default().fg(colors.warning),
        )));
    }
    if let Some(error) = &status.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors.error),
        )));
    }
    if let Some(result) = &status.result {
        lines.push(Line::from(Span::styled(
            result.clone(),
            Style::default()
                .fg(colors.success)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines
}
