//! Chart panel.

use super::formatters::axis_labels;
use super::theme::series_color;
use super::ThemeColors;
use crate::chart::Chart;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart as ChartWidget, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw `chart` within its visible bounds; `subtitle` goes into the border.
pub(super) fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &Chart,
    subtitle: Option<String>,
    colors: &ThemeColors,
) {
    let title = match subtitle {
        Some(sub) => format!(" {} ({}) ", chart.data.title, sub),
        None => format!(" {} ", chart.data.title),
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    if !chart.has_data() {
        let para = Paragraph::new("Nothing plotted yet")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    // Gaps split a series into separately drawn segments.
    let segments: Vec<(usize, usize, Vec<(f64, f64)>)> = chart
        .data
        .datasets
        .iter()
        .enumerate()
        .flat_map(|(i, d)| {
            d.series
                .segments()
                .into_iter()
                .enumerate()
                .map(move |(j, seg)| (i, j, seg))
        })
        .collect();

    let datasets: Vec<Dataset<'_>> = segments
        .iter()
        .map(|(i, j, points)| {
            let source = &chart.data.datasets[*i];
            let marker = if source.style.dashed {
                Marker::Dot
            } else {
                Marker::Braille
            };
            let dataset = Dataset::default()
                .marker(marker)
                .graph_type(if source.style.dashed {
                    GraphType::Scatter
                } else {
                    GraphType::Line
                })
                .style(Style::default().fg(series_color(source.style.color)))
                .data(points);
            if *j == 0 {
                dataset.name(source.label.clone())
            } else {
                dataset
            }
        })
        .collect();

    let bounds = chart.visible_bounds();

    let x_axis = Axis::default()
        .title(chart.data.x_title.clone())
        .style(Style::default().fg(colors.text))
        .bounds([bounds.x.0, bounds.x.1])
        .labels(axis_labels(bounds.x));

    let y_axis = Axis::default()
        .title(chart.data.y_title.clone())
        .style(Style::default().fg(colors.text))
        .bounds([bounds.y.0, bounds.y.1])
        .labels(axis_labels(bounds.y));

    let widget = ChartWidget::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(widget, area);
}
