//! User interface rendering.

mod chart;
pub mod formatters;
mod keymap_bar;
mod page;
mod status_bar;
mod theme;

use crate::app::App;
use crate::pages::PageId;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Tabs,
    Frame,
};

pub use theme::{series_color, ThemeColors};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Tabs, content, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let selected = PageId::ALL
        .iter()
        .position(|&p| p == app.active)
        .unwrap_or(0);
    let tabs = Tabs::new(PageId::ALL.iter().map(|p| p.name()))
        .select(selected)
        .style(Style::default().fg(colors.text).bg(colors.bg))
        .highlight_style(
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    let page = app.current();
    match page.chart() {
        Some(chart) => {
            let content = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(chunks[1]);
            page::draw_inputs(f, app, content[0], &colors);
            chart::draw_chart(f, content[1], chart, subtitle(app), &colors);
        },
        None => page::draw_inputs(f, app, chunks[1], &colors),
    }

    status_bar::draw_status(
        f,
        chunks[2],
        &app.status,
        &page.status(),
        app.in_flight(),
        &colors,
    );
    keymap_bar::draw_keymap(f, chunks[3], page.key_help(), &colors);
}

// Data range of pages whose series follow the viewport.
fn subtitle(app: &App) -> Option<String> {
    let view = match app.active {
        PageId::Equations => app.equations.solver().view(),
        PageId::Calculus => app.calculus.plot.sync.view(),
        PageId::General => app.general.plot.sync.view(),
        _ => return None,
    };
    Some(formatters::format_view(view))
}
