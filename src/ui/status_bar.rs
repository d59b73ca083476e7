//! Status bar UI component.

use crate::pages::PageStatus;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar.
pub fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    page: &PageStatus,
    in_flight: usize,
    colors: &ThemeColors,
) {
    let base = Style::default().fg(colors.status_fg).bg(colors.status_bg);
    let mut spans = vec![Span::styled(format!(" {}", status), base)];
    if page.loading || in_flight > 0 {
        spans.push(Span::styled(
            format!("  ⟳ {} request(s) running", in_flight.max(1)),
            base.fg(colors.warning),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(base);

    f.render_widget(paragraph, area);
}
