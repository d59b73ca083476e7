//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const GLOBAL_KEYS: &str =
    "C-n/C-p:page | Tab:field | ←→↑↓:pan | PgUp/PgDn:zoom | Home:reset | C-s:png | C-y:copy | C-t:theme | Esc:quit";

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, page_keys: &str, colors: &ThemeColors) {
    let keymap_text = format!(" {} | {}", page_keys, GLOBAL_KEYS);

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
