//! Color themes for the UI.

use crate::app::Theme;
use crate::chart::Rgb;
use ratatui::style::Color;

// Gruvbox swatches used by both variants.
struct Swatches {
    bg0: Color,
    bg1: Color,
    bg3: Color,
    fg1: Color,
    orange: Color,
    green: Color,
    aqua: Color,
    yellow: Color,
    red: Color,
}

const DARK: Swatches = Swatches {
    bg0: Color::Rgb(40, 40, 40),
    bg1: Color::Rgb(60, 56, 54),
    bg3: Color::Rgb(102, 92, 84),
    fg1: Color::Rgb(235, 219, 178),
    orange: Color::Rgb(251, 184, 108),
    green: Color::Rgb(184, 187, 38),
    aqua: Color::Rgb(142, 192, 124),
    yellow: Color::Rgb(250, 189, 47),
    red: Color::Rgb(251, 73, 52),
};

const LIGHT: Swatches = Swatches {
    bg0: Color::Rgb(251, 245, 234),
    bg1: Color::Rgb(235, 219, 178),
    bg3: Color::Rgb(213, 196, 161),
    fg1: Color::Rgb(60, 56, 54),
    orange: Color::Rgb(175, 58, 3),
    green: Color::Rgb(121, 116, 14),
    aqua: Color::Rgb(102, 123, 3),
    yellow: Color::Rgb(181, 118, 20),
    red: Color::Rgb(157, 0, 6),
};

/// Colours by role.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background.
    pub bg: Color,
    /// Plain text and axes.
    pub text: Color,
    /// Panel titles and headings.
    pub heading: Color,
    /// Field labels.
    pub label: Color,
    /// Field values and matrix cells.
    pub value: Color,
    /// Panel borders.
    pub border: Color,
    /// Focused input, foreground.
    pub cursor_fg: Color,
    /// Focused input, background.
    pub cursor_bg: Color,
    /// Status bar, foreground.
    pub status_fg: Color,
    /// Status bar, background.
    pub status_bg: Color,
    /// Results.
    pub success: Color,
    /// "Calculating..." indicator.
    pub warning: Color,
    /// Error messages.
    pub error: Color,
}

impl ThemeColors {
    /// Colours of `theme`.
    pub fn from_theme(theme: &Theme) -> Self {
        let s = match theme {
            Theme::GruvboxDark => &DARK,
            Theme::GruvboxLight => &LIGHT,
        };
        Self {
            bg: s.bg0,
            text: s.fg1,
            heading: s.orange,
            label: s.green,
            value: s.aqua,
            border: s.bg3,
            cursor_fg: s.bg0,
            cursor_bg: s.orange,
            status_fg: s.fg1,
            status_bg: s.bg1,
            success: s.green,
            warning: s.yellow,
            error: s.red,
        }
    }
}

/// Terminal colour of a series.
pub fn series_color(color: Rgb) -> Color {
    let Rgb(r, g, b) = color;
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_input_inverts_background() {
        for theme in [Theme::GruvboxDark, Theme::GruvboxLight] {
            let colors = ThemeColors::from_theme(&theme);
            assert_eq!(colors.cursor_fg, colors.bg);
            assert_ne!(colors.cursor_bg, colors.bg);
        }
    }

    #[test]
    fn series_colour_is_passed_through() {
        assert_eq!(series_color(Rgb::BLUE), Color::Rgb(59, 130, 246));
    }
}
