//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette (Gruvbox naming).
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Main background.
    pub bg0: Color,
    /// Raised background (status bar).
    pub bg1: Color,
    /// Border background tone.
    pub bg2: Color,
    /// Primary text.
    pub fg0: Color,
    /// Dimmed text.
    pub fg1: Color,
    /// Highlight / cursor accent.
    pub yellow: Color,
    /// Positive accent (undisplaced mesh, labels).
    pub green: Color,
    /// Secondary accent (displaced mesh, values).
    pub aqua: Color,
    /// Arrow accent.
    pub orange: Color,
    /// Error accent.
    pub red: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(102, 92, 84),
                fg0: Color::Rgb(235, 219, 178),
                fg1: Color::Rgb(189, 174, 147),
                yellow: Color::Rgb(250, 189, 47),
                green: Color::Rgb(184, 187, 38),
                aqua: Color::Rgb(142, 192, 124),
                orange: Color::Rgb(251, 184, 108),
                red: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg0: Color::Rgb(251, 245, 234),
                bg1: Color::Rgb(235, 219, 178),
                bg2: Color::Rgb(213, 196, 161),
                fg0: Color::Rgb(60, 56, 54),
                fg1: Color::Rgb(102, 92, 84),
                yellow: Color::Rgb(181, 118, 20),
                green: Color::Rgb(121, 116, 14),
                aqua: Color::Rgb(102, 123, 3),
                orange: Color::Rgb(175, 58, 3),
                red: Color::Rgb(157, 0, 6),
            },
        }
    }
}
