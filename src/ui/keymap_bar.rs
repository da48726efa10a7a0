//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, file_browser_mode: bool, colors: &ThemeColors) {
    let keymap_text = if file_browser_mode {
        "jk/↑↓:nav | Enter/l:select | h:parent | .:hidden | a:all files | q:quit"
    } else {
        "q:quit | Tab:view | +-:scale | ][:key | 0:auto key | jk:rows | o:open | c/y:copy | T:theme | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.fg1).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
