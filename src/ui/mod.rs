//! User interface rendering.

mod formatters;
mod header;
mod keymap_bar;
mod mesh_view;
mod quiver_view;
mod status_bar;
mod table_view;
mod theme;

pub use formatters::{format_axis_label, format_number, format_value};
pub use theme::ThemeColors;

use crate::app::App;
use crate::viewer::ViewMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Keymap bar
        ])
        .split(f.area());

    if app.file_browser_mode {
        crate::file_browser::ui::draw_file_browser(f, &mut app.file_browser, chunks[0], &colors);
    } else {
        draw_main(f, app, chunks[0], &colors);
    }

    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app.file_browser_mode, &colors);
}

fn draw_main(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Field summary header
            Constraint::Min(3),    // Active view
        ])
        .split(area);

    header::draw_header(f, chunks[0], app, colors);

    if let Some(ref message) = app.error_message {
        draw_error(f, chunks[1], message, colors);
        return;
    }

    let Some(ref field) = app.field else {
        let hint = Paragraph::new("No field loaded. Press o to open the file browser.")
            .style(Style::default().fg(colors.fg1).bg(colors.bg0))
            .block(Block::default().borders(Borders::ALL).border_style(
                Style::default().fg(colors.bg2),
            ));
        f.render_widget(hint, chunks[1]);
        return;
    };

    match app.viewer.view_mode {
        ViewMode::Quiver => quiver_view::draw_quiver(f, chunks[1], field, &app.viewer, colors),
        ViewMode::Mesh => mesh_view::draw_mesh(f, chunks[1], field, &app.viewer, colors),
        ViewMode::Table => table_view::draw_table(f, chunks[1], field, &mut app.viewer, colors),
    }
}

fn draw_error(f: &mut Frame<'_>, area: Rect, message: &str, colors: &ThemeColors) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(colors.red).bg(colors.bg0))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.red)),
        );
    f.render_widget(paragraph, area);
}
