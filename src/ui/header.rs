//! Field summary header.

use crate::app::App;
use crate::ui::{format_number, format_value, ThemeColors};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the summary header: file, sample count, grid estimate, parameters.
pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let name = app
        .file_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "demo field".to_string());

    let mut first = vec![Span::styled(
        name,
        Style::default()
            .fg(colors.yellow)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref field) = app.field {
        first.push(Span::styled(
            format!(" - {} samples", format_number(field.len())),
            Style::default().fg(colors.fg0),
        ));

        let grid_span = match field.grid_layout(app.viewer.tolerance) {
            Ok(layout) => Span::styled(
                format!(
                    "grid {}x{} (x: {}..{} step {}, y: {}..{} step {})",
                    layout.y.count,
                    layout.x.count,
                    format_value(layout.x.start),
                    format_value(layout.x.end),
                    format_value(layout.x.step),
                    format_value(layout.y.start),
                    format_value(layout.y.end),
                    format_value(layout.y.step),
                ),
                Style::default().fg(colors.green),
            ),
            Err(e) => Span::styled(format!("grid: {}", e), Style::default().fg(colors.red)),
        };

        let key = match app.viewer.effective_key_length(field) {
            Some(len) if app.viewer.key_length.is_some() => {
                format!("key {} (manual)", format_value(len))
            },
            Some(len) => format!("key {} (auto)", format_value(len)),
            None => "key n/a".to_string(),
        };

        let second = Line::from(vec![
            grid_span,
            Span::styled(
                format!(
                    " | scale {} | {} | view {}",
                    format_value(app.viewer.scale),
                    key,
                    app.viewer.view_mode.name()
                ),
                Style::default().fg(colors.aqua),
            ),
        ]);

        let paragraph = Paragraph::new(vec![Line::from(first), second])
            .style(Style::default().bg(colors.bg0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.bg2)),
            );
        f.render_widget(paragraph, area);
    } else {
        let paragraph = Paragraph::new(Line::from(first))
            .style(Style::default().bg(colors.bg0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.bg2)),
            );
        f.render_widget(paragraph, area);
    }
}
