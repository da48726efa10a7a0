//! Table view: scrollable listing of the raw samples.

use crate::field::{VectorField, TABLE_HEADERS};
use crate::ui::{format_number, format_value, ThemeColors};
use crate::viewer::ViewerState;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Draw the table view.
pub fn draw_table(
    f: &mut Frame<'_>,
    area: Rect,
    field: &VectorField,
    viewer: &mut ViewerState,
    colors: &ThemeColors,
) {
    // Borders take 2 rows, the header row one more.
    let viewport_height = area.height.saturating_sub(3) as usize;
    viewer.adjust_table_scroll(viewport_height);

    let header_cells = TABLE_HEADERS
        .iter()
        .copied()
        .chain(std::iter::once("|v|"))
        .map(|h| {
            Cell::from(h).style(
                Style::default()
                    .fg(colors.yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
    let header = Row::new(header_cells).height(1);

    let rows = (viewer.table_scroll..field.len())
        .take(viewport_height)
        .map(|i| {
            let values = field.table_row(i);
            let cells = values
                .iter()
                .copied()
                .chain(std::iter::once(field.magnitude(i)))
                .map(|v| Cell::from(format_value(v)));

            let style = if i == viewer.table_cursor {
                Style::default()
                    .fg(colors.bg0)
                    .bg(colors.yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg0)
            };

            Row::new(cells).style(style)
        });

    let title = format!(
        " Samples {}-{} of {} ",
        viewer.table_scroll + 1,
        (viewer.table_scroll + viewport_height).min(field.len()),
        format_number(field.len())
    );

    let widths = [Constraint::Length(14); 5];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.bg2))
            .style(Style::default().bg(colors.bg0)),
    );

    f.render_widget(table, area);
}
