//! Mesh view: cell outlines of the undisplaced and displaced grids.

use crate::field::{Bounds, VectorField};
use crate::mesh::cell_outlines;
use crate::ui::quiver_view::pad_bounds;
use crate::ui::ThemeColors;
use crate::viewer::ViewerState;
use ndarray::Array2;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

/// Draw the mesh view.
///
/// Reshapes the field onto its estimated grid and outlines every cell of
/// the undisplaced and the displaced mesh. Estimation failures (degenerate
/// or incomplete grids) are reported in place of the canvas.
pub fn draw_mesh(
    f: &mut Frame<'_>,
    area: Rect,
    field: &VectorField,
    viewer: &ViewerState,
    colors: &ThemeColors,
) {
    let grids = match field.to_grids(viewer.scale, viewer.tolerance) {
        Ok(g) => g,
        Err(e) => {
            let paragraph = Paragraph::new(format!("Cannot build mesh: {}", e))
                .style(Style::default().fg(colors.red).bg(colors.bg0))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(" Mesh ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(colors.red)),
                );
            f.render_widget(paragraph, area);
            return;
        },
    };

    let reference = match cell_outlines(&grids.x, &grids.y) {
        Ok(p) => p,
        Err(e) => {
            let paragraph = Paragraph::new(format!("Cannot build mesh: {}", e))
                .style(Style::default().fg(colors.red).bg(colors.bg0))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(" Mesh ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(colors.red)),
                );
            f.render_widget(paragraph, area);
            return;
        },
    };
    // Same shape as the reference arrays, cannot fail after the first call.
    let Ok(displaced) = cell_outlines(&grids.x_displaced, &grids.y_displaced) else {
        return;
    };

    let bounds = pad_bounds(mesh_bounds(&grids.x, &grids.y, &grids.x_displaced, &grids.y_displaced));

    let (rows, cols) = grids.x.dim();
    let title = format!(
        " Mesh - {}x{} nodes, {} cells ",
        rows,
        cols,
        (rows - 1) * (cols - 1)
    );

    let reference_color = colors.green;
    let displaced_color = colors.aqua;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0)),
        )
        .marker(Marker::Braille)
        .x_bounds([bounds.x_min, bounds.x_max])
        .y_bounds([bounds.y_min, bounds.y_max])
        .paint(move |ctx| {
            for (from, to) in reference.segments() {
                ctx.draw(&CanvasLine {
                    x1: from[0],
                    y1: from[1],
                    x2: to[0],
                    y2: to[1],
                    color: reference_color,
                });
            }
            ctx.layer();
            for (from, to) in displaced.segments() {
                ctx.draw(&CanvasLine {
                    x1: from[0],
                    y1: from[1],
                    x2: to[0],
                    y2: to[1],
                    color: displaced_color,
                });
            }
        });

    f.render_widget(canvas, area);
}

fn mesh_bounds(
    x: &Array2<f64>,
    y: &Array2<f64>,
    x_displaced: &Array2<f64>,
    y_displaced: &Array2<f64>,
) -> Bounds {
    let mut bounds = Bounds {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
    };
    for v in x.iter().chain(x_displaced.iter()) {
        bounds.x_min = bounds.x_min.min(*v);
        bounds.x_max = bounds.x_max.max(*v);
    }
    for v in y.iter().chain(y_displaced.iter()) {
        bounds.y_min = bounds.y_min.min(*v);
        bounds.y_max = bounds.y_max.max(*v);
    }
    bounds
}
