//! Quiver view: displacement arrows on a braille canvas.

use crate::field::{Bounds, VectorField};
use crate::ui::{format_value, ThemeColors};
use crate::viewer::ViewerState;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};

/// Draw the quiver view.
pub fn draw_quiver(
    f: &mut Frame<'_>,
    area: Rect,
    field: &VectorField,
    viewer: &ViewerState,
    colors: &ThemeColors,
) {
    let bounds = pad_bounds(field.bounds(viewer.scale));

    let key_readout = match viewer.effective_key_length(field) {
        Some(len) => format!(" Quiver - key {} ", format_value(len)),
        None => " Quiver - all vectors zero ".to_string(),
    };

    let head_len = 0.03 * (bounds.x_max - bounds.x_min).max(bounds.y_max - bounds.y_min);
    let arrow_color = colors.orange;
    let base_color = colors.fg1;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(key_readout)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0)),
        )
        .marker(Marker::Braille)
        .x_bounds([bounds.x_min, bounds.x_max])
        .y_bounds([bounds.y_min, bounds.y_max])
        .paint(move |ctx| {
            let mut bases = Vec::with_capacity(field.len());

            for i in 0..field.len() {
                let [x, y] = field.position(i);
                let [dx, dy] = field.vector(i);
                bases.push((x, y));

                if dx == 0.0 && dy == 0.0 {
                    continue;
                }

                let tip_x = x + viewer.scale * dx;
                let tip_y = y + viewer.scale * dy;
                ctx.draw(&CanvasLine {
                    x1: x,
                    y1: y,
                    x2: tip_x,
                    y2: tip_y,
                    color: arrow_color,
                });

                // Arrowhead: two short barbs rotated off the shaft.
                let angle = (tip_y - y).atan2(tip_x - x);
                let shaft = (tip_x - x).hypot(tip_y - y);
                let barb = head_len.min(0.4 * shaft);
                for offset in [2.6, -2.6] {
                    let a = angle + offset;
                    ctx.draw(&CanvasLine {
                        x1: tip_x,
                        y1: tip_y,
                        x2: tip_x + barb * a.cos(),
                        y2: tip_y + barb * a.sin(),
                        color: arrow_color,
                    });
                }
            }

            ctx.draw(&Points {
                coords: &bases,
                color: base_color,
            });
        });

    f.render_widget(canvas, area);
}

/// Pad a bounding box so arrows never touch the border.
pub(super) fn pad_bounds(bounds: Bounds) -> Bounds {
    let x_span = bounds.x_max - bounds.x_min;
    let y_span = bounds.y_max - bounds.y_min;
    let x_pad = if x_span > 0.0 { 0.05 * x_span } else { 1.0 };
    let y_pad = if y_span > 0.0 { 0.05 * y_span } else { 1.0 };
    Bounds {
        x_min: bounds.x_min - x_pad,
        x_max: bounds.x_max + x_pad,
        y_min: bounds.y_min - y_pad,
        y_max: bounds.y_max + y_pad,
    }
}
