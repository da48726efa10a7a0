//! Utility functions for Warpview.

use crate::clipboard;
use crate::error::Result;
use crate::field::{VectorField, TABLE_HEADERS};
use crate::viewer::ViewerState;

/// Copy the sample table to the clipboard as CSV text.
pub fn copy_field_table(field: &VectorField) -> Result<()> {
    clipboard::copy_to_clipboard(&field_table_text(field))
}

/// Copy a field summary to the clipboard.
pub fn copy_field_summary(
    field: &VectorField,
    viewer: &ViewerState,
    file_name: Option<&str>,
) -> Result<()> {
    clipboard::copy_to_clipboard(&field_summary_text(field, viewer, file_name))
}

/// Render the sample table as headered CSV text.
pub fn field_table_text(field: &VectorField) -> String {
    let mut text = TABLE_HEADERS.join(",");
    text.push('\n');

    for i in 0..field.len() {
        let [x, y, dx, dy] = field.table_row(i);
        text.push_str(&format!("{},{},{},{}\n", x, y, dx, dy));
    }

    text
}

/// Render a human-readable field summary.
pub fn field_summary_text(
    field: &VectorField,
    viewer: &ViewerState,
    file_name: Option<&str>,
) -> String {
    let mut text = String::new();

    if let Some(name) = file_name {
        text.push_str(&format!("Field: {}\n", name));
    } else {
        text.push_str("Field\n");
    }

    text.push_str(&"=".repeat(40));
    text.push('\n');

    text.push_str(&format!("Samples: {}\n", field.len()));

    let bounds = field.bounds(0.0);
    text.push_str(&format!(
        "Extent: x {}..{}, y {}..{}\n",
        bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max
    ));

    match field.grid_layout(viewer.tolerance) {
        Ok(layout) => {
            text.push_str(&format!(
                "Grid x: start {}, end {}, step {}, count {}\n",
                layout.x.start, layout.x.end, layout.x.step, layout.x.count
            ));
            text.push_str(&format!(
                "Grid y: start {}, end {}, step {}, count {}\n",
                layout.y.start, layout.y.end, layout.y.step, layout.y.count
            ));
        },
        Err(e) => {
            text.push_str(&format!("Grid: {}\n", e));
        },
    }

    match viewer.effective_key_length(field) {
        Some(len) => text.push_str(&format!("Key length: {}\n", len)),
        None => text.push_str("Key length: n/a (all vectors zero)\n"),
    }
    text.push_str(&format!("Scale: {}\n", viewer.scale));

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn table_text_round_trips_headers() {
        let field = VectorField::new(array![[0.0, 1.0]], array![[0.5, -0.5]]).unwrap();
        let text = field_table_text(&field);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("x,y,dx,dy"));
        assert_eq!(lines.next(), Some("0,1,0.5,-0.5"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn summary_mentions_grid_and_key() {
        let field = crate::data::demo_field();
        let viewer = ViewerState::new(1.0, 0.001);
        let text = field_summary_text(&field, &viewer, Some("demo.csv"));
        assert!(text.contains("Field: demo.csv"));
        assert!(text.contains("Samples: 25"));
        assert!(text.contains("Grid x: start -5, end 5, step 2.5, count 5"));
        assert!(text.contains("Key length:"));
    }
}
