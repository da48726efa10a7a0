//! Viewer feature - view modes and editable plot parameters.
//!
//! This module holds the state behind the main content area: which view is
//! active (quiver, mesh, table) and the parameters the user can edit at
//! runtime (arrow scale, quiver-key length, grid tolerance).

use crate::field::VectorField;

/// Multiplicative step used when editing scale and key length.
const EDIT_FACTOR: f64 = 1.25;

/// View mode for the main content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Arrows from each sample position, plus the key readout.
    #[default]
    Quiver,
    /// Cell outlines of the undisplaced and displaced grids.
    Mesh,
    /// Scrollable table of the raw samples.
    Table,
}

impl ViewMode {
    /// Get the next view mode in cycle.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Quiver => ViewMode::Mesh,
            ViewMode::Mesh => ViewMode::Table,
            ViewMode::Table => ViewMode::Quiver,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Quiver => "Quiver",
            ViewMode::Mesh => "Mesh",
            ViewMode::Table => "Table",
        }
    }
}

/// State of the viewer: active view plus editable plot parameters.
#[derive(Debug)]
pub struct ViewerState {
    /// Active view mode.
    pub view_mode: ViewMode,
    /// Displacement scale applied to arrows and the displaced mesh.
    pub scale: f64,
    /// Quiver-key length override; `None` means the RMS auto value.
    pub key_length: Option<f64>,
    /// Relative tolerance fraction for grid estimation.
    pub tolerance: f64,
    /// Cursor row in the table view.
    pub table_cursor: usize,
    /// Scroll offset in the table view.
    pub table_scroll: usize,
}

impl ViewerState {
    /// Create viewer state with the given initial parameters.
    pub fn new(scale: f64, tolerance: f64) -> Self {
        Self {
            view_mode: ViewMode::default(),
            scale,
            key_length: None,
            tolerance,
            table_cursor: 0,
            table_scroll: 0,
        }
    }

    /// Cycle to the next view mode.
    pub fn cycle_view_mode(&mut self) {
        self.view_mode = self.view_mode.next();
    }

    /// Increase the displacement scale.
    pub fn scale_up(&mut self) {
        self.scale *= EDIT_FACTOR;
    }

    /// Decrease the displacement scale.
    pub fn scale_down(&mut self) {
        self.scale /= EDIT_FACTOR;
    }

    /// Key length shown next to the quiver, falling back to the field's
    /// RMS heuristic when no override is set.
    pub fn effective_key_length(&self, field: &VectorField) -> Option<f64> {
        self.key_length.or_else(|| field.key_length())
    }

    /// Increase the key length override, seeding it from the auto value.
    pub fn key_length_up(&mut self, field: &VectorField) {
        if let Some(current) = self.effective_key_length(field) {
            self.key_length = Some(current * EDIT_FACTOR);
        }
    }

    /// Decrease the key length override, seeding it from the auto value.
    pub fn key_length_down(&mut self, field: &VectorField) {
        if let Some(current) = self.effective_key_length(field) {
            self.key_length = Some(current / EDIT_FACTOR);
        }
    }

    /// Drop the key length override, returning to the auto value.
    pub fn reset_key_length(&mut self) {
        self.key_length = None;
    }

    /// Move the table cursor up.
    pub fn table_up(&mut self) {
        self.table_cursor = self.table_cursor.saturating_sub(1);
    }

    /// Move the table cursor down, clamped to the row count.
    pub fn table_down(&mut self, row_count: usize) {
        if self.table_cursor + 1 < row_count {
            self.table_cursor += 1;
        }
    }

    /// Jump to the first table row.
    pub fn table_first(&mut self) {
        self.table_cursor = 0;
    }

    /// Jump to the last table row.
    pub fn table_last(&mut self, row_count: usize) {
        self.table_cursor = row_count.saturating_sub(1);
    }

    /// Adjust the scroll offset so the cursor stays visible.
    pub fn adjust_table_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.table_cursor < self.table_scroll {
            self.table_scroll = self.table_cursor;
        }
        if self.table_cursor >= self.table_scroll + viewport_height {
            self.table_scroll = self.table_cursor - viewport_height + 1;
        }
    }

    /// Reset per-field state after loading a new file.
    pub fn reset_for_new_field(&mut self) {
        self.table_cursor = 0;
        self.table_scroll = 0;
        self.key_length = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo_field;

    #[test]
    fn view_mode_cycles_through_all() {
        let mut mode = ViewMode::Quiver;
        mode = mode.next();
        assert_eq!(mode, ViewMode::Mesh);
        mode = mode.next();
        assert_eq!(mode, ViewMode::Table);
        mode = mode.next();
        assert_eq!(mode, ViewMode::Quiver);
    }

    #[test]
    fn key_length_edit_seeds_from_auto() {
        let field = demo_field();
        let mut state = ViewerState::new(1.0, 0.001);
        let auto = state.effective_key_length(&field).unwrap();

        state.key_length_up(&field);
        let edited = state.effective_key_length(&field).unwrap();
        assert!((edited - auto * 1.25).abs() < 1e-12);

        state.reset_key_length();
        assert_eq!(state.effective_key_length(&field), Some(auto));
    }

    #[test]
    fn table_scroll_follows_cursor() {
        let mut state = ViewerState::new(1.0, 0.001);
        for _ in 0..20 {
            state.table_down(25);
        }
        state.adjust_table_scroll(10);
        assert_eq!(state.table_cursor, 20);
        assert_eq!(state.table_scroll, 11);

        state.table_first();
        state.adjust_table_scroll(10);
        assert_eq!(state.table_scroll, 0);
    }
}
