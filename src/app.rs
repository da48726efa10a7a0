//! Application state and logic.

use std::path::PathBuf;

use crate::data::{demo_field, FieldReader};
use crate::field::VectorField;
use crate::file_browser::FileBrowserState;
use crate::util;
use crate::viewer::ViewerState;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Current file path (`None` for the built-in demo field).
    pub file_path: Option<PathBuf>,
    /// Loaded field.
    pub field: Option<VectorField>,
    /// Viewer state (view mode + plot parameters).
    pub viewer: ViewerState,
    /// File browser state.
    pub file_browser: FileBrowserState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Error message.
    pub error_message: Option<String>,
    /// File browser mode.
    pub file_browser_mode: bool,
}

impl App {
    /// Create a new application instance.
    ///
    /// With a file path the field is loaded immediately; with a directory
    /// (or nothing) the file browser opens there; with `demo` the built-in
    /// demo field is shown.
    pub fn new(file_path: Option<PathBuf>, demo: bool, scale: f64, tolerance: f64) -> Self {
        let mut app = Self {
            file_path: None,
            field: None,
            viewer: ViewerState::new(scale, tolerance),
            file_browser: FileBrowserState::new(),
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            error_message: None,
            file_browser_mode: false,
        };

        if demo {
            app.load_demo();
            return app;
        }

        match file_path {
            Some(path) if path.is_dir() => {
                app.file_browser.current_dir = path;
                app.file_browser.load_directory();
                app.file_browser_mode = true;
            },
            Some(path) if path.is_file() => {
                app.load_file(path);
            },
            None => {
                app.file_browser.load_directory();
                app.file_browser_mode = true;
            },
            _ => {
                app.error_message = Some("Invalid path provided".to_string());
            },
        }

        app
    }

    /// Load a field file.
    pub fn load_file(&mut self, path: PathBuf) {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string());
        self.status = format!("Loading {}...", display_name);

        let canonical_path = match std::fs::canonicalize(&path) {
            Ok(p) => p,
            Err(e) => {
                self.error_message = Some(format!("Failed to resolve path: {}", e));
                self.status = "Error resolving file path".to_string();
                return;
            },
        };

        match FieldReader::read_file(&canonical_path) {
            Ok(field) => {
                self.status = format!("{} loaded ({} samples)", display_name, field.len());
                self.field = Some(field);
                self.viewer.reset_for_new_field();
                self.error_message = None;
                self.file_path = Some(canonical_path.clone());

                if let Some(parent) = canonical_path.parent() {
                    self.file_browser.current_dir = parent.to_path_buf();
                }

                tracing::info!("File loaded successfully");
            },
            Err(e) => {
                self.error_message = Some(format!("Error loading file: {}", e));
                self.status = "Error loading file".to_string();
                tracing::error!("Error loading file: {}", e);
            },
        }
    }

    /// Load the built-in demo field.
    pub fn load_demo(&mut self) {
        let field = demo_field();
        self.status = format!("Demo field loaded ({} samples)", field.len());
        self.field = Some(field);
        self.viewer.reset_for_new_field();
        self.file_path = None;
        self.error_message = None;
        self.file_browser_mode = false;
    }

    /// Cycle to the next view mode.
    pub fn cycle_view_mode(&mut self) {
        self.viewer.cycle_view_mode();
        self.status = format!("View: {}", self.viewer.view_mode.name());
    }

    /// Increase the displacement scale.
    pub fn scale_up(&mut self) {
        self.viewer.scale_up();
        self.status = format!("Scale: {}", self.viewer.scale);
    }

    /// Decrease the displacement scale.
    pub fn scale_down(&mut self) {
        self.viewer.scale_down();
        self.status = format!("Scale: {}", self.viewer.scale);
    }

    /// Increase the quiver-key length.
    pub fn key_length_up(&mut self) {
        if let Some(ref field) = self.field {
            self.viewer.key_length_up(field);
            self.report_key_length();
        }
    }

    /// Decrease the quiver-key length.
    pub fn key_length_down(&mut self) {
        if let Some(ref field) = self.field {
            self.viewer.key_length_down(field);
            self.report_key_length();
        }
    }

    /// Reset the quiver-key length to the auto value.
    pub fn reset_key_length(&mut self) {
        self.viewer.reset_key_length();
        self.status = "Key length: auto".to_string();
    }

    fn report_key_length(&mut self) {
        match self.viewer.key_length {
            Some(len) => self.status = format!("Key length: {}", len),
            None => self.status = "Key length: n/a (all vectors zero)".to_string(),
        }
    }

    /// Move the table cursor up.
    pub fn table_up(&mut self) {
        self.viewer.table_up();
    }

    /// Move the table cursor down.
    pub fn table_down(&mut self) {
        if let Some(ref field) = self.field {
            self.viewer.table_down(field.len());
        }
    }

    /// Jump to the first table row.
    pub fn table_first(&mut self) {
        self.viewer.table_first();
    }

    /// Jump to the last table row.
    pub fn table_last(&mut self) {
        if let Some(ref field) = self.field {
            self.viewer.table_last(field.len());
        }
    }

    /// Copy the sample table to the clipboard.
    pub fn copy_table(&mut self) {
        match self.field {
            Some(ref field) => match util::copy_field_table(field) {
                Ok(_) => self.status = "Table copied!".to_string(),
                Err(e) => self.status = format!("Copy failed: {}", e),
            },
            None => self.status = "No field loaded".to_string(),
        }
    }

    /// Copy a field summary to the clipboard.
    pub fn copy_summary(&mut self) {
        let file_name = self
            .file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string());

        match self.field {
            Some(ref field) => {
                match util::copy_field_summary(field, &self.viewer, file_name.as_deref()) {
                    Ok(_) => self.status = "Summary copied!".to_string(),
                    Err(e) => self.status = format!("Copy failed: {}", e),
                }
            },
            None => self.status = "No field loaded".to_string(),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Navigate to selected file/directory in browser.
    pub fn browser_select(&mut self) {
        if let Some(path) = self.file_browser.select_current() {
            self.file_browser_mode = false;
            self.load_file(path);

            if self.error_message.is_some() {
                self.file_browser_mode = true;
                self.status =
                    "Error loading file (press q to quit, navigate to try another)".to_string();
            }
        }
    }

    /// Navigate to parent directory in file browser.
    pub fn browser_parent(&mut self) {
        self.file_browser.go_to_parent();
        self.status = format!("Browsing: {}", self.file_browser.current_dir.display());
    }

    /// Move cursor up in file browser.
    pub fn browser_up(&mut self) {
        self.file_browser.cursor_up();
    }

    /// Move cursor down in file browser.
    pub fn browser_down(&mut self) {
        self.file_browser.cursor_down();
    }

    /// Toggle show hidden files.
    pub fn toggle_hidden(&mut self) {
        self.file_browser.toggle_hidden();
        self.status = format!(
            "Show hidden: {}",
            if self.file_browser.show_hidden {
                "ON"
            } else {
                "OFF"
            }
        );
    }

    /// Toggle the CSV-only file filter.
    pub fn toggle_all_files(&mut self) {
        self.file_browser.toggle_all_files();
        self.status = format!(
            "Show all files: {}",
            if self.file_browser.show_all_files {
                "ON"
            } else {
                "OFF"
            }
        );
    }

    /// Open file browser at the loaded file's directory.
    pub fn open_file_browser_at_current(&mut self) {
        let start_dir = self
            .file_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        self.file_browser.current_dir = start_dir;
        self.file_browser.load_directory();
        self.file_browser_mode = true;
        self.status = format!("File browser: {}", self.file_browser.current_dir.display());
    }

    /// Leave file browser mode without selecting.
    pub fn close_file_browser(&mut self) {
        if self.field.is_some() {
            self.file_browser_mode = false;
            self.status = "File browser closed".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_start_loads_a_field() {
        let app = App::new(None, true, 1.0, 0.001);
        assert!(app.field.is_some());
        assert!(!app.file_browser_mode);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn missing_file_sets_error() {
        let mut app = App::new(None, true, 1.0, 0.001);
        app.load_file(PathBuf::from("/definitely/not/here.csv"));
        assert!(app.error_message.is_some());
    }

    #[test]
    fn scale_edits_update_status() {
        let mut app = App::new(None, true, 1.0, 0.001);
        app.scale_up();
        assert_eq!(app.viewer.scale, 1.25);
        assert!(app.status.starts_with("Scale:"));
        app.scale_down();
        assert_eq!(app.viewer.scale, 1.0);
    }
}
