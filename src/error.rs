//! Error types for Warpview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Warpview operations.
pub type Result<T> = std::result::Result<T, WarpviewError>;

/// Errors that can occur in Warpview.
#[derive(Debug, Error)]
pub enum WarpviewError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unsupported file format.
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Failed to read or parse a CSV record.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Two arrays that must agree in shape do not.
    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: String,
        actual: String,
    },

    /// Every consecutive difference on an axis fell within the noise
    /// tolerance, so no grid step can be estimated.
    #[error(
        "Degenerate grid on {axis} axis: all {count} differences are within tolerance {tolerance:e}"
    )]
    DegenerateGrid {
        axis: &'static str,
        count: usize,
        tolerance: f64,
    },

    /// Samples do not fill the estimated grid one-to-one.
    #[error("Incomplete grid: {0}")]
    IncompleteGrid(String),

    /// The field has no samples.
    #[error("Empty field: no samples loaded")]
    EmptyField,

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl WarpviewError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(
        context: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ShapeMismatch {
            context,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an IncompleteGrid error.
    pub fn incomplete_grid(detail: impl Into<String>) -> Self {
        Self::IncompleteGrid(detail.into())
    }
}

impl From<csv::Error> for WarpviewError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}
