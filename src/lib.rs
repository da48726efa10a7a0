//! Warpview - a terminal-based viewer for 2-D deformation fields.
//!
//! Warpview loads vector field samples (positions plus displacements),
//! reconstructs the regular grid they were measured on, and renders the
//! field as quiver arrows, deformed mesh outlines, or a data table in the
//! terminal.
//!
//! # Features
//!
//! - Grid parameter estimation that tolerates noisy or near-duplicate
//!   sample positions
//! - Closed quadrilateral outlines for every grid cell, before and after
//!   displacement
//! - Quiver view with an RMS-based key length and editable arrow scale
//! - CSV input with a file browser, clipboard export, Gruvbox themes
//!
//! # Example
//!
//! ```ignore
//! use warpview::data::FieldReader;
//! use std::path::Path;
//!
//! // Open a sample file and estimate its grid.
//! let field = FieldReader::read_file(Path::new("samples.csv"))?;
//! let layout = field.grid_layout(0.001)?;
//! println!("{} samples on a {:?} grid", field.len(), layout.shape());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod field;
pub mod file_browser;
pub mod grid;
pub mod mesh;
pub mod ui;
pub mod util;
pub mod viewer;

pub use error::{Result, WarpviewError};
