//! Reading vector field samples from CSV files.

use crate::error::{Result, WarpviewError};
use crate::field::VectorField;
use crate::grid::meshgrid;
use ndarray::Array2;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One sample row of a field file.
#[derive(Debug, Deserialize)]
struct SampleRecord {
    /// x position.
    x: f64,
    /// y position.
    y: f64,
    /// x displacement.
    dx: f64,
    /// y displacement.
    dy: f64,
}

/// Reader for vector field sample files.
#[derive(Debug)]
pub struct FieldReader;

impl FieldReader {
    /// Read a field from a file, dispatching on the extension.
    ///
    /// Only CSV is supported; unknown extensions are tried as CSV anyway
    /// so extensionless exports still open.
    pub fn read_file(path: &Path) -> Result<VectorField> {
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        match extension {
            "csv" | "txt" => Self::read_csv(path),
            _ => Self::read_csv(path),
        }
    }

    /// Read a headered `x,y,dx,dy` CSV file.
    fn read_csv(path: &Path) -> Result<VectorField> {
        let file =
            File::open(path).map_err(|e| WarpviewError::file_open(path.to_path_buf(), e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(file);

        let mut rows: Vec<SampleRecord> = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }

        if rows.is_empty() {
            return Err(WarpviewError::EmptyField);
        }

        let mut positions = Array2::zeros((rows.len(), 2));
        let mut vectors = Array2::zeros((rows.len(), 2));
        for (i, row) in rows.iter().enumerate() {
            positions[[i, 0]] = row.x;
            positions[[i, 1]] = row.y;
            vectors[[i, 0]] = row.dx;
            vectors[[i, 1]] = row.dy;
        }

        VectorField::new(positions, vectors)
    }
}

/// Built-in demo field: a 5x5 grid spanning -5..5 on both axes, deformed by
/// a small rigid rotation about the origin.
pub fn demo_field() -> VectorField {
    let axis: Vec<f64> = (0..5).map(|i| -5.0 + 2.5 * i as f64).collect();
    let (gx, gy) = meshgrid(&axis, &axis);

    let phi = 0.15_f64;
    let (sin, cos) = phi.sin_cos();

    let n = gx.len();
    let mut positions = Array2::zeros((n, 2));
    let mut vectors = Array2::zeros((n, 2));
    for (i, (x, y)) in gx.iter().zip(gy.iter()).enumerate() {
        positions[[i, 0]] = *x;
        positions[[i, 1]] = *y;
        vectors[[i, 0]] = (cos * x - sin * y) - x;
        vectors[[i, 1]] = (sin * x + cos * y) - y;
    }

    // Construction over a meshgrid cannot violate the shape checks.
    VectorField::new(positions, vectors).expect("demo field is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_field_sits_on_a_regular_grid() {
        let field = demo_field();
        assert_eq!(field.len(), 25);
        let layout = field.grid_layout(0.001).unwrap();
        assert_eq!(layout.shape(), (5, 5));
        assert_eq!(layout.x.step, 2.5);
        assert!(field.key_length().is_some());
    }

    #[test]
    fn demo_field_center_is_fixed() {
        let field = demo_field();
        let center = (0..field.len())
            .find(|&i| field.position(i) == [0.0, 0.0])
            .unwrap();
        assert_eq!(field.vector(center), [0.0, 0.0]);
    }
}
