//! Mesh outlines for deformed grids.
//!
//! Given the corner coordinates of a (possibly displaced) `rows x cols`
//! grid, [`cell_outlines`] builds one closed quadrilateral per grid cell as
//! a path of `(vertex, code)` pairs. Each cell contributes exactly five
//! points (move, three lines, close), so the full path holds
//! `5 * (rows - 1) * (cols - 1)` points and every cell polygon is closed
//! independently rather than chained into one polyline.

use crate::error::{Result, WarpviewError};
use ndarray::Array2;

/// Drawing instruction attached to a path vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCode {
    /// Start a new subpath at this vertex.
    MoveTo,
    /// Straight line from the previous vertex.
    LineTo,
    /// Close the subpath back to its starting vertex.
    ClosePoly,
}

/// A sequence of vertices with per-vertex drawing codes.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPath {
    /// Path vertices as `[x, y]`.
    pub vertices: Vec<[f64; 2]>,
    /// One code per vertex.
    pub codes: Vec<PathCode>,
}

impl MeshPath {
    /// Number of path points.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the path holds no points.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Flatten the path into drawable line segments.
    ///
    /// `MoveTo` opens a subpath, `LineTo` emits a segment from the previous
    /// vertex, and `ClosePoly` emits the segment back to the subpath start.
    pub fn segments(&self) -> Vec<([f64; 2], [f64; 2])> {
        let mut out = Vec::new();
        let mut subpath_start = [0.0, 0.0];
        let mut current = [0.0, 0.0];

        for (vertex, code) in self.vertices.iter().zip(&self.codes) {
            match code {
                PathCode::MoveTo => {
                    subpath_start = *vertex;
                    current = *vertex;
                },
                PathCode::LineTo => {
                    out.push((current, *vertex));
                    current = *vertex;
                },
                PathCode::ClosePoly => {
                    out.push((current, subpath_start));
                    current = subpath_start;
                },
            }
        }

        out
    }
}

/// Build the closed outline of every cell in a corner grid.
///
/// `x` and `y` hold the corner coordinates, both of shape `rows x cols`.
/// Per cell the outline runs lower-left, upper-left, upper-right,
/// lower-right, then closes back to the lower-left corner ("lower" is the
/// smaller row index).
///
/// # Errors
///
/// [`WarpviewError::ShapeMismatch`] when the arrays disagree in shape or
/// either dimension is smaller than 2 (no cells to outline).
pub fn cell_outlines(x: &Array2<f64>, y: &Array2<f64>) -> Result<MeshPath> {
    if x.dim() != y.dim() {
        return Err(WarpviewError::shape_mismatch(
            "mesh corner arrays",
            format!("{:?}", x.dim()),
            format!("{:?}", y.dim()),
        ));
    }
    let (rows, cols) = x.dim();
    if rows < 2 || cols < 2 {
        return Err(WarpviewError::shape_mismatch(
            "mesh corner arrays",
            "at least 2x2",
            format!("{}x{}", rows, cols),
        ));
    }

    let cells = (rows - 1) * (cols - 1);
    let mut vertices = Vec::with_capacity(5 * cells);
    let mut codes = Vec::with_capacity(5 * cells);

    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let lower_left = [x[[r, c]], y[[r, c]]];
            let upper_left = [x[[r + 1, c]], y[[r + 1, c]]];
            let upper_right = [x[[r + 1, c + 1]], y[[r + 1, c + 1]]];
            let lower_right = [x[[r, c + 1]], y[[r, c + 1]]];

            vertices.push(lower_left);
            codes.push(PathCode::MoveTo);
            vertices.push(upper_left);
            codes.push(PathCode::LineTo);
            vertices.push(upper_right);
            codes.push(PathCode::LineTo);
            vertices.push(lower_right);
            codes.push(PathCode::LineTo);
            vertices.push(lower_left);
            codes.push(PathCode::ClosePoly);
        }
    }

    Ok(MeshPath { vertices, codes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::meshgrid;

    fn regular(rows: usize, cols: usize) -> (Array2<f64>, Array2<f64>) {
        let xs: Vec<f64> = (0..cols).map(|c| c as f64).collect();
        let ys: Vec<f64> = (0..rows).map(|r| r as f64).collect();
        meshgrid(&xs, &ys)
    }

    #[test]
    fn point_count_is_five_per_cell() {
        for (rows, cols) in [(2, 2), (2, 5), (4, 3), (6, 6)] {
            let (x, y) = regular(rows, cols);
            let path = cell_outlines(&x, &y).unwrap();
            assert_eq!(path.len(), 5 * (rows - 1) * (cols - 1));
            assert_eq!(path.codes.len(), path.vertices.len());
        }
    }

    #[test]
    fn each_block_is_independently_closed() {
        let (x, y) = regular(3, 4);
        let path = cell_outlines(&x, &y).unwrap();
        for block in path.vertices.chunks(5) {
            assert_eq!(block[0], block[4]);
        }
        for block in path.codes.chunks(5) {
            assert_eq!(block[0], PathCode::MoveTo);
            assert_eq!(&block[1..4], &[PathCode::LineTo; 3]);
            assert_eq!(block[4], PathCode::ClosePoly);
        }
    }

    #[test]
    fn single_cell_winding() {
        let (x, y) = regular(2, 2);
        let path = cell_outlines(&x, &y).unwrap();
        assert_eq!(
            path.vertices,
            vec![
                [0.0, 0.0],
                [0.0, 1.0],
                [1.0, 1.0],
                [1.0, 0.0],
                [0.0, 0.0]
            ]
        );
    }

    #[test]
    fn segments_close_every_cell() {
        let (x, y) = regular(3, 3);
        let path = cell_outlines(&x, &y).unwrap();
        let segments = path.segments();
        // 4 edges per cell, 4 cells.
        assert_eq!(segments.len(), 16);
        for chunk in segments.chunks(4) {
            assert_eq!(chunk[0].0, chunk[3].1);
        }
    }

    #[test]
    fn mismatched_shapes_rejected() {
        let (x, _) = regular(3, 3);
        let (_, y) = regular(3, 4);
        assert!(matches!(
            cell_outlines(&x, &y),
            Err(WarpviewError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn degenerate_dimensions_rejected() {
        let (x, y) = regular(1, 5);
        assert!(matches!(
            cell_outlines(&x, &y),
            Err(WarpviewError::ShapeMismatch { .. })
        ));
    }
}
