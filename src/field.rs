//! Vector field data model.
//!
//! A [`VectorField`] couples n sample positions with n displacement
//! vectors, both `n x 2`. It is the in-memory form of everything the viewer
//! shows: the quiver arrows, the data table, and (after grid estimation and
//! reshaping) the deformed mesh.

use crate::error::{Result, WarpviewError};
use crate::grid::{estimate_grid, GridParams};
use ndarray::Array2;

/// Column headers for the table projection of a field.
pub const TABLE_HEADERS: [&str; 4] = ["x", "y", "dx", "dy"];

/// Estimated grid parameters for both axes of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Grid along the x axis.
    pub x: GridParams,
    /// Grid along the y axis.
    pub y: GridParams,
}

impl GridLayout {
    /// Grid shape as `(rows, cols)`, rows following the y axis.
    pub fn shape(&self) -> (usize, usize) {
        (self.y.count, self.x.count)
    }
}

/// Corner coordinate matrices for a field scattered onto its grid.
#[derive(Debug, Clone)]
pub struct MeshGrids {
    /// Undisplaced x coordinates, `rows x cols`.
    pub x: Array2<f64>,
    /// Undisplaced y coordinates, `rows x cols`.
    pub y: Array2<f64>,
    /// Displaced x coordinates.
    pub x_displaced: Array2<f64>,
    /// Displaced y coordinates.
    pub y_displaced: Array2<f64>,
}

/// Axis-aligned bounding box of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x.
    pub x_min: f64,
    /// Largest x.
    pub x_max: f64,
    /// Smallest y.
    pub y_min: f64,
    /// Largest y.
    pub y_max: f64,
}

impl Bounds {
    fn include(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }
}

/// Sampled 2-D displacement field.
#[derive(Debug, Clone)]
pub struct VectorField {
    positions: Array2<f64>,
    vectors: Array2<f64>,
}

impl VectorField {
    /// Create a field from position and displacement arrays.
    ///
    /// # Errors
    ///
    /// [`WarpviewError::ShapeMismatch`] unless both arrays have identical
    /// shape with exactly two columns; [`WarpviewError::EmptyField`] for
    /// zero rows.
    pub fn new(positions: Array2<f64>, vectors: Array2<f64>) -> Result<Self> {
        if positions.dim() != vectors.dim() {
            return Err(WarpviewError::shape_mismatch(
                "positions vs vectors",
                format!("{:?}", positions.dim()),
                format!("{:?}", vectors.dim()),
            ));
        }
        if positions.ncols() != 2 {
            return Err(WarpviewError::shape_mismatch(
                "field columns",
                "(n, 2)",
                format!("{:?}", positions.dim()),
            ));
        }
        if positions.nrows() == 0 {
            return Err(WarpviewError::EmptyField);
        }
        Ok(Self { positions, vectors })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.positions.nrows()
    }

    /// Whether the field holds no samples (never true after `new`).
    pub fn is_empty(&self) -> bool {
        self.positions.nrows() == 0
    }

    /// Position of sample `i` as `[x, y]`.
    pub fn position(&self, i: usize) -> [f64; 2] {
        [self.positions[[i, 0]], self.positions[[i, 1]]]
    }

    /// Displacement of sample `i` as `[dx, dy]`.
    pub fn vector(&self, i: usize) -> [f64; 2] {
        [self.vectors[[i, 0]], self.vectors[[i, 1]]]
    }

    /// Displacement magnitude of sample `i`.
    pub fn magnitude(&self, i: usize) -> f64 {
        let [dx, dy] = self.vector(i);
        dx.hypot(dy)
    }

    /// All x positions.
    pub fn xs(&self) -> Vec<f64> {
        self.positions.column(0).to_vec()
    }

    /// All y positions.
    pub fn ys(&self) -> Vec<f64> {
        self.positions.column(1).to_vec()
    }

    /// Table row for sample `i`, matching [`TABLE_HEADERS`].
    pub fn table_row(&self, i: usize) -> [f64; 4] {
        let [x, y] = self.position(i);
        let [dx, dy] = self.vector(i);
        [x, y, dx, dy]
    }

    /// Quiver key length: RMS magnitude over the non-zero displacement
    /// vectors, or `None` when every vector is exactly zero.
    pub fn key_length(&self) -> Option<f64> {
        let mut sum_sq = 0.0;
        let mut count = 0usize;
        for i in 0..self.len() {
            let [dx, dy] = self.vector(i);
            if dx != 0.0 || dy != 0.0 {
                sum_sq += dx * dx + dy * dy;
                count += 1;
            }
        }
        (count > 0).then(|| (sum_sq / count as f64).sqrt())
    }

    /// Bounding box covering the sample positions and, with `scale`
    /// applied, the arrow tips.
    pub fn bounds(&self, scale: f64) -> Bounds {
        let [x0, y0] = self.position(0);
        let mut bounds = Bounds {
            x_min: x0,
            x_max: x0,
            y_min: y0,
            y_max: y0,
        };
        for i in 0..self.len() {
            let [x, y] = self.position(i);
            let [dx, dy] = self.vector(i);
            bounds.include(x, y);
            bounds.include(x + scale * dx, y + scale * dy);
        }
        bounds
    }

    /// Estimate the grid parameters of both position axes.
    pub fn grid_layout(&self, tolerance_fraction: f64) -> Result<GridLayout> {
        Ok(GridLayout {
            x: estimate_grid(&self.xs(), tolerance_fraction, "x")?,
            y: estimate_grid(&self.ys(), tolerance_fraction, "y")?,
        })
    }

    /// Scatter the samples onto their estimated grid and build the corner
    /// matrices before and after displacement.
    ///
    /// Each sample snaps to its nearest grid node. Every node must be
    /// claimed by exactly one sample; a sample outside the grid, two
    /// samples on one node, or a node left empty is an
    /// [`WarpviewError::IncompleteGrid`] error.
    pub fn to_grids(&self, scale: f64, tolerance_fraction: f64) -> Result<MeshGrids> {
        let layout = self.grid_layout(tolerance_fraction)?;
        let (rows, cols) = layout.shape();

        let mut x = Array2::from_elem((rows, cols), f64::NAN);
        let mut y = Array2::from_elem((rows, cols), f64::NAN);
        let mut x_displaced = Array2::from_elem((rows, cols), f64::NAN);
        let mut y_displaced = Array2::from_elem((rows, cols), f64::NAN);

        for i in 0..self.len() {
            let [px, py] = self.position(i);
            let [dx, dy] = self.vector(i);

            let col = layout.x.nearest_index(px).ok_or_else(|| {
                WarpviewError::incomplete_grid(format!("sample {} at x={} is off-grid", i, px))
            })?;
            let row = layout.y.nearest_index(py).ok_or_else(|| {
                WarpviewError::incomplete_grid(format!("sample {} at y={} is off-grid", i, py))
            })?;

            if !x[[row, col]].is_nan() {
                return Err(WarpviewError::incomplete_grid(format!(
                    "two samples snap to grid node ({}, {})",
                    row, col
                )));
            }

            x[[row, col]] = px;
            y[[row, col]] = py;
            x_displaced[[row, col]] = px + scale * dx;
            y_displaced[[row, col]] = py + scale * dy;
        }

        if let Some((idx, _)) = x.indexed_iter().find(|(_, v)| v.is_nan()) {
            return Err(WarpviewError::incomplete_grid(format!(
                "no sample for grid node ({}, {})",
                idx.0, idx.1
            )));
        }

        Ok(MeshGrids {
            x,
            y,
            x_displaced,
            y_displaced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::meshgrid;
    use ndarray::array;

    /// 3x4 regular grid with a constant displacement of (1, 0).
    fn shifted_grid() -> VectorField {
        let xs: Vec<f64> = (0..4).map(|c| c as f64).collect();
        let ys: Vec<f64> = (0..3).map(|r| 2.0 * r as f64).collect();
        let (gx, gy) = meshgrid(&xs, &ys);

        let n = gx.len();
        let mut positions = Array2::zeros((n, 2));
        let mut vectors = Array2::zeros((n, 2));
        for (i, (x, y)) in gx.iter().zip(gy.iter()).enumerate() {
            positions[[i, 0]] = *x;
            positions[[i, 1]] = *y;
            vectors[[i, 0]] = 1.0;
        }
        VectorField::new(positions, vectors).unwrap()
    }

    #[test]
    fn shape_validation() {
        let positions = Array2::zeros((3, 2));
        let vectors = Array2::zeros((4, 2));
        assert!(matches!(
            VectorField::new(positions, vectors),
            Err(WarpviewError::ShapeMismatch { .. })
        ));

        let positions = Array2::zeros((3, 3));
        let vectors = Array2::zeros((3, 3));
        assert!(matches!(
            VectorField::new(positions, vectors),
            Err(WarpviewError::ShapeMismatch { .. })
        ));

        let positions = Array2::zeros((0, 2));
        let vectors = Array2::zeros((0, 2));
        assert!(matches!(
            VectorField::new(positions, vectors),
            Err(WarpviewError::EmptyField)
        ));
    }

    #[test]
    fn key_length_is_rms_of_nonzero_vectors() {
        let positions = array![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
        let vectors = array![[3.0, 4.0], [0.0, 0.0], [3.0, 4.0]];
        let field = VectorField::new(positions, vectors).unwrap();
        // Both non-zero vectors have magnitude 5, the zero one is skipped.
        assert!((field.key_length().unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn key_length_none_for_zero_field() {
        let positions = array![[0.0, 0.0], [1.0, 0.0]];
        let vectors = Array2::zeros((2, 2));
        let field = VectorField::new(positions, vectors).unwrap();
        assert_eq!(field.key_length(), None);
    }

    #[test]
    fn table_projection() {
        let positions = array![[1.0, 2.0]];
        let vectors = array![[0.5, -0.5]];
        let field = VectorField::new(positions, vectors).unwrap();
        assert_eq!(field.table_row(0), [1.0, 2.0, 0.5, -0.5]);
        assert_eq!(TABLE_HEADERS, ["x", "y", "dx", "dy"]);
    }

    #[test]
    fn bounds_cover_arrow_tips() {
        let positions = array![[0.0, 0.0], [2.0, 2.0]];
        let vectors = array![[-1.0, 0.0], [0.0, 3.0]];
        let field = VectorField::new(positions, vectors).unwrap();
        let bounds = field.bounds(2.0);
        assert_eq!(bounds.x_min, -2.0);
        assert_eq!(bounds.x_max, 2.0);
        assert_eq!(bounds.y_max, 8.0);
    }

    #[test]
    fn grid_layout_of_regular_field() {
        let field = shifted_grid();
        let layout = field.grid_layout(0.001).unwrap();
        assert_eq!(layout.shape(), (3, 4));
        assert_eq!(layout.x.step, 1.0);
        assert_eq!(layout.y.step, 2.0);
    }

    #[test]
    fn to_grids_reshapes_and_displaces() {
        let field = shifted_grid();
        let grids = field.to_grids(0.5, 0.001).unwrap();
        assert_eq!(grids.x.dim(), (3, 4));
        // Undisplaced corners reproduce the meshgrid.
        assert_eq!(grids.x[[0, 3]], 3.0);
        assert_eq!(grids.y[[2, 0]], 4.0);
        // Displacement (1, 0) scaled by 0.5.
        assert_eq!(grids.x_displaced[[1, 1]], 1.5);
        assert_eq!(grids.y_displaced[[1, 1]], 2.0);
    }

    #[test]
    fn duplicate_node_rejected() {
        let positions = array![[0.0, 0.0], [0.1, 0.0], [5.0, 0.0], [5.0, 5.0]];
        let vectors = Array2::zeros((4, 2));
        let field = VectorField::new(positions, vectors).unwrap();
        let err = field.to_grids(1.0, 0.001).unwrap_err();
        assert!(matches!(err, WarpviewError::IncompleteGrid(_)));
    }
}
