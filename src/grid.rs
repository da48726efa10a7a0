//! Regular grid estimation.
//!
//! A grid is a sequence of evenly spaced points, overspecified by the tuple
//! `(start, end, step, count)` with `end = start + (count - 1) * step`.
//! Sampled positions rarely come in sorted and are often polluted by noise
//! or near-duplicates, so [`estimate_grid`] reconstructs the parameters from
//! an unordered slice of axis values.

use crate::error::{Result, WarpviewError};
use ndarray::Array2;

/// Parameters of a regular 1-D grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// First grid point.
    pub start: f64,
    /// Last grid point.
    pub end: f64,
    /// Spacing between consecutive points (0.0 for a single point).
    pub step: f64,
    /// Total number of points.
    pub count: usize,
}

impl GridParams {
    /// Regenerate the axis points described by these parameters.
    pub fn points(&self) -> Vec<f64> {
        (0..self.count)
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }

    /// Index of the grid node nearest to `value`.
    ///
    /// Returns `None` when the value lands outside the grid extent
    /// (beyond half a step past either end).
    pub fn nearest_index(&self, value: f64) -> Option<usize> {
        if self.count == 1 {
            let tol = 0.5 * (self.end - self.start).abs().max(f64::EPSILON);
            return ((value - self.start).abs() <= tol).then_some(0);
        }
        let idx = ((value - self.start) / self.step).round();
        if idx < 0.0 || idx >= self.count as f64 {
            return None;
        }
        Some(idx as usize)
    }
}

/// Estimate grid parameters from unordered axis samples.
///
/// The samples may be irregularly spaced due to noise. A noise tolerance of
/// `tolerance_fraction * (max - min) / n_differences` separates real grid
/// steps from near-duplicates: consecutive differences at or below the
/// tolerance are discarded, and the step is the single surviving unique
/// difference, or the median of the survivors when several remain. The
/// median tolerates a minority of irregular gaps (missing samples).
///
/// `axis` only labels error messages.
///
/// # Errors
///
/// [`WarpviewError::EmptyField`] for an empty slice, and
/// [`WarpviewError::DegenerateGrid`] when every difference falls within the
/// tolerance, which leaves nothing to estimate a step from.
pub fn estimate_grid(
    samples: &[f64],
    tolerance_fraction: f64,
    axis: &'static str,
) -> Result<GridParams> {
    if samples.is_empty() {
        return Err(WarpviewError::EmptyField);
    }

    let mut sorted: Vec<f64> = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    if min == max {
        return Ok(GridParams {
            start: min,
            end: min,
            step: 0.0,
            count: 1,
        });
    }

    let diffs: Vec<f64> = sorted.windows(2).map(|w| w[1] - w[0]).collect();
    let tolerance = tolerance_fraction * (max - min).abs() / diffs.len() as f64;

    let mut survivors: Vec<f64> = diffs.iter().copied().filter(|&d| d > tolerance).collect();
    if survivors.is_empty() {
        return Err(WarpviewError::DegenerateGrid {
            axis,
            count: diffs.len(),
            tolerance,
        });
    }

    survivors.sort_by(f64::total_cmp);
    let mut unique = survivors.clone();
    unique.dedup();

    let step = if unique.len() == 1 {
        unique[0]
    } else {
        median_of_sorted(&survivors)
    };

    let count = ((max - min) / step).round() as usize + 1;

    Ok(GridParams {
        start: min,
        end: max,
        step,
        count,
    })
}

/// Median of an already sorted, non-empty slice.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}

/// Build row-major coordinate matrices from two axes.
///
/// Returns `(x, y)` arrays of shape `(ys.len(), xs.len())`: `x` repeats the
/// x axis along every row, `y` repeats the y axis down every column.
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (Array2<f64>, Array2<f64>) {
    let (rows, cols) = (ys.len(), xs.len());
    let x = Array2::from_shape_fn((rows, cols), |(_, c)| xs[c]);
    let y = Array2::from_shape_fn((rows, cols), |(r, _)| ys[r]);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 0.001;

    #[test]
    fn regular_sequence() {
        let params = estimate_grid(&[0.0, 1.0, 2.0, 3.0, 4.0], TOL, "x").unwrap();
        assert_eq!(
            params,
            GridParams {
                start: 0.0,
                end: 4.0,
                step: 1.0,
                count: 5
            }
        );
    }

    #[test]
    fn order_invariant() {
        let sorted = estimate_grid(&[0.0, 1.0, 2.0, 3.0, 4.0], TOL, "x").unwrap();
        let shuffled = estimate_grid(&[3.0, 0.0, 4.0, 1.0, 2.0], TOL, "x").unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn constant_samples_collapse_to_single_point() {
        let params = estimate_grid(&[2.5, 2.5, 2.5], TOL, "x").unwrap();
        assert_eq!(
            params,
            GridParams {
                start: 2.5,
                end: 2.5,
                step: 0.0,
                count: 1
            }
        );
    }

    #[test]
    fn sub_tolerance_perturbation_is_absorbed() {
        // Tolerance here is 0.001 * 4 / 5 = 8e-4; the near-duplicate at
        // 2 + 1e-5 is treated as noise and the estimate is unchanged.
        let params = estimate_grid(&[0.0, 1.0, 2.0, 2.00001, 3.0, 4.0], TOL, "x").unwrap();
        assert_eq!(params.start, 0.0);
        assert_eq!(params.end, 4.0);
        assert_eq!(params.count, 5);
        assert!((params.step - 1.0).abs() < 1e-9);
    }

    #[test]
    fn perturbed_value_leaves_estimate_unchanged() {
        // 2.0 nudged by half the tolerance; the median of the remaining
        // differences still lands on the true step.
        let params = estimate_grid(&[0.0, 1.0, 2.0005, 3.0, 4.0], TOL, "x").unwrap();
        assert_eq!(
            params,
            GridParams {
                start: 0.0,
                end: 4.0,
                step: 1.0,
                count: 5
            }
        );
    }

    #[test]
    fn median_bridges_missing_samples() {
        // 3.0 missing: differences are [1, 1, 2, 1], median 1.
        let params = estimate_grid(&[0.0, 1.0, 2.0, 4.0, 5.0], TOL, "x").unwrap();
        assert_eq!(params.step, 1.0);
        assert_eq!(params.count, 6);
    }

    #[test]
    fn degenerate_input_is_an_error() {
        // With a huge tolerance fraction every difference is noise.
        let err = estimate_grid(&[0.0, 1.0, 2.0], 10.0, "y").unwrap_err();
        assert!(matches!(
            err,
            WarpviewError::DegenerateGrid { axis: "y", .. }
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            estimate_grid(&[], TOL, "x"),
            Err(WarpviewError::EmptyField)
        ));
    }

    #[test]
    fn points_round_trip() {
        let params = estimate_grid(&[0.0, 0.5, 1.0, 1.5], TOL, "x").unwrap();
        assert_eq!(params.points(), vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn nearest_index_snaps_and_rejects() {
        let params = GridParams {
            start: 0.0,
            end: 4.0,
            step: 1.0,
            count: 5,
        };
        assert_eq!(params.nearest_index(2.2), Some(2));
        assert_eq!(params.nearest_index(4.0), Some(4));
        assert_eq!(params.nearest_index(7.0), None);
    }

    #[test]
    fn meshgrid_layout() {
        let (x, y) = meshgrid(&[0.0, 1.0, 2.0], &[10.0, 20.0]);
        assert_eq!(x.shape(), &[2, 3]);
        assert_eq!(x[[0, 1]], 1.0);
        assert_eq!(x[[1, 1]], 1.0);
        assert_eq!(y[[0, 2]], 10.0);
        assert_eq!(y[[1, 0]], 20.0);
    }
}
