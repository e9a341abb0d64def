//! Matrix utility functions.

use crate::core::StatsError;
use faer::{Col, Mat, MatRef};
use log::warn;
use statrs::statistics::Statistics;

/// Copy column `j` of a matrix into a vector.
pub fn column(x: &Mat<f64>, j: usize) -> Col<f64> {
    Col::from_fn(x.nrows(), |i| x[(i, j)])
}

/// Copy a matrix without column `j`.
pub fn drop_column(x: &Mat<f64>, j: usize) -> Mat<f64> {
    let kept = x.ncols().saturating_sub(1);
    Mat::from_fn(x.nrows(), kept, |i, k| x[(i, if k < j { k } else { k + 1 })])
}

/// Sum of squares.
pub fn sum_of_squares(v: &Col<f64>) -> f64 {
    v.iter().map(|&vi| vi * vi).sum()
}

/// Total sum of squares about the mean.
pub fn sum_of_squares_about_mean(v: &Col<f64>) -> f64 {
    let mean = v.iter().mean();
    v.iter().map(|&vi| (vi - mean).powi(2)).sum()
}

/// Inverse of a square matrix using QR decomposition.
///
/// With `matrix = Q * R`, the inverse is `R⁻¹ * Q'`. Fails with
/// [`StatsError::SingularMatrix`] when a diagonal entry of R is at most
/// `tolerance` times the largest one, so the check does not depend on the
/// scale of the data.
pub fn matrix_inverse(matrix: &Mat<f64>, tolerance: f64) -> Result<Mat<f64>, StatsError> {
    let n = matrix.nrows();

    let qr = matrix.qr();
    let q = qr.compute_Q();
    let r = qr.R();

    let largest = (0..n).map(|i| r[(i, i)].abs()).fold(0.0, f64::max);
    if let Some(i) = (0..n).find(|&i| r[(i, i)].abs() <= tolerance * largest) {
        warn!(
            "singular matrix: |R[{i},{i}]| = {:e} against largest pivot {:e} (relative tolerance {:e})",
            r[(i, i)].abs(),
            largest,
            tolerance
        );
        return Err(StatsError::SingularMatrix);
    }

    let r_inv = upper_triangular_inverse(r);
    Ok(r_inv.as_ref() * q.transpose())
}

/// Inverse of a non-singular upper triangular matrix.
///
/// The inverse is upper triangular too; column `c` is filled from the
/// diagonal upwards.
fn upper_triangular_inverse(r: MatRef<'_, f64>) -> Mat<f64> {
    let n = r.nrows();
    let mut inv = Mat::zeros(n, n);

    for c in 0..n {
        inv[(c, c)] = 1.0 / r[(c, c)];
        for i in (0..c).rev() {
            let dot: f64 = ((i + 1)..=c).map(|k| r[(i, k)] * inv[(k, c)]).sum();
            inv[(i, c)] = -dot / r[(i, i)];
        }
    }

    inv
}
