//! Orientation normalisation for regression targets.
//!
//! A target may arrive as a column, a row, a single-row or single-column
//! matrix, or a plain slice. Every solver works on a column, so the target is
//! reshaped explicitly before any algebra.

use crate::core::StatsError;
use faer::{Col, Mat, Row};

/// A value that can be used as a regression target.
///
/// Normalisation is idempotent: converting a column yields the same column.
pub trait TargetVector {
    /// The target as a column vector.
    fn to_column(&self) -> Result<Col<f64>, StatsError>;
}

impl TargetVector for Col<f64> {
    fn to_column(&self) -> Result<Col<f64>, StatsError> {
        Ok(self.clone())
    }
}

impl TargetVector for Row<f64> {
    fn to_column(&self) -> Result<Col<f64>, StatsError> {
        Ok(Col::from_fn(self.ncols(), |i| self[i]))
    }
}

/// Accepts shape `l x 1` as-is and transposes shape `1 x l`.
impl TargetVector for Mat<f64> {
    fn to_column(&self) -> Result<Col<f64>, StatsError> {
        if self.ncols() == 1 {
            Ok(Col::from_fn(self.nrows(), |i| self[(i, 0)]))
        } else if self.nrows() == 1 {
            Ok(Col::from_fn(self.ncols(), |j| self[(0, j)]))
        } else {
            Err(StatsError::TargetShape {
                rows: self.nrows(),
                cols: self.ncols(),
            })
        }
    }
}

impl TargetVector for [f64] {
    fn to_column(&self) -> Result<Col<f64>, StatsError> {
        Ok(Col::from_fn(self.len(), |i| self[i]))
    }
}

impl TargetVector for Vec<f64> {
    fn to_column(&self) -> Result<Col<f64>, StatsError> {
        self.as_slice().to_column()
    }
}
