//! Belsley-Kuh-Welsch collinearity diagnostics.

use crate::core::StatsError;
use faer::{Col, Mat};

/// Belsley collinearity diagnostics.
///
/// Not implemented: the output of these diagnostics has not been defined for
/// this crate, so every call fails with [`StatsError::NotImplemented`]. Use
/// [`get_vif`](crate::diagnostics::get_vif) for multicollinearity screening.
pub fn get_belsley(_x: &Mat<f64>) -> Result<Col<f64>, StatsError> {
    Err(StatsError::NotImplemented("Belsley collinearity diagnostics"))
}
