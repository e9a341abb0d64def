//! Variance Inflation Factor (VIF) for multicollinearity detection.

use crate::core::StatsError;
use crate::diagnostics::residuals::regression_residuals_with;
use crate::solvers::LeastSquaresRegressor;
use crate::utils::{column, drop_column, sum_of_squares, sum_of_squares_about_mean};
use faer::{Col, Mat};
use log::debug;

/// Compute the Variance Inflation Factor for each feature column.
///
/// For column j:
///
/// VIF_j = Σ (x_j - mean(x_j))² / Σ e_j²
///
/// where e_j are the residuals of regressing x_j on all other columns. The
/// regression has no intercept, so for columns with a non-zero mean the value
/// can fall below 1. For centred columns it equals 1 / (1 - R²_j).
///
/// # Interpretation
/// - VIF ≈ 1: No correlation with other predictors
/// - VIF > 5: Moderate multicollinearity (some sources say > 10)
/// - VIF > 10: High multicollinearity
///
/// # Errors
/// - [`StatsError::TooFewFeatures`] with fewer than 2 columns
/// - [`StatsError::SingularMatrix`] when the other columns are linearly dependent
pub fn get_vif(x: &Mat<f64>) -> Result<Col<f64>, StatsError> {
    get_vif_with(&LeastSquaresRegressor::default(), x)
}

/// Compute the Variance Inflation Factor with a configured regressor.
pub fn get_vif_with(regressor: &LeastSquaresRegressor, x: &Mat<f64>) -> Result<Col<f64>, StatsError> {
    let p = x.ncols();

    if p < 2 {
        return Err(StatsError::TooFewFeatures(p));
    }

    let mut vif = Col::zeros(p);

    for j in 0..p {
        let x_other = drop_column(x, j);
        let x_j = column(x, j);

        let residuals = regression_residuals_with(regressor, &x_other, &x_j)?;
        vif[j] = sum_of_squares_about_mean(&x_j) / sum_of_squares(&residuals);

        debug!("VIF[{}] = {}", j, vif[j]);
    }

    Ok(vif)
}

/// Identify predictors with high multicollinearity.
///
/// Returns indices of predictors with VIF > threshold.
/// Common threshold: 5 or 10.
pub fn high_vif_predictors(vif: &Col<f64>, threshold: f64) -> Vec<usize> {
    (0..vif.nrows()).filter(|&j| vif[j] > threshold).collect()
}
