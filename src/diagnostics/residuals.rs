//! Regression residuals.

use crate::core::StatsError;
use crate::solvers::{FittedLeastSquares, LeastSquaresRegressor};
use crate::utils::TargetVector;
use faer::{Col, Mat};

/// Compute regression residuals `y - x * (x'x)⁻¹ x'y`.
///
/// `y` may be given as a row or a column; the residuals are always a column
/// of length `x.nrows()`. They are orthogonal to every column of `x`.
pub fn regression_residuals<Y>(x: &Mat<f64>, y: &Y) -> Result<Col<f64>, StatsError>
where
    Y: TargetVector + ?Sized,
{
    regression_residuals_with(&LeastSquaresRegressor::default(), x, y)
}

/// Compute regression residuals with a configured regressor.
pub fn regression_residuals_with<Y>(
    regressor: &LeastSquaresRegressor,
    x: &Mat<f64>,
    y: &Y,
) -> Result<Col<f64>, StatsError>
where
    Y: TargetVector + ?Sized,
{
    regressor
        .fit_target(x, y)
        .map(FittedLeastSquares::into_residuals)
}
