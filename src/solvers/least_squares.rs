//! Ordinary least squares through the normal equations.

use crate::core::{OptionsError, RegressionOptions, RegressionOptionsBuilder, StatsError};
use crate::solvers::traits::{FittedRegressor, Regressor};
use crate::utils::{matrix_inverse, TargetVector};
use faer::{Col, Mat};
use log::debug;

/// Least-squares estimator for `y = x * w + eps`.
///
/// Solves the normal equations in closed form, `w = (x'x)⁻¹ x'y`. No intercept
/// column is added and there is no regularisation: a singular `x'x` is an
/// error, not a fallback to a pseudo-inverse.
///
/// # Example
///
/// ```rust,ignore
/// use linstat::solvers::{FittedRegressor, LeastSquaresRegressor, Regressor};
/// use faer::{Col, Mat};
///
/// let x = Mat::from_fn(10, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
/// let y = Col::from_fn(10, |i| 1.0 + 2.0 * i as f64);
///
/// let fitted = LeastSquaresRegressor::builder().build()?.fit(&x, &y)?;
/// println!("weights: {:?}", fitted.weights());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeastSquaresRegressor {
    options: RegressionOptions,
}

impl LeastSquaresRegressor {
    /// Create a new regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> LeastSquaresRegressorBuilder {
        LeastSquaresRegressorBuilder::default()
    }

    /// Get the options used by this regressor.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Fit against a target in any orientation accepted by [`TargetVector`].
    pub fn fit_target<Y>(&self, x: &Mat<f64>, y: &Y) -> Result<FittedLeastSquares, StatsError>
    where
        Y: TargetVector + ?Sized,
    {
        let y = y.to_column()?;
        self.fit(x, &y)
    }
}

impl Regressor for LeastSquaresRegressor {
    type Fitted = FittedLeastSquares;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, StatsError> {
        self.options.validate()?;

        if x.nrows() != y.nrows() {
            return Err(StatsError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }

        if x.nrows() == 0 {
            return Err(StatsError::InsufficientObservations { needed: 1, got: 0 });
        }

        let xtx = x.transpose() * x;
        let xtx_inverse = matrix_inverse(&xtx, self.options.singular_tolerance)?;
        let xty = x.transpose() * y;
        let weights = &xtx_inverse * &xty;

        let fitted_values = x * &weights;
        let residuals = Col::from_fn(y.nrows(), |i| y[i] - fitted_values[i]);

        debug!(
            "least squares fit: {} observations, {} features",
            x.nrows(),
            x.ncols()
        );

        Ok(FittedLeastSquares { weights, residuals })
    }
}

/// A fitted least-squares model.
#[derive(Debug, Clone)]
pub struct FittedLeastSquares {
    weights: Col<f64>,
    residuals: Col<f64>,
}

impl FittedRegressor for FittedLeastSquares {
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        x * &self.weights
    }

    fn weights(&self) -> &Col<f64> {
        &self.weights
    }

    fn residuals(&self) -> &Col<f64> {
        &self.residuals
    }
}

impl FittedLeastSquares {
    /// Consume the model, keeping only the weights.
    pub fn into_weights(self) -> Col<f64> {
        self.weights
    }

    /// Consume the model, keeping only the residuals.
    pub fn into_residuals(self) -> Col<f64> {
        self.residuals
    }
}

/// Builder for [`LeastSquaresRegressor`].
#[derive(Debug, Clone, Default)]
pub struct LeastSquaresRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl LeastSquaresRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the singular-pivot tolerance for inverting `x'x`.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.singular_tolerance(tol);
        self
    }

    /// Build and validate the regressor.
    pub fn build(self) -> Result<LeastSquaresRegressor, OptionsError> {
        Ok(LeastSquaresRegressor::new(self.builder.build()?))
    }
}

/// Least-squares weights for `y = x * w + eps`.
///
/// `x` has shape (l, n); `y` is a vector of length l given as a column or a
/// row. Returns the n weights `(x'x)⁻¹ x'y`.
pub fn least_squares<Y>(x: &Mat<f64>, y: &Y) -> Result<Col<f64>, StatsError>
where
    Y: TargetVector + ?Sized,
{
    LeastSquaresRegressor::default()
        .fit_target(x, y)
        .map(FittedLeastSquares::into_weights)
}
