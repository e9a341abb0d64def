//! Core traits for regression estimators.

use crate::core::StatsError;
use faer::{Col, Mat};

/// A regression estimator that can be fit to data.
///
/// Fitting returns a fitted model that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features)
    /// * `y` - Target vector of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, StatsError>;
}

/// A fitted regression model.
pub trait FittedRegressor {
    /// Make predictions on new data.
    fn predict(&self, x: &Mat<f64>) -> Col<f64>;

    /// The fitted weights, one per feature column.
    fn weights(&self) -> &Col<f64>;

    /// Residuals `y - x * w` on the training data.
    fn residuals(&self) -> &Col<f64>;

    /// Residual sum of squares on the training data.
    fn rss(&self) -> f64 {
        self.residuals().iter().map(|&r| r * r).sum()
    }
}
