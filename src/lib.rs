//! Classical statistics for model evaluation and regression diagnostics.
//!
//! This library provides:
//!
//! - ROC AUC with the exact false/true positive rate curve of a binary classifier
//! - Ordinary least-squares weights via the normal equations
//! - Regression residuals
//! - Variance Inflation Factors for multicollinearity diagnosis
//!
//! Every computation is a pure function of its inputs; nothing is cached or
//! shared between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use linstat::prelude::*;
//!
//! let (auc, fpr, tpr) = get_auc(&[0, 0, 1, 1], &[0.0, 0.6, 0.4, 0.8])?.into_parts();
//! assert_eq!(auc, 0.75);
//!
//! let vif = get_vif(&x)?;
//! println!("VIF = {:?}", vif);
//! ```

pub mod core;
pub mod diagnostics;
pub mod metrics;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        AucOptions, DegenerateLabels, OptionsError, RegressionOptions, RocCurve, StatsError,
    };
    pub use crate::diagnostics::{
        get_belsley, get_vif, get_vif_with, high_vif_predictors, regression_residuals,
        regression_residuals_with,
    };
    pub use crate::metrics::{get_auc, AucCalculator};
    pub use crate::solvers::{
        least_squares, FittedLeastSquares, FittedRegressor, LeastSquaresRegressor, Regressor,
    };
    pub use crate::utils::TargetVector;
}

pub use crate::core::{RocCurve, StatsError};
pub use crate::diagnostics::{get_belsley, get_vif, regression_residuals};
pub use crate::metrics::get_auc;
pub use crate::solvers::least_squares;
