//! Regression diagnostics (residuals, VIF).
//!
//! - **Residuals**: `y - x * w` for the least-squares weights `w`
//! - **VIF**: Variance Inflation Factor for multicollinearity detection
//!
//! # Example
//!
//! ```rust,ignore
//! use linstat::diagnostics::{get_vif, high_vif_predictors, regression_residuals};
//!
//! let residuals = regression_residuals(&x, &y)?;
//! let vif = get_vif(&x)?;
//! let collinear = high_vif_predictors(&vif, 5.0);
//! ```

mod belsley;
mod residuals;
mod vif;

pub use belsley::get_belsley;
pub use residuals::{regression_residuals, regression_residuals_with};
pub use vif::{get_vif, get_vif_with, high_vif_predictors};
