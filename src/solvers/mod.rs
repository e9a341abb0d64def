//! Regression solvers.

mod least_squares;
mod traits;

pub use least_squares::{
    least_squares, FittedLeastSquares, LeastSquaresRegressor, LeastSquaresRegressorBuilder,
};
pub use traits::{FittedRegressor, Regressor};
