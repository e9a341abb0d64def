//! Shared helpers.

mod matrix;
mod target;

pub use matrix::{column, drop_column, matrix_inverse, sum_of_squares, sum_of_squares_about_mean};
pub use target::TargetVector;
