//! Classifier evaluation metrics.

mod auc;

pub use auc::{get_auc, AucCalculator, AucCalculatorBuilder};
