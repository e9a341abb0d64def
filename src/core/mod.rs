//! Core types: errors, options and result containers.

mod error;
mod options;
mod roc;

pub use error::StatsError;
pub use options::{
    AucOptions, AucOptionsBuilder, DegenerateLabels, OptionsError, RegressionOptions,
    RegressionOptionsBuilder,
};
pub use roc::RocCurve;
