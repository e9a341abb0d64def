//! Error taxonomy shared by every computation in the crate.

use crate::core::OptionsError;
use thiserror::Error;

/// Errors that can occur while computing a statistic.
///
/// Every error is terminal for the call that produced it; nothing is retried
/// and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("lists has different lengths: {labels} labels but {probabilities} probabilities")]
    LengthMismatch { labels: usize, probabilities: usize },

    /// `value` is `i64::MAX` for labels that do not fit in an `i64`.
    #[error("labels contains not only {{0, 1}}: found {value} at position {index}")]
    InvalidLabel { index: usize, value: i64 },

    #[error("probability at position {index} is NaN and cannot be ranked")]
    InvalidProbability { index: usize },

    #[error("degenerate labels: {positives} positive and {negatives} negative, need at least one of each")]
    DegenerateInput { positives: usize, negatives: usize },

    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("target must be a row or column vector, got shape {rows}x{cols}")]
    TargetShape { rows: usize, cols: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("matrix is singular or nearly singular")]
    SingularMatrix,

    #[error("VIF needs at least 2 feature columns, got {0}")]
    TooFewFeatures(usize),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}
