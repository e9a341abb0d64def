//! Configuration for AUC and regression computations.

use thiserror::Error;

/// What to do when the labels contain only one class.
///
/// The rate normalisation divides by the number of positives and the number of
/// negatives, so a single-class input has no well-defined ROC curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateLabels {
    /// Fail with [`StatsError::DegenerateInput`](crate::core::StatsError::DegenerateInput) (default).
    #[default]
    Reject,
    /// Run the sweep anyway.
    ///
    /// The division by the missing class count is never reached, so the result
    /// is finite: `auc = 0` and the curve stays at 0 along the missing axis.
    Compute,
}

/// Options for [`AucCalculator`](crate::metrics::AucCalculator).
#[derive(Debug, Clone, Default)]
pub struct AucOptions {
    /// Handling of single-class label sets (default: reject).
    pub degenerate_labels: DegenerateLabels,
}

impl AucOptions {
    /// Create a new builder for AUC options.
    pub fn builder() -> AucOptionsBuilder {
        AucOptionsBuilder::default()
    }
}

/// Builder for [`AucOptions`].
#[derive(Debug, Clone, Default)]
pub struct AucOptionsBuilder {
    options: AucOptions,
}

impl AucOptionsBuilder {
    /// Set the handling of single-class label sets.
    pub fn degenerate_labels(mut self, policy: DegenerateLabels) -> Self {
        self.options.degenerate_labels = policy;
        self
    }

    /// Build the options.
    pub fn build(self) -> AucOptions {
        self.options
    }
}

/// Configuration options for least-squares regression.
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// A pivot of the QR factorisation of X'X at most this fraction of the
    /// largest pivot makes the matrix singular (default: 1e-12). The test is
    /// relative, so rescaling the data does not change the outcome.
    pub singular_tolerance: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            singular_tolerance: 1e-12,
        }
    }
}

/// Errors that can occur when validating options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("tolerance must be in (0, 1), got {0}")]
    InvalidTolerance(f64),
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.singular_tolerance > 0.0 && self.singular_tolerance < 1.0) {
            return Err(OptionsError::InvalidTolerance(self.singular_tolerance));
        }
        Ok(())
    }
}

/// Builder for [`RegressionOptions`].
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Set the singular-pivot tolerance.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.options.singular_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}
