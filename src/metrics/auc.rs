//! Area under the ROC curve for binary classifiers.
//!
//! Predictions are ranked by score and the ROC staircase is swept from the
//! highest score down. Each negative observation adds a horizontal step of
//! width `1 / number_negative` whose height is the true positive rate reached
//! so far, so the accumulated area is exact for the staircase and needs no
//! interpolation.

use crate::core::{AucOptions, AucOptionsBuilder, DegenerateLabels, RocCurve, StatsError};
use log::{debug, trace};
use std::cmp::Ordering;

/// ROC AUC calculator.
///
/// # Example
///
/// ```rust,ignore
/// use linstat::metrics::AucCalculator;
///
/// let curve = AucCalculator::builder()
///     .build()
///     .compute(&[0, 0, 1, 1], &[0.0, 0.6, 0.4, 0.8])?;
///
/// assert_eq!(curve.auc, 0.75);
/// assert_eq!(curve.fpr, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
/// assert_eq!(curve.tpr, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AucCalculator {
    options: AucOptions,
}

impl AucCalculator {
    /// Create a new calculator with the given options.
    pub fn new(options: AucOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the calculator.
    pub fn builder() -> AucCalculatorBuilder {
        AucCalculatorBuilder::default()
    }

    /// Get the options used by this calculator.
    pub fn options(&self) -> &AucOptions {
        &self.options
    }

    /// Compute the AUC together with the ROC curve points.
    ///
    /// # Arguments
    /// * `labels` - Class labels, each exactly 0 or 1
    /// * `probabilities` - Scores of the "1" class; any real range, only the
    ///   ranking matters
    ///
    /// Observations with equal scores are ordered by label descending, so
    /// tied positives are counted before tied negatives.
    pub fn compute<L>(&self, labels: &[L], probabilities: &[f64]) -> Result<RocCurve, StatsError>
    where
        L: Copy + TryInto<i64>,
    {
        if labels.len() != probabilities.len() {
            return Err(StatsError::LengthMismatch {
                labels: labels.len(),
                probabilities: probabilities.len(),
            });
        }

        let (number_positive, number_negative) = count_classes(labels)?;

        if let Some(index) = probabilities.iter().position(|p| p.is_nan()) {
            return Err(StatsError::InvalidProbability { index });
        }

        if (number_positive == 0 || number_negative == 0)
            && self.options.degenerate_labels == DegenerateLabels::Reject
        {
            return Err(StatsError::DegenerateInput {
                positives: number_positive,
                negatives: number_negative,
            });
        }

        debug!(
            "computing AUC over {} observations ({} positive, {} negative)",
            labels.len(),
            number_positive,
            number_negative
        );

        let mut scored: Vec<(f64, bool)> = probabilities
            .iter()
            .copied()
            .zip(labels.iter().map(|&label| label_value(label) == Some(1)))
            .collect();
        scored.sort_by(descending_score_then_label);

        let n = scored.len();
        let mut fpr = Vec::with_capacity(n + 1);
        let mut tpr = Vec::with_capacity(n + 1);
        fpr.push(0.0);
        tpr.push(0.0);

        // A zero count only yields an infinite step for a class that never occurs.
        let positive_step = 1.0 / number_positive as f64;
        let negative_step = 1.0 / number_negative as f64;
        let negatives = number_negative as f64;

        let mut false_rate = 0.0;
        let mut true_rate = 0.0;
        let mut auc = 0.0;

        for &(_, positive) in &scored {
            if positive {
                true_rate += positive_step;
            } else {
                false_rate += negative_step;
                auc += true_rate / negatives;
            }
            fpr.push(false_rate);
            tpr.push(true_rate);
        }

        trace!(
            "ROC sweep finished at ({}, {}), auc = {}",
            false_rate,
            true_rate,
            auc
        );

        Ok(RocCurve {
            auc,
            fpr,
            tpr,
            number_positive,
            number_negative,
        })
    }
}

/// Compute the ROC AUC with default options.
///
/// Returns the area together with the false and true positive rates of every
/// step of the curve. Fails on mismatched lengths, labels outside {0, 1}, NaN
/// scores, and label sets missing one of the two classes.
pub fn get_auc<L>(labels: &[L], probabilities: &[f64]) -> Result<RocCurve, StatsError>
where
    L: Copy + TryInto<i64>,
{
    AucCalculator::default().compute(labels, probabilities)
}

/// Count positives and negatives, rejecting any label outside {0, 1}.
fn count_classes<L>(labels: &[L]) -> Result<(usize, usize), StatsError>
where
    L: Copy + TryInto<i64>,
{
    let mut positives = 0;
    let mut negatives = 0;

    for (index, &label) in labels.iter().enumerate() {
        match label_value(label) {
            Some(1) => positives += 1,
            Some(0) => negatives += 1,
            value => {
                return Err(StatsError::InvalidLabel {
                    index,
                    value: value.unwrap_or(i64::MAX),
                })
            }
        }
    }

    Ok((positives, negatives))
}

/// A label as `i64`, or `None` when it does not fit.
fn label_value<L: TryInto<i64>>(label: L) -> Option<i64> {
    label.try_into().ok()
}

/// Score descending, then label descending.
fn descending_score_then_label(a: &(f64, bool), b: &(f64, bool)) -> Ordering {
    // NaN scores are rejected before sorting, so partial_cmp is total here.
    b.0.partial_cmp(&a.0)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.1.cmp(&a.1))
}

/// Builder for [`AucCalculator`].
#[derive(Debug, Clone, Default)]
pub struct AucCalculatorBuilder {
    builder: AucOptionsBuilder,
}

impl AucCalculatorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handling of single-class label sets.
    pub fn degenerate_labels(mut self, policy: DegenerateLabels) -> Self {
        self.builder = self.builder.degenerate_labels(policy);
        self
    }

    /// Build the calculator.
    pub fn build(self) -> AucCalculator {
        AucCalculator::new(self.builder.build())
    }
}
