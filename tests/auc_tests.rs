//! ROC AUC tests.

mod common;

use approx::assert_relative_eq;
use linstat::core::{DegenerateLabels, StatsError};
use linstat::metrics::{get_auc, AucCalculator};
use proptest::prelude::*;

// ============================================================================
// Reference Behaviour
// ============================================================================

#[test]
fn test_reference_curve() {
    common::init_test_logger();

    let (auc, fpr, tpr) = get_auc(&[0, 0, 1, 1], &[0.0, 0.6, 0.4, 0.8])
        .expect("valid input")
        .into_parts();

    assert_eq!(auc, 0.75);
    assert_eq!(fpr, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
    assert_eq!(tpr, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
}

#[test]
fn test_label_outside_binary_set() {
    let result = get_auc(&[-1, 1], &[0.0, 0.0]);
    assert!(matches!(result, Err(StatsError::InvalidLabel { .. })));

    let result = get_auc(&[0u8, 2, 1], &[0.1, 0.2, 0.3]);
    assert_eq!(result.unwrap_err(), StatsError::InvalidLabel { index: 1, value: 2 });
}

#[test]
fn test_lists_of_different_lengths() {
    let result = get_auc(&[0, 1], &[0.0, 0.0, 1.0]);
    assert!(matches!(result, Err(StatsError::LengthMismatch { .. })));
}

#[test]
fn test_length_checked_before_labels() {
    let result = get_auc(&[5, 1], &[0.0]);
    assert!(matches!(result, Err(StatsError::LengthMismatch { .. })));
}

#[test]
fn test_degenerate_policy() {
    let labels = [0, 0, 0];
    let probabilities = [0.3, 0.2, 0.1];

    assert_eq!(
        get_auc(&labels, &probabilities).unwrap_err(),
        StatsError::DegenerateInput {
            positives: 0,
            negatives: 3
        }
    );

    let curve = AucCalculator::builder()
        .degenerate_labels(DegenerateLabels::Compute)
        .build()
        .compute(&labels, &probabilities)
        .expect("degenerate input allowed");
    assert_eq!(curve.auc, 0.0);
    assert!(curve.auc.is_finite());
    assert!(curve.tpr.iter().all(|&t| t == 0.0));
    assert_relative_eq!(*curve.fpr.last().expect("non-empty"), 1.0, epsilon = 1e-12);
}

// ============================================================================
// Ranking Properties
// ============================================================================

#[test]
fn test_perfect_classifier() {
    let labels = [0, 1, 0, 1, 1, 0, 0];
    let probabilities = [0.1, 0.9, 0.2, 0.8, 0.95, 0.05, 0.3];

    let curve = get_auc(&labels, &probabilities).expect("valid input");
    assert_relative_eq!(curve.auc, 1.0, epsilon = 1e-12);
}

#[test]
fn test_inverted_classifier() {
    let labels = [1, 0, 1, 0];
    let probabilities = [0.1, 0.9, 0.2, 0.8];

    let curve = get_auc(&labels, &probabilities).expect("valid input");
    assert_eq!(curve.auc, 0.0);
}

#[test]
fn test_all_tied_scores_favour_positives() {
    let labels = [0, 1, 0, 1];
    let probabilities = [0.5; 4];

    let curve = get_auc(&labels, &probabilities).expect("valid input");
    assert_eq!(curve.auc, 1.0);
    assert_eq!(curve.tpr, vec![0.0, 0.5, 1.0, 1.0, 1.0]);
}

#[test]
fn test_matches_pairwise_count() {
    let (labels, probabilities) = common::generate_scored_labels(500, 7);

    let curve = get_auc(&labels, &probabilities).expect("valid input");
    let expected = common::pairwise_auc(&labels, &probabilities);

    assert_relative_eq!(curve.auc, expected, epsilon = 1e-10);
}

#[test]
fn test_flipping_labels_complements_auc() {
    let (labels, probabilities) = common::generate_scored_labels(300, 11);
    let flipped: Vec<i32> = labels.iter().map(|&l| 1 - l).collect();

    let auc = get_auc(&labels, &probabilities).expect("valid input").auc;
    let flipped_auc = get_auc(&flipped, &probabilities).expect("valid input").auc;

    assert_relative_eq!(auc + flipped_auc, 1.0, epsilon = 1e-10);
}

#[test]
fn test_random_scores_average_half() {
    let trials = 200;
    let total: f64 = (0..trials)
        .map(|seed| {
            let (labels, probabilities) = common::generate_scored_labels(200, seed + 1);
            get_auc(&labels, &probabilities).expect("valid input").auc
        })
        .sum();

    let mean = total / trials as f64;
    assert!((mean - 0.5).abs() < 0.03, "mean AUC {} should be near 0.5", mean);
}

// ============================================================================
// Property Tests
// ============================================================================

fn scored_labels() -> impl Strategy<Value = (Vec<i32>, Vec<f64>)> {
    prop::collection::vec((0i32..2, -1e6f64..1e6), 2..64).prop_map(|pairs| {
        let mut labels: Vec<i32> = pairs.iter().map(|&(l, _)| l).collect();
        let probabilities = pairs.iter().map(|&(_, p)| p).collect();
        labels[0] = 0;
        let last = labels.len() - 1;
        labels[last] = 1;
        (labels, probabilities)
    })
}

/// Replace every score by the rank of its value among the distinct scores.
fn dense_ranks(probabilities: &[f64]) -> Vec<f64> {
    let mut distinct = probabilities.to_vec();
    distinct.sort_by(|a, b| a.total_cmp(b));
    distinct.dedup();
    probabilities
        .iter()
        .map(|p| distinct.partition_point(|d| d < p) as f64)
        .collect()
}

proptest! {
    #[test]
    fn prop_curve_shape((labels, probabilities) in scored_labels()) {
        let curve = get_auc(&labels, &probabilities).expect("both classes present");
        let n = labels.len();

        prop_assert_eq!(curve.fpr.len(), n + 1);
        prop_assert_eq!(curve.tpr.len(), n + 1);
        prop_assert_eq!(curve.fpr[0], 0.0);
        prop_assert_eq!(curve.tpr[0], 0.0);
        prop_assert!((curve.fpr[n] - 1.0).abs() < 1e-9);
        prop_assert!((curve.tpr[n] - 1.0).abs() < 1e-9);
        prop_assert!(curve.fpr.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(curve.tpr.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!((0.0..=1.0 + 1e-9).contains(&curve.auc));
    }

    #[test]
    fn prop_invariant_to_monotone_transform((labels, probabilities) in scored_labels()) {
        let auc = get_auc(&labels, &probabilities).expect("both classes present").auc;

        let scaled: Vec<f64> = probabilities.iter().map(|p| p * 2.0).collect();
        let ranked = dense_ranks(&probabilities);

        prop_assert_eq!(get_auc(&labels, &scaled).expect("valid").auc, auc);
        prop_assert_eq!(get_auc(&labels, &ranked).expect("valid").auc, auc);
    }
}
