//! Common test utilities and data generators.
#![allow(dead_code)]

use env_logger::Builder;
use faer::{Col, Mat};
use log::LevelFilter;
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logger for tests.
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = Builder::new()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .try_init();
    });
}

/// Simple deterministic "random" numbers in [-1, 1) for reproducibility.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    }

    pub fn next_label(&mut self) -> i32 {
        if self.next_f64() >= 0.0 {
            1
        } else {
            0
        }
    }
}

/// Generate noiseless linear data: y = x * w_true, with w_true = [1, 2, ..., n_features].
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    let mut rng = Lcg::new(seed);

    let true_weights = Col::from_fn(n_features, |j| (j + 1) as f64);
    let mut x = Mat::zeros(n_samples, n_features);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let mut yi = 0.0;
        for j in 0..n_features {
            x[(i, j)] = rng.next_f64();
            yi += x[(i, j)] * true_weights[j];
        }
        y[i] = yi;
    }

    (x, y, true_weights)
}

/// Generate labels with both classes present and unrelated scores.
pub fn generate_scored_labels(n: usize, seed: u64) -> (Vec<i32>, Vec<f64>) {
    let mut rng = Lcg::new(seed);

    let mut labels: Vec<i32> = (0..n).map(|_| rng.next_label()).collect();
    labels[0] = 0;
    labels[n - 1] = 1;
    let probabilities = (0..n).map(|_| (rng.next_f64() + 1.0) / 2.0).collect();

    (labels, probabilities)
}

/// Fraction of (positive, negative) pairs where the positive scores strictly
/// higher, counting ties as wins for the positive.
pub fn pairwise_auc(labels: &[i32], probabilities: &[f64]) -> f64 {
    let mut wins = 0usize;
    let mut pairs = 0usize;
    for (i, &li) in labels.iter().enumerate() {
        if li != 1 {
            continue;
        }
        for (j, &lj) in labels.iter().enumerate() {
            if lj != 0 {
                continue;
            }
            pairs += 1;
            if probabilities[i] >= probabilities[j] {
                wins += 1;
            }
        }
    }
    wins as f64 / pairs as f64
}
