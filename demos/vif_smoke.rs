//! Smoke test: VIF of a small integer design matrix and the AUC of a toy classifier.
//!
//! Run with: cargo run --example vif_smoke
//! Set RUST_LOG=debug to see per-column diagnostics.

use faer::Mat;
use linstat::prelude::*;

fn main() -> Result<(), StatsError> {
    env_logger::init();

    println!("=== Variance Inflation Factor ===\n");

    let rows = [[1.0, 2.0, 4.0], [5.0, 7.0, 2.0], [12.0, 1.0, 7.0]];
    let x = Mat::from_fn(3, 3, |i, j| rows[i][j]);

    let vif = get_vif(&x)?;
    for (j, v) in vif.iter().enumerate() {
        println!("  VIF[{}] = {:.6}", j, v);
    }

    println!("\n=== ROC AUC ===\n");

    let curve = get_auc(&[0, 0, 1, 1], &[0.0, 0.6, 0.4, 0.8])?;
    println!("  AUC = {}", curve.auc);
    for (fpr, tpr) in curve.points() {
        println!("  ({:.2}, {:.2})", fpr, tpr);
    }

    Ok(())
}
