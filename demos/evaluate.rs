//! Score a toy clustering the way an analysis notebook would.
//!
//! Run with `RUST_LOG=clump_metrics=debug` to see the per-metric events.

use clump_metrics::{
    purity, Contingency, DistanceMetric, ExternalScores, InternalConfig, InternalScores,
};
use tracing_subscriber::EnvFilter;

fn main() -> clump_metrics::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // --- Label-based scores ---
    let truth: Vec<char> = "AAAAABABBBBCAACCC".chars().collect();
    let pred = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2];

    let table = Contingency::new(&truth, &pred)?;
    println!("=== Contingency (rows: A, B, C) ===");
    for i in 0..table.n_classes() {
        let row: Vec<String> = (0..table.n_clusters())
            .map(|j| format!("{:3}", table.count(i, j)))
            .collect();
        println!("  {}  | {}", row.join(" "), table.row_sums()[i]);
    }

    println!("\n=== Purity ===");
    println!("  {:.2}", purity(&truth, &pred)?);

    println!("\n=== External scores ===");
    let external = ExternalScores::compute(&truth, &pred)?;
    for line in external.to_string().lines() {
        println!("  {line}");
    }

    // --- Distance-based scores ---
    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];
    let labels = ["a", "a", "a", "a", "b", "b", "b", "b", "c", "c", "c", "c"];

    for distance in [DistanceMetric::Euclidean, DistanceMetric::Manhattan] {
        let internal = InternalScores::compute(&data, &labels, &InternalConfig { distance })?;
        println!("\n=== Internal scores ({distance:?}) ===");
        for line in internal.to_string().lines() {
            println!("  {line}");
        }
    }

    Ok(())
}
