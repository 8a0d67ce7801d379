//! Silhouette coefficient (Rousseeuw, 1987).
//!
//! For each point `i` in cluster `C`:
//!
//! ```text
//! a(i) = mean_{j ∈ C, j ≠ i} d(i, j)            (0 if |C| = 1)
//! b(i) = min_{C' ≠ C} mean_{j ∈ C'} d(i, j)
//! s(i) = (b(i) - a(i)) / max(a(i), b(i))        (0 if both are 0)
//! ```
//!
//! `s(i)` near 1 means the point sits well inside its cluster, near 0 means
//! it lies on a boundary, and negative means it is closer to another cluster.
//! The silhouette score is the mean of `s(i)`.
//!
//! ## Complexity
//!
//! O(n² d) distance evaluations (each unordered pair once), O(n k) memory.

use std::hash::Hash;

use super::distance::DistanceMetric;
use super::traits::Distance;
use super::util::{check_features, require_two_clusters, Partition, Points};
use crate::error::Result;

const METRIC: &str = "silhouette";

/// Mean silhouette coefficient with Euclidean distance.
///
/// # Errors
///
/// - [`Error::EmptyInput`](crate::Error::EmptyInput), length or dimension mismatches.
/// - [`Error::NonFiniteValue`](crate::Error::NonFiniteValue) if a coordinate is
///   NaN or infinite.
/// - [`Error::InsufficientClusters`](crate::Error::InsufficientClusters) if all
///   points share one cluster.
///
/// # Example
///
/// ```rust
/// use clump_metrics::silhouette_score;
///
/// let data = vec![
///     vec![0.0, 0.0],
///     vec![0.0, 1.0],
///     vec![4.0, 0.0],
///     vec![4.0, 1.0],
/// ];
/// let score = silhouette_score(&data, &[0, 0, 1, 1]).unwrap();
/// assert!(score > 0.75);
/// ```
pub fn silhouette_score<P: Eq + Hash>(data: &[Vec<f32>], labels: &[P]) -> Result<f64> {
    silhouette_score_with(data, labels, &DistanceMetric::Euclidean)
}

/// Mean silhouette coefficient with a caller-supplied distance.
pub fn silhouette_score_with<P, D>(data: &[Vec<f32>], labels: &[P], distance: &D) -> Result<f64>
where
    P: Eq + Hash,
    D: Distance + ?Sized,
{
    let points = check_features(data, labels)?;
    let partition = Partition::new(labels);
    score_from(&points, &partition, distance)
}

pub(crate) fn score_from<D>(points: &Points, partition: &Partition, distance: &D) -> Result<f64>
where
    D: Distance + ?Sized,
{
    require_two_clusters(METRIC, partition, points.len())?;
    let samples = samples_from(points, partition, distance);
    let score = samples.iter().sum::<f64>() / samples.len() as f64;
    tracing::debug!(
        n_samples = samples.len(),
        n_clusters = partition.n_groups(),
        dim = points.dim(),
        score,
        "silhouette_score"
    );
    Ok(score)
}

/// Per-point silhouette coefficients with Euclidean distance.
pub fn silhouette_samples<P: Eq + Hash>(data: &[Vec<f32>], labels: &[P]) -> Result<Vec<f64>> {
    silhouette_samples_with(data, labels, &DistanceMetric::Euclidean)
}

/// Per-point silhouette coefficients with a caller-supplied distance.
pub fn silhouette_samples_with<P, D>(
    data: &[Vec<f32>],
    labels: &[P],
    distance: &D,
) -> Result<Vec<f64>>
where
    P: Eq + Hash,
    D: Distance + ?Sized,
{
    let points = check_features(data, labels)?;
    let partition = Partition::new(labels);
    require_two_clusters(METRIC, &partition, points.len())?;

    let samples = samples_from(&points, &partition, distance);
    tracing::debug!(
        n_samples = points.len(),
        n_clusters = partition.n_groups(),
        dim = points.dim(),
        "silhouette_samples"
    );
    Ok(samples)
}

fn samples_from<D>(points: &Points, partition: &Partition, distance: &D) -> Vec<f64>
where
    D: Distance + ?Sized,
{
    let n = points.len();
    let k = partition.n_groups();

    // sums[i * k + c] = total distance from point i to the members of cluster c.
    let mut sums = vec![0.0f64; n * k];
    for i in 0..n {
        let ci = partition.ids[i];
        for j in (i + 1)..n {
            let d = distance.distance(points.row(i), points.row(j));
            sums[i * k + partition.ids[j]] += d;
            sums[j * k + ci] += d;
        }
    }

    (0..n)
        .map(|i| {
            let own = partition.ids[i];
            let row = &sums[i * k..(i + 1) * k];

            let own_size = partition.sizes[own];
            let a = if own_size > 1 {
                row[own] / (own_size - 1) as f64
            } else {
                0.0
            };

            let b = (0..k)
                .filter(|&c| c != own)
                .map(|c| row[c] / partition.sizes[c] as f64)
                .fold(f64::INFINITY, f64::min);

            let denom = a.max(b);
            if denom == 0.0 {
                0.0
            } else {
                (b - a) / denom
            }
        })
        .collect()
}
