//! Davies-Bouldin index (Davies & Bouldin, 1979).
//!
//! ```text
//! S_k  = mean_{x ∈ C_k} d(x, c_k)
//! R_kl = (S_k + S_l) / d(c_k, c_l)
//! DB   = mean_k max_{l ≠ k} R_kl
//! ```
//!
//! Lower is better; 0 means every cluster has collapsed onto its centroid.
//! Centroids are always arithmetic means, whatever distance is plugged in.
//!
//! Two distinct clusters with the same centroid make `R_kl` infinite. That
//! case is reported as [`Error::DegenerateInput`] instead of producing `inf`.

use std::hash::Hash;

use super::distance::DistanceMetric;
use super::traits::Distance;
use super::util::{check_features, require_two_clusters, Partition, Points};
use crate::error::{Error, Result};

const METRIC: &str = "davies_bouldin";

/// Davies-Bouldin index with Euclidean distance.
pub fn davies_bouldin_index<P: Eq + Hash>(data: &[Vec<f32>], labels: &[P]) -> Result<f64> {
    davies_bouldin_index_with(data, labels, &DistanceMetric::Euclidean)
}

/// Davies-Bouldin index with a caller-supplied distance.
///
/// # Errors
///
/// - [`Error::EmptyInput`], length or dimension mismatches.
/// - [`Error::InsufficientClusters`] with fewer than two clusters.
/// - [`Error::NonFiniteValue`] if a coordinate is NaN or infinite.
/// - [`Error::DegenerateInput`] if two clusters share a centroid, or if the
///   distance yields NaN.
pub fn davies_bouldin_index_with<P, D>(data: &[Vec<f32>], labels: &[P], distance: &D) -> Result<f64>
where
    P: Eq + Hash,
    D: Distance + ?Sized,
{
    let points = check_features(data, labels)?;
    let partition = Partition::new(labels);
    index_from(&points, &partition, distance)
}

pub(crate) fn index_from<D>(points: &Points, partition: &Partition, distance: &D) -> Result<f64>
where
    D: Distance + ?Sized,
{
    require_two_clusters(METRIC, partition, points.len())?;

    let members = partition.members();
    let centroids: Vec<Vec<f64>> = members
        .iter()
        .map(|m| points.mean(Some(m.as_slice())))
        .collect();
    let scatter: Vec<f64> = members
        .iter()
        .zip(centroids.iter())
        .map(|(m, c)| {
            let total: f64 = m.iter().map(|&i| distance.distance(points.row(i), c)).sum();
            total / m.len() as f64
        })
        .collect();

    let k = centroids.len();
    let mut worst = vec![0.0f64; k];
    for a in 0..k {
        for b in (a + 1)..k {
            let sep = distance.distance(&centroids[a], &centroids[b]);
            if sep <= 0.0 {
                tracing::warn!(
                    cluster_a = a,
                    cluster_b = b,
                    "davies_bouldin: identical centroids"
                );
                return Err(Error::DegenerateInput {
                    metric: METRIC,
                    reason: "two clusters have identical centroids",
                });
            }
            let r = (scatter[a] + scatter[b]) / sep;
            // f64::max would silently drop a NaN ratio.
            if r.is_nan() {
                tracing::warn!(cluster_a = a, cluster_b = b, "davies_bouldin: NaN distance");
                return Err(Error::DegenerateInput {
                    metric: METRIC,
                    reason: "distance evaluated to NaN",
                });
            }
            worst[a] = worst[a].max(r);
            worst[b] = worst[b].max(r);
        }
    }

    let score = worst.iter().sum::<f64>() / k as f64;
    tracing::debug!(
        n_samples = points.len(),
        n_clusters = k,
        dim = points.dim(),
        score,
        "davies_bouldin_index"
    );
    Ok(score)
}
