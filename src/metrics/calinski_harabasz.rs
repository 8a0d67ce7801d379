//! Calinski-Harabasz index (variance ratio criterion).
//!
//! ```text
//! B  = Σ_k n_k ||c_k - c||²          (between-cluster dispersion)
//! W  = Σ_i ||x_i - c_{k(i)}||²       (within-cluster dispersion)
//! CH = (B / (K - 1)) / (W / (N - K))
//! ```
//!
//! Higher is better. The index is defined through a variance decomposition,
//! so it always uses squared Euclidean distance.

use std::hash::Hash;

use super::util::{check_features, squared_euclidean, Partition, Points};
use crate::error::{Error, Result};

const METRIC: &str = "calinski_harabasz";

/// Calinski-Harabasz index.
///
/// # Errors
///
/// - [`Error::EmptyInput`], length or dimension mismatches.
/// - [`Error::NonFiniteValue`] if a coordinate is NaN or infinite.
/// - [`Error::InsufficientClusters`] unless `1 < K < N`.
/// - [`Error::DegenerateInput`] if the within-cluster dispersion is zero.
pub fn calinski_harabasz_index<P: Eq + Hash>(data: &[Vec<f32>], labels: &[P]) -> Result<f64> {
    let points = check_features(data, labels)?;
    let partition = Partition::new(labels);
    index_from(&points, &partition)
}

pub(crate) fn index_from(points: &Points, partition: &Partition) -> Result<f64> {
    let n = points.len();
    let k = partition.n_groups();
    if k < 2 || k >= n {
        return Err(Error::InsufficientClusters {
            metric: METRIC,
            n_clusters: k,
            n_samples: n,
        });
    }

    let overall = points.mean(None);
    let members = partition.members();

    let mut between = 0.0f64;
    let mut within = 0.0f64;
    for m in &members {
        let centroid = points.mean(Some(m.as_slice()));
        between += m.len() as f64 * squared_euclidean(&centroid, &overall);
        within += m
            .iter()
            .map(|&i| squared_euclidean(points.row(i), &centroid))
            .sum::<f64>();
    }

    if within <= 0.0 {
        tracing::warn!(
            n_samples = n,
            n_clusters = k,
            "calinski_harabasz: zero within-cluster dispersion"
        );
        return Err(Error::DegenerateInput {
            metric: METRIC,
            reason: "within-cluster dispersion is zero",
        });
    }

    let score = (between / (k - 1) as f64) / (within / (n - k) as f64);
    tracing::debug!(
        n_samples = n,
        n_clusters = k,
        dim = points.dim(),
        between,
        within,
        score,
        "calinski_harabasz_index"
    );
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_bars_exact() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![4.0, 0.0],
            vec![4.0, 1.0],
        ];
        // B = 16, W = 1, K = 2, N = 4.
        assert_relative_eq!(calinski_harabasz_index(&data, &[0, 0, 1, 1]).unwrap(), 32.0);
    }

    #[test]
    fn three_clusters_on_a_line() {
        let data = vec![
            vec![0.0],
            vec![2.0],
            vec![5.0],
            vec![7.0],
            vec![10.0],
            vec![12.0],
        ];
        // Centroids 1, 6, 11; overall 6. B = 2*25 + 0 + 2*25 = 100, W = 6.
        let expected = (100.0 / 2.0) / (6.0 / 3.0);
        assert_relative_eq!(
            calinski_harabasz_index(&data, &[0, 0, 1, 1, 2, 2]).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn cluster_count_bounds() {
        let data = vec![vec![0.0], vec![1.0], vec![2.0]];
        assert!(matches!(
            calinski_harabasz_index(&data, &[0, 0, 0]),
            Err(Error::InsufficientClusters { n_clusters: 1, .. })
        ));
        assert!(matches!(
            calinski_harabasz_index(&data, &[0, 1, 2]),
            Err(Error::InsufficientClusters { n_clusters: 3, n_samples: 3, .. })
        ));
    }

    #[test]
    fn non_finite_features_are_rejected() {
        let data = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![4.0, 0.0], vec![f32::NAN, 1.0]];
        assert_eq!(
            calinski_harabasz_index(&data, &[0, 0, 1, 1]),
            Err(Error::NonFiniteValue { row: 3, column: 0 })
        );
        let data = vec![vec![0.0], vec![f32::NEG_INFINITY], vec![4.0], vec![5.0]];
        assert_eq!(
            calinski_harabasz_index(&data, &[0, 0, 1, 1]),
            Err(Error::NonFiniteValue { row: 1, column: 0 })
        );
    }

    #[test]
    fn zero_within_dispersion_is_degenerate() {
        let data = vec![vec![1.0], vec![1.0], vec![3.0], vec![3.0]];
        let err = calinski_harabasz_index(&data, &[0, 0, 1, 1]).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput { metric: "calinski_harabasz", .. }));
    }
}
