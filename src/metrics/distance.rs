//! Built-in distance functions.

use super::traits::Distance;
use super::util::squared_euclidean;

/// Built-in distance functions for the distance-based metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceMetric {
    /// L2 distance.
    #[default]
    Euclidean,
    /// Squared L2 distance (not a metric, but common for k-means style data).
    SquaredEuclidean,
    /// L1 distance.
    Manhattan,
    /// L-infinity distance.
    Chebyshev,
    /// `1 - cos(a, b)`; 0 if either vector is all zeros.
    Cosine,
}

impl Distance for DistanceMetric {
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        match self {
            DistanceMetric::Euclidean => squared_euclidean(a, b).sqrt(),
            DistanceMetric::SquaredEuclidean => squared_euclidean(a, b),
            DistanceMetric::Manhattan => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
            DistanceMetric::Chebyshev => a
                .iter()
                .zip(b)
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
            DistanceMetric::Cosine => {
                let (mut dot, mut na, mut nb) = (0.0f64, 0.0f64, 0.0f64);
                for (x, y) in a.iter().zip(b) {
                    dot += x * y;
                    na += x * x;
                    nb += y * y;
                }
                if na == 0.0 || nb == 0.0 {
                    return 0.0;
                }
                (1.0 - dot / (na.sqrt() * nb.sqrt())).max(0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn builtin_distances() {
        let a = [0.0, 0.0];
        let b = [3.0, 4.0];
        assert_relative_eq!(DistanceMetric::Euclidean.distance(&a, &b), 5.0);
        assert_relative_eq!(DistanceMetric::SquaredEuclidean.distance(&a, &b), 25.0);
        assert_relative_eq!(DistanceMetric::Manhattan.distance(&a, &b), 7.0);
        assert_relative_eq!(DistanceMetric::Chebyshev.distance(&a, &b), 4.0);
    }

    #[test]
    fn cosine_distance() {
        let d = DistanceMetric::Cosine;
        assert_relative_eq!(d.distance(&[1.0, 0.0], &[0.0, 2.0]), 1.0);
        assert_relative_eq!(d.distance(&[1.0, 1.0], &[2.0, 2.0]), 0.0, epsilon = 1e-12);
        assert_eq!(d.distance(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn closures_are_distances() {
        let hamming = |a: &[f64], b: &[f64]| a.iter().zip(b).filter(|(x, y)| x != y).count() as f64;
        assert_eq!(hamming.distance(&[1.0, 2.0, 3.0], &[1.0, 0.0, 0.0]), 2.0);
    }
}
