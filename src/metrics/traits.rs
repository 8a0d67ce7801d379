/// Dissimilarity between two feature vectors of equal length.
///
/// Used by the distance-based metrics (silhouette, Davies-Bouldin). Any
/// closure `Fn(&[f64], &[f64]) -> f64` implements it, as does
/// [`DistanceMetric`](super::DistanceMetric).
///
/// Implementations should be non-negative, symmetric and zero on identical
/// inputs; the metrics do not check this.
pub trait Distance {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;
}

impl<F> Distance for F
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self(a, b)
    }
}
