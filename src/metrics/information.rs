//! Information-theoretic agreement scores.
//!
//! All quantities use the natural logarithm, so entropies and mutual
//! information are in nats. Normalized scores are unit-free.
//!
//! ```text
//! H(U)   = -Σ_i p_i ln p_i
//! MI(U,V) = Σ_{n_ij > 0} p_ij ln( p_ij / (p_i p_j) )
//! NMI    = MI / norm(H(U), H(V))
//! ```
//!
//! Empty contingency cells are skipped, so `0 ln 0` never appears.
//!
//! Homogeneity (`MI / H(true)`: each cluster holds one class) and completeness
//! (`MI / H(pred)`: each class lands in one cluster) are the two halves of NMI;
//! their harmonic mean, the V-measure, equals NMI with arithmetic
//! normalization.

use std::hash::Hash;

use super::contingency::Contingency;
use super::util::Partition;
use crate::error::{Error, Result};

/// How mutual information is normalized into `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NmiNormalization {
    /// `(H(U) + H(V)) / 2`.
    #[default]
    Arithmetic,
    /// `sqrt(H(U) H(V))`.
    Geometric,
    /// `min(H(U), H(V))`.
    Min,
    /// `max(H(U), H(V))`.
    Max,
}

impl NmiNormalization {
    fn normalizer(self, h_true: f64, h_pred: f64) -> f64 {
        match self {
            NmiNormalization::Arithmetic => 0.5 * (h_true + h_pred),
            NmiNormalization::Geometric => (h_true * h_pred).sqrt(),
            NmiNormalization::Min => h_true.min(h_pred),
            NmiNormalization::Max => h_true.max(h_pred),
        }
    }
}

/// Homogeneity, completeness and V-measure.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcvScore {
    /// Each cluster contains members of a single class.
    pub homogeneity: f64,
    /// All members of a class are assigned to the same cluster.
    pub completeness: f64,
    /// Harmonic mean of homogeneity and completeness.
    pub v_measure: f64,
}

/// Shannon entropy (nats) of a label sequence.
pub fn entropy<L: Eq + Hash>(labels: &[L]) -> Result<f64> {
    if labels.is_empty() {
        return Err(Error::EmptyInput);
    }
    let groups = Partition::new(labels);
    let sizes: Vec<u64> = groups.sizes.iter().map(|&s| s as u64).collect();
    Ok(entropy_of_counts(&sizes, labels.len() as u64))
}

fn entropy_of_counts(counts: &[u64], n: u64) -> f64 {
    let n = n as f64;
    let h: f64 = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.ln()
        })
        .sum();
    // A single group gives exactly -1 * ln(1) = -0.0.
    h.max(0.0)
}

/// Mutual information (nats) between true classes and predicted clusters.
pub fn mutual_information<T, P>(labels_true: &[T], labels_pred: &[P]) -> Result<f64>
where
    T: Eq + Hash,
    P: Eq + Hash,
{
    let table = Contingency::new(labels_true, labels_pred)?;
    let mi = mutual_information_from(&table);
    tracing::debug!(
        n_samples = table.n_samples(),
        n_classes = table.n_classes(),
        n_clusters = table.n_clusters(),
        score = mi,
        "mutual_information"
    );
    Ok(mi)
}

pub(crate) fn mutual_information_from(table: &Contingency) -> f64 {
    let n = table.n_samples() as f64;
    let rows = table.row_sums();
    let cols = table.col_sums();

    // p_ij ln(p_ij / (p_i p_j)) == (n_ij/N) ln(N n_ij / (a_i b_j))
    let mi: f64 = table
        .nonzero()
        .map(|(i, j, nij)| {
            let nij = nij as f64;
            let outer = rows[i] as f64 * cols[j] as f64;
            (nij / n) * (n * nij / outer).ln()
        })
        .sum();

    mi.max(0.0)
}

/// Normalized mutual information with arithmetic-mean normalization.
pub fn normalized_mutual_information<T, P>(labels_true: &[T], labels_pred: &[P]) -> Result<f64>
where
    T: Eq + Hash,
    P: Eq + Hash,
{
    normalized_mutual_information_with(labels_true, labels_pred, NmiNormalization::Arithmetic)
}

/// Normalized mutual information with an explicit normalizer.
///
/// Two constant labelings (one class, one cluster) score 1.0. If only one
/// side is constant, MI is 0 and the [`NmiNormalization::Arithmetic`] and
/// [`NmiNormalization::Max`] normalizers give 0; the geometric and min
/// normalizers are 0 there and the call returns [`Error::DegenerateInput`].
pub fn normalized_mutual_information_with<T, P>(
    labels_true: &[T],
    labels_pred: &[P],
    normalization: NmiNormalization,
) -> Result<f64>
where
    T: Eq + Hash,
    P: Eq + Hash,
{
    let table = Contingency::new(labels_true, labels_pred)?;
    normalized_mutual_information_from(&table, normalization)
}

pub(crate) fn normalized_mutual_information_from(
    table: &Contingency,
    normalization: NmiNormalization,
) -> Result<f64> {
    let n = table.n_samples();
    let h_true = entropy_of_counts(table.row_sums(), n);
    let h_pred = entropy_of_counts(table.col_sums(), n);

    if h_true == 0.0 && h_pred == 0.0 {
        tracing::debug!(
            n_samples = n,
            "normalized_mutual_information: both labelings constant"
        );
        return Ok(1.0);
    }

    let denom = normalization.normalizer(h_true, h_pred);
    if denom <= 0.0 {
        tracing::warn!(
            n_samples = n,
            h_true,
            h_pred,
            normalization = ?normalization,
            "normalized_mutual_information: zero normalizer"
        );
        return Err(Error::DegenerateInput {
            metric: "normalized_mutual_information",
            reason: "normalizer is zero because one labeling is constant",
        });
    }

    let mi = mutual_information_from(table);
    let score = (mi / denom).clamp(0.0, 1.0);
    tracing::debug!(
        n_samples = n,
        mi,
        h_true,
        h_pred,
        normalization = ?normalization,
        score,
        "normalized_mutual_information"
    );
    Ok(score)
}

/// Homogeneity, completeness and V-measure in one pass.
///
/// Homogeneity is 1.0 when there is a single true class, completeness is 1.0
/// when there is a single cluster, and the V-measure is 0.0 when both halves
/// are 0.
pub fn homogeneity_completeness_v_measure<T, P>(
    labels_true: &[T],
    labels_pred: &[P],
) -> Result<HcvScore>
where
    T: Eq + Hash,
    P: Eq + Hash,
{
    let table = Contingency::new(labels_true, labels_pred)?;
    Ok(hcv_from(&table))
}

pub(crate) fn hcv_from(table: &Contingency) -> HcvScore {
    let n = table.n_samples();
    let h_true = entropy_of_counts(table.row_sums(), n);
    let h_pred = entropy_of_counts(table.col_sums(), n);
    let mi = mutual_information_from(table);

    let homogeneity = if h_true == 0.0 { 1.0 } else { (mi / h_true).min(1.0) };
    let completeness = if h_pred == 0.0 { 1.0 } else { (mi / h_pred).min(1.0) };
    let v_measure = if homogeneity + completeness == 0.0 {
        0.0
    } else {
        2.0 * homogeneity * completeness / (homogeneity + completeness)
    };

    tracing::debug!(
        n_samples = n,
        homogeneity,
        completeness,
        v_measure,
        "homogeneity_completeness_v_measure"
    );
    HcvScore {
        homogeneity,
        completeness,
        v_measure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn worked_example() -> (Vec<char>, Vec<i64>) {
        let t: Vec<char> = "AAAAABABBBBCAACCC".chars().collect();
        let p = vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2];
        (t, p)
    }

    #[test]
    fn entropy_uniform_and_constant() {
        assert_relative_eq!(entropy(&[0, 1, 2, 3]).unwrap(), 4f64.ln(), epsilon = 1e-12);
        assert_eq!(entropy(&["same"; 5]).unwrap(), 0.0);
        let empty: [u8; 0] = [];
        assert_eq!(entropy(&empty), Err(Error::EmptyInput));
    }

    #[test]
    fn mi_worked_example() {
        let (t, p) = worked_example();
        let mi = mutual_information(&t, &p).unwrap();
        assert_relative_eq!(mi, 0.39193662057259077, epsilon = 1e-12);
    }

    #[test]
    fn mi_of_identical_labels_is_entropy() {
        let t = [0, 0, 1, 2, 2, 2];
        let p = ['x', 'x', 'y', 'z', 'z', 'z'];
        let mi = mutual_information(&t, &p).unwrap();
        assert_relative_eq!(mi, entropy(&t).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn nmi_worked_example() {
        let (t, p) = worked_example();
        let nmi = normalized_mutual_information(&t, &p).unwrap();
        assert_relative_eq!(nmi, 0.3645617718571898, epsilon = 1e-12);
        assert!((nmi - 0.36).abs() < 0.005);
    }

    #[test]
    fn nmi_normalizers_worked_example() {
        let (t, p) = worked_example();
        let cases = [
            (NmiNormalization::Geometric, 0.3646247961942429),
            (NmiNormalization::Min, 0.371468125745918),
            (NmiNormalization::Max, 0.3579075371075876),
        ];
        for (norm, expected) in cases {
            let nmi = normalized_mutual_information_with(&t, &p, norm).unwrap();
            assert_relative_eq!(nmi, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn nmi_permuted_labels_is_one() {
        let t = [0, 0, 1, 1, 2, 2, 2];
        let p = [5, 5, 3, 3, 9, 9, 9];
        assert_relative_eq!(normalized_mutual_information(&t, &p).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn nmi_single_cluster_is_zero() {
        let t = [0, 0, 1, 1, 2];
        let p = [0; 5];
        assert_abs_diff_eq!(normalized_mutual_information(&t, &p).unwrap(), 0.0);
        assert_abs_diff_eq!(
            normalized_mutual_information_with(&t, &p, NmiNormalization::Max).unwrap(),
            0.0
        );
    }

    #[test]
    fn nmi_both_constant_is_one() {
        assert_eq!(normalized_mutual_information(&[1, 1, 1], &["a"; 3]).unwrap(), 1.0);
        assert_eq!(
            normalized_mutual_information_with(&[1, 1], &[2, 2], NmiNormalization::Geometric)
                .unwrap(),
            1.0
        );
    }

    #[test]
    fn nmi_zero_normalizer_is_degenerate() {
        let t = [0, 1, 2];
        let p = [0; 3];
        for norm in [NmiNormalization::Geometric, NmiNormalization::Min] {
            let err = normalized_mutual_information_with(&t, &p, norm).unwrap_err();
            assert!(matches!(err, Error::DegenerateInput { .. }));
        }
    }

    #[test]
    fn hcv_worked_example() {
        let (t, p) = worked_example();
        let s = homogeneity_completeness_v_measure(&t, &p).unwrap();
        assert_relative_eq!(s.homogeneity, 0.371468125745918, epsilon = 1e-12);
        assert_relative_eq!(s.completeness, 0.3579075371075876, epsilon = 1e-12);
        // V-measure is arithmetic NMI.
        let nmi = normalized_mutual_information(&t, &p).unwrap();
        assert_relative_eq!(s.v_measure, nmi, epsilon = 1e-12);
    }

    #[test]
    fn hcv_extremes() {
        // Singletons are perfectly homogeneous but incomplete.
        let s = homogeneity_completeness_v_measure(&[0, 0, 1, 1], &[0, 1, 2, 3]).unwrap();
        assert_relative_eq!(s.homogeneity, 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.completeness, 0.5, epsilon = 1e-12);

        // One cluster is complete but carries no information.
        let s = homogeneity_completeness_v_measure(&[0, 0, 1, 1], &[7; 4]).unwrap();
        assert_abs_diff_eq!(s.homogeneity, 0.0);
        assert_eq!(s.completeness, 1.0);
        assert_abs_diff_eq!(s.v_measure, 0.0);
    }
}
