//! Purity and pair-counting agreement scores.
//!
//! All three metrics compare a predicted clustering against ground-truth
//! classes and only look at the contingency table, so cluster ids and class
//! labels can be any hashable type.
//!
//! ## Purity
//!
//! ```text
//! purity = (1/N) Σ_j max_i n_ij
//! ```
//!
//! Each cluster is credited with its majority class. Purity is trivially 1
//! for N singleton clusters, so it should not be used to compare clusterings
//! with different numbers of clusters.
//!
//! ## Rand Index
//!
//! Fraction of the `C(N, 2)` point pairs on which the two labelings agree
//! (together in both, or apart in both).
//!
//! ## Adjusted Rand Index (Hubert & Arabie, 1985)
//!
//! ```text
//! ARI = (Σ C(n_ij,2) - E) / (½ [Σ C(a_i,2) + Σ C(b_j,2)] - E)
//! E   = Σ C(a_i,2) · Σ C(b_j,2) / C(N,2)
//! ```
//!
//! Corrected for chance: random labelings score close to 0, identical
//! partitions score 1, and adversarial ones can go negative.

use std::hash::Hash;

use super::contingency::Contingency;
use super::util::comb2;
use crate::error::{Error, Result};

/// Fraction of points that belong to the majority class of their cluster.
///
/// # Errors
///
/// [`Error::EmptyInput`] or [`Error::LengthMismatch`].
pub fn purity<T, P>(labels_true: &[T], labels_pred: &[P]) -> Result<f64>
where
    T: Eq + Hash,
    P: Eq + Hash,
{
    let table = Contingency::new(labels_true, labels_pred)?;
    Ok(purity_from(&table))
}

pub(crate) fn purity_from(table: &Contingency) -> f64 {
    let majority: u64 = table.column_maxima().iter().sum();
    let score = majority as f64 / table.n_samples() as f64;
    tracing::debug!(
        n_samples = table.n_samples(),
        n_clusters = table.n_clusters(),
        majority,
        score,
        "purity"
    );
    score
}

/// Rand Index: share of point pairs on which both labelings agree.
///
/// A single point has no pairs; the score is defined as 1.0 in that case.
pub fn rand_index<T, P>(labels_true: &[T], labels_pred: &[P]) -> Result<f64>
where
    T: Eq + Hash,
    P: Eq + Hash,
{
    let table = Contingency::new(labels_true, labels_pred)?;
    Ok(rand_index_from(&table))
}

pub(crate) fn rand_index_from(table: &Contingency) -> f64 {
    let pairs = table.pair_confusion();
    let total = pairs.total();
    let score = if total == 0 {
        1.0
    } else {
        pairs.agreements() as f64 / total as f64
    };
    tracing::debug!(
        n_samples = table.n_samples(),
        agreements = pairs.agreements(),
        total_pairs = total,
        score,
        "rand_index"
    );
    score
}

/// Adjusted Rand Index.
///
/// When the maximum index equals its expectation (one point; a single class
/// and a single cluster; all singletons on both sides) the ratio is 0/0. The
/// score is then 1.0 if the observed index also equals the expectation, and
/// [`Error::DegenerateInput`] otherwise.
pub fn adjusted_rand_index<T, P>(labels_true: &[T], labels_pred: &[P]) -> Result<f64>
where
    T: Eq + Hash,
    P: Eq + Hash,
{
    let table = Contingency::new(labels_true, labels_pred)?;
    adjusted_rand_index_from(&table)
}

pub(crate) fn adjusted_rand_index_from(table: &Contingency) -> Result<f64> {
    let together = table.pairs_in_cells();
    let rows = table.pairs_in_rows();
    let cols = table.pairs_in_cols();
    let total = comb2(table.n_samples());

    // rows, cols <= total, so max == expected iff rows == cols and
    // rows is 0 or total.
    let degenerate = total == 0 || (rows == cols && (rows == 0 || rows == total));
    if degenerate {
        let expected_is_observed = total == 0 || together == rows;
        if expected_is_observed {
            tracing::debug!(
                n_samples = table.n_samples(),
                "adjusted_rand_index: trivial partitions"
            );
            return Ok(1.0);
        }
        tracing::warn!(
            n_samples = table.n_samples(),
            together,
            rows,
            cols,
            "adjusted_rand_index: zero denominator with non-trivial numerator"
        );
        return Err(Error::DegenerateInput {
            metric: "adjusted_rand_index",
            reason: "maximum index equals expected index",
        });
    }

    let expected = rows as f64 * cols as f64 / total as f64;
    let max_index = 0.5 * (rows as f64 + cols as f64);
    let score = (together as f64 - expected) / (max_index - expected);

    tracing::debug!(
        n_samples = table.n_samples(),
        n_classes = table.n_classes(),
        n_clusters = table.n_clusters(),
        expected,
        max_index,
        score,
        "adjusted_rand_index"
    );
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn worked_example() -> (Vec<char>, Vec<u32>) {
        let t: Vec<char> = "AAAAABABBBBCAACCC".chars().collect();
        let p = vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2];
        (t, p)
    }

    #[test]
    fn purity_worked_example() {
        let (t, p) = worked_example();
        let score = purity(&t, &p).unwrap();
        assert_relative_eq!(score, 12.0 / 17.0, epsilon = 1e-12);
        assert!((score - 0.71).abs() < 0.005);
    }

    #[test]
    fn purity_singletons_is_one() {
        let t = ["x", "y", "x", "z", "y"];
        let p: Vec<usize> = (0..t.len()).collect();
        assert_relative_eq!(purity(&t, &p).unwrap(), 1.0);
    }

    #[test]
    fn purity_single_cluster_is_majority_share() {
        let t = [1, 1, 1, 2];
        let p = ["all"; 4];
        assert_relative_eq!(purity(&t, &p).unwrap(), 0.75);
    }

    #[test]
    fn rand_worked_example() {
        let (t, p) = worked_example();
        let score = rand_index(&t, &p).unwrap();
        assert_relative_eq!(score, 92.0 / 136.0, epsilon = 1e-12);
        assert!((score - 0.68).abs() < 0.005);
    }

    #[test]
    fn rand_identical_is_one() {
        let t = [3, 3, 7, 7, 9];
        assert_relative_eq!(rand_index(&t, &t).unwrap(), 1.0);
    }

    #[test]
    fn rand_single_point_is_one() {
        assert_relative_eq!(rand_index(&["a"], &[0]).unwrap(), 1.0);
    }

    #[test]
    fn ari_worked_example() {
        let (t, p) = worked_example();
        let score = adjusted_rand_index(&t, &p).unwrap();
        assert_relative_eq!(score, 0.242914979757085, epsilon = 1e-12);
    }

    #[test]
    fn ari_permuted_labels_is_one() {
        let t = [0, 0, 1, 1, 2, 2];
        let p = ["c", "c", "a", "a", "b", "b"];
        assert_relative_eq!(adjusted_rand_index(&t, &p).unwrap(), 1.0);
    }

    #[test]
    fn ari_can_be_negative() {
        // Every true pair split, every predicted pair crosses classes.
        let t = [0, 0, 1, 1];
        let p = [0, 1, 0, 1];
        assert!(adjusted_rand_index(&t, &p).unwrap() < 0.0);
    }

    #[test]
    fn ari_single_cluster_against_singletons_is_zero() {
        let t = [0, 0, 0];
        let p = [0, 1, 2];
        assert_relative_eq!(adjusted_rand_index(&t, &p).unwrap(), 0.0);
    }

    #[test]
    fn ari_degenerate_cases_are_one() {
        // one point
        assert_relative_eq!(adjusted_rand_index(&[5], &[1]).unwrap(), 1.0);
        // one class, one cluster
        assert_relative_eq!(adjusted_rand_index(&[1, 1, 1], &[2, 2, 2]).unwrap(), 1.0);
        // all singletons on both sides
        assert_relative_eq!(adjusted_rand_index(&[1, 2, 3], &[9, 8, 7]).unwrap(), 1.0);
    }

    #[test]
    fn errors_on_bad_input() {
        let empty: [i32; 0] = [];
        assert_eq!(purity(&empty, &empty), Err(Error::EmptyInput));
        assert!(matches!(
            rand_index(&[1, 2], &[1]),
            Err(Error::LengthMismatch { .. })
        ));
        assert!(matches!(
            adjusted_rand_index(&[1], &[1, 2]),
            Err(Error::LengthMismatch { .. })
        ));
    }
}
