//! Contingency tables and pair counting.
//!
//! Every label-based metric starts from the same cross-tabulation: rows are
//! ground-truth classes, columns are predicted clusters, and cell `(i, j)`
//! counts the points with class `i` assigned to cluster `j`.
//!
//! ```text
//!              cluster 0  cluster 1  cluster 2 | a_i
//!   class A        5          1          2     |  8
//!   class B        1          4          0     |  5
//!   class C        0          1          3     |  4
//!   -------------------------------------------+----
//!   b_j            6          6          5     | 17
//! ```
//!
//! Only non-zero cells are stored, so memory grows with the number of
//! distinct (class, cluster) pairs rather than `n_classes × n_clusters`.
//!
//! Pair-counting metrics (Rand, ARI) only need `sum C(n_ij, 2)`,
//! `sum C(a_i, 2)` and `sum C(b_j, 2)`. Those sums are kept in `u64` so that
//! degenerate-case comparisons are exact.

use std::collections::BTreeMap;
use std::hash::Hash;

use super::util::{check_label_pair, comb2, Partition};
use crate::error::Result;

/// Cross-tabulation of true classes against predicted clusters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contingency {
    // Keyed by (class, cluster); iteration is row-major.
    cells: BTreeMap<(usize, usize), u64>,
    row_sums: Vec<u64>,
    col_sums: Vec<u64>,
    n_samples: u64,
}

impl Contingency {
    /// Build the table for two parallel label sequences.
    ///
    /// Rows and columns are numbered in order of first appearance of each
    /// label. Fails if the sequences are empty or differ in length.
    pub fn new<T, P>(labels_true: &[T], labels_pred: &[P]) -> Result<Self>
    where
        T: Eq + Hash,
        P: Eq + Hash,
    {
        check_label_pair(labels_true, labels_pred)?;

        let classes = Partition::new(labels_true);
        let clusters = Partition::new(labels_pred);

        let mut cells = BTreeMap::new();
        for (&i, &j) in classes.ids.iter().zip(clusters.ids.iter()) {
            *cells.entry((i, j)).or_insert(0u64) += 1;
        }

        Ok(Self {
            cells,
            row_sums: classes.sizes.iter().map(|&s| s as u64).collect(),
            col_sums: clusters.sizes.iter().map(|&s| s as u64).collect(),
            n_samples: labels_true.len() as u64,
        })
    }

    /// Total number of points.
    pub fn n_samples(&self) -> u64 {
        self.n_samples
    }

    /// Number of distinct true classes (rows).
    pub fn n_classes(&self) -> usize {
        self.row_sums.len()
    }

    /// Number of distinct predicted clusters (columns).
    pub fn n_clusters(&self) -> usize {
        self.col_sums.len()
    }

    /// Co-occurrence count for class `i` and cluster `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    pub fn count(&self, i: usize, j: usize) -> u64 {
        assert!(i < self.n_classes(), "class index out of range");
        assert!(j < self.n_clusters(), "cluster index out of range");
        self.cells.get(&(i, j)).copied().unwrap_or(0)
    }

    /// Points per true class.
    pub fn row_sums(&self) -> &[u64] {
        &self.row_sums
    }

    /// Points per predicted cluster.
    pub fn col_sums(&self) -> &[u64] {
        &self.col_sums
    }

    /// Iterate over the non-zero cells as `(class, cluster, count)`.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.cells.iter().map(|(&(i, j), &c)| (i, j, c))
    }

    /// Count of the most frequent class inside each cluster.
    pub(crate) fn column_maxima(&self) -> Vec<u64> {
        let mut best = vec![0u64; self.n_clusters()];
        for (&(_, j), &c) in &self.cells {
            best[j] = best[j].max(c);
        }
        best
    }

    /// `sum C(n_ij, 2)`: pairs placed together by both labelings.
    pub(crate) fn pairs_in_cells(&self) -> u64 {
        self.cells.values().map(|&c| comb2(c)).sum()
    }

    /// `sum C(a_i, 2)`: pairs sharing a true class.
    pub(crate) fn pairs_in_rows(&self) -> u64 {
        self.row_sums.iter().map(|&c| comb2(c)).sum()
    }

    /// `sum C(b_j, 2)`: pairs sharing a predicted cluster.
    pub(crate) fn pairs_in_cols(&self) -> u64 {
        self.col_sums.iter().map(|&c| comb2(c)).sum()
    }

    /// Classify all `C(N, 2)` point pairs.
    pub fn pair_confusion(&self) -> PairConfusion {
        let both = self.pairs_in_cells();
        let rows = self.pairs_in_rows();
        let cols = self.pairs_in_cols();
        let total = comb2(self.n_samples);
        PairConfusion {
            together_both: both,
            together_true_only: rows - both,
            together_pred_only: cols - both,
            apart_both: total + both - rows - cols,
        }
    }
}

/// How the `C(N, 2)` unordered point pairs split between two labelings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairConfusion {
    /// Same class and same cluster.
    pub together_both: u64,
    /// Same class, different clusters.
    pub together_true_only: u64,
    /// Different classes, same cluster.
    pub together_pred_only: u64,
    /// Different classes and different clusters.
    pub apart_both: u64,
}

impl PairConfusion {
    /// Total number of pairs.
    pub fn total(&self) -> u64 {
        self.together_both + self.together_true_only + self.together_pred_only + self.apart_both
    }

    /// Pairs on which both labelings agree.
    pub fn agreements(&self) -> u64 {
        self.together_both + self.apart_both
    }
}

/// Pair confusion counts for two labelings.
pub fn pair_confusion<T, P>(labels_true: &[T], labels_pred: &[P]) -> Result<PairConfusion>
where
    T: Eq + Hash,
    P: Eq + Hash,
{
    Ok(Contingency::new(labels_true, labels_pred)?.pair_confusion())
}
