use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Dense re-encoding of an arbitrary label sequence.
///
/// Group ids are assigned in order of first appearance, so `ids[i] < n_groups`.
#[derive(Clone, Debug)]
pub(crate) struct Partition {
    pub(crate) ids: Vec<usize>,
    pub(crate) sizes: Vec<usize>,
}

impl Partition {
    pub(crate) fn new<L: Eq + Hash>(labels: &[L]) -> Self {
        let mut index: HashMap<&L, usize> = HashMap::new();
        let mut ids = Vec::with_capacity(labels.len());
        let mut sizes = Vec::new();
        for label in labels {
            let next = index.len();
            let id = *index.entry(label).or_insert(next);
            if id == sizes.len() {
                sizes.push(0);
            }
            sizes[id] += 1;
            ids.push(id);
        }
        Self { ids, sizes }
    }

    #[inline]
    pub(crate) fn n_groups(&self) -> usize {
        self.sizes.len()
    }

    /// Member indices per group.
    pub(crate) fn members(&self) -> Vec<Vec<usize>> {
        let mut out: Vec<Vec<usize>> = self.sizes.iter().map(|&s| Vec::with_capacity(s)).collect();
        for (i, &g) in self.ids.iter().enumerate() {
            out[g].push(i);
        }
        out
    }
}

/// Feature matrix widened to `f64`, stored row-major.
#[derive(Clone, Debug)]
pub(crate) struct Points {
    values: Vec<f64>,
    dim: usize,
}

impl Points {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.values.len() / self.dim
        }
    }

    #[inline]
    pub(crate) fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub(crate) fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.dim..(i + 1) * self.dim]
    }

    /// Mean vector of the given rows (all rows if `members` is `None`).
    pub(crate) fn mean(&self, members: Option<&[usize]>) -> Vec<f64> {
        let mut acc = vec![0.0f64; self.dim];
        let count = match members {
            Some(idx) => {
                for &i in idx {
                    add_assign(&mut acc, self.row(i));
                }
                idx.len()
            }
            None => {
                for i in 0..self.len() {
                    add_assign(&mut acc, self.row(i));
                }
                self.len()
            }
        };
        if count > 0 {
            for v in &mut acc {
                *v /= count as f64;
            }
        }
        acc
    }
}

#[inline]
fn add_assign(acc: &mut [f64], row: &[f64]) {
    for (a, &x) in acc.iter_mut().zip(row) {
        *a += x;
    }
}

/// Validate a (labels_true, labels_pred) pair.
pub(crate) fn check_label_pair<T, P>(labels_true: &[T], labels_pred: &[P]) -> Result<()> {
    if labels_true.len() != labels_pred.len() {
        return Err(Error::LengthMismatch {
            left: labels_true.len(),
            right: labels_pred.len(),
            what: "predicted labels",
        });
    }
    if labels_true.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Validate a feature matrix against its labels and widen it to `f64`.
pub(crate) fn check_features<P>(data: &[Vec<f32>], labels: &[P]) -> Result<Points> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    if data.len() != labels.len() {
        return Err(Error::LengthMismatch {
            left: labels.len(),
            right: data.len(),
            what: "feature rows",
        });
    }

    let dim = data[0].len();
    if dim == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }

    let mut values = Vec::with_capacity(data.len() * dim);
    for (row, point) in data.iter().enumerate() {
        if point.len() != dim {
            return Err(Error::DimensionMismatch {
                row,
                expected: dim,
                found: point.len(),
            });
        }
        if let Some(column) = point.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteValue { row, column });
        }
        values.extend(point.iter().map(|&x| f64::from(x)));
    }

    Ok(Points { values, dim })
}

/// Require at least two distinct clusters.
pub(crate) fn require_two_clusters(
    metric: &'static str,
    partition: &Partition,
    n_samples: usize,
) -> Result<()> {
    if partition.n_groups() < 2 {
        return Err(Error::InsufficientClusters {
            metric,
            n_clusters: partition.n_groups(),
            n_samples,
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Number of unordered pairs among `n` items.
#[inline]
pub(crate) fn comb2(n: u64) -> u64 {
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_encodes_in_first_seen_order() {
        let p = Partition::new(&["b", "a", "b", "c", "a"]);
        assert_eq!(p.ids, vec![0, 1, 0, 2, 1]);
        assert_eq!(p.sizes, vec![2, 2, 1]);
        assert_eq!(p.members(), vec![vec![0, 2], vec![1, 4], vec![3]]);
    }

    #[test]
    fn features_reject_ragged_rows() {
        let data = vec![vec![0.0, 1.0], vec![2.0]];
        let err = check_features(&data, &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn features_reject_length_mismatch() {
        let data = vec![vec![0.0], vec![1.0]];
        assert!(matches!(
            check_features(&data, &[0]),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn features_reject_non_finite_values() {
        let nan = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![4.0, 0.0], vec![f32::NAN, 1.0]];
        assert_eq!(
            check_features(&nan, &[0, 0, 1, 1]).unwrap_err(),
            Error::NonFiniteValue { row: 3, column: 0 }
        );

        let inf = vec![vec![0.0], vec![f32::NEG_INFINITY]];
        let err = check_features(&inf, &[0, 1]).unwrap_err();
        assert_eq!(err, Error::NonFiniteValue { row: 1, column: 0 });
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidInput);
    }

    #[test]
    fn points_mean() {
        let data = vec![vec![0.0, 0.0], vec![2.0, 4.0], vec![4.0, 2.0]];
        let points = check_features(&data, &[0, 0, 1]).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points.mean(None), vec![2.0, 2.0]);
        assert_eq!(points.mean(Some(&[0usize, 1][..])), vec![1.0, 2.0]);
    }

    #[test]
    fn comb2_small_values() {
        assert_eq!(comb2(0), 0);
        assert_eq!(comb2(1), 0);
        assert_eq!(comb2(2), 1);
        assert_eq!(comb2(17), 136);
    }
}
