//! Score bundles for presentation layers.
//!
//! A notebook or CLI usually prints every metric of one family at once.
//! These helpers build the contingency table (or validate the feature matrix)
//! once and fill a plain struct.

use std::fmt;
use std::hash::Hash;

use super::calinski_harabasz;
use super::contingency::Contingency;
use super::davies_bouldin;
use super::distance::DistanceMetric;
use super::information::{
    hcv_from, mutual_information_from, normalized_mutual_information_from, HcvScore,
    NmiNormalization,
};
use super::pairs::{adjusted_rand_index_from, purity_from, rand_index_from};
use super::silhouette;
use super::util::{check_features, Partition};
use crate::error::Result;

/// Label-based (external) scores against ground truth.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalScores {
    /// Majority-class share.
    pub purity: f64,
    /// Rand Index.
    pub rand_index: f64,
    /// Adjusted Rand Index.
    pub adjusted_rand_index: f64,
    /// Mutual information in nats.
    pub mutual_information: f64,
    /// Normalized mutual information.
    pub normalized_mutual_information: f64,
    /// Homogeneity, completeness, V-measure.
    pub hcv: HcvScore,
}

impl ExternalScores {
    /// Compute every label-based score with arithmetic NMI normalization.
    pub fn compute<T, P>(labels_true: &[T], labels_pred: &[P]) -> Result<Self>
    where
        T: Eq + Hash,
        P: Eq + Hash,
    {
        Self::compute_with(labels_true, labels_pred, NmiNormalization::default())
    }

    /// Compute every label-based score with the given NMI normalization.
    pub fn compute_with<T, P>(
        labels_true: &[T],
        labels_pred: &[P],
        normalization: NmiNormalization,
    ) -> Result<Self>
    where
        T: Eq + Hash,
        P: Eq + Hash,
    {
        let table = Contingency::new(labels_true, labels_pred)?;
        Ok(Self {
            purity: purity_from(&table),
            rand_index: rand_index_from(&table),
            adjusted_rand_index: adjusted_rand_index_from(&table)?,
            mutual_information: mutual_information_from(&table),
            normalized_mutual_information: normalized_mutual_information_from(
                &table,
                normalization,
            )?,
            hcv: hcv_from(&table),
        })
    }
}

impl fmt::Display for ExternalScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "purity                 {:.4}", self.purity)?;
        writeln!(f, "rand index             {:.4}", self.rand_index)?;
        writeln!(f, "adjusted rand index    {:.4}", self.adjusted_rand_index)?;
        writeln!(f, "mutual information     {:.4}", self.mutual_information)?;
        writeln!(f, "normalized MI          {:.4}", self.normalized_mutual_information)?;
        writeln!(f, "homogeneity            {:.4}", self.hcv.homogeneity)?;
        writeln!(f, "completeness           {:.4}", self.hcv.completeness)?;
        write!(f, "v-measure              {:.4}", self.hcv.v_measure)
    }
}

/// Configuration for [`InternalScores`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InternalConfig {
    /// Distance for silhouette and Davies-Bouldin. Calinski-Harabasz always
    /// uses squared Euclidean distance.
    pub distance: DistanceMetric,
}

/// Distance-based (internal) scores; no ground truth needed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InternalScores {
    /// Mean silhouette coefficient.
    pub silhouette: f64,
    /// Davies-Bouldin index (lower is better).
    pub davies_bouldin: f64,
    /// Calinski-Harabasz index (higher is better).
    pub calinski_harabasz: f64,
}

impl InternalScores {
    /// Compute every distance-based score.
    pub fn compute<P: Eq + Hash>(
        data: &[Vec<f32>],
        labels: &[P],
        config: &InternalConfig,
    ) -> Result<Self> {
        let points = check_features(data, labels)?;
        let partition = Partition::new(labels);
        Ok(Self {
            silhouette: silhouette::score_from(&points, &partition, &config.distance)?,
            davies_bouldin: davies_bouldin::index_from(&points, &partition, &config.distance)?,
            calinski_harabasz: calinski_harabasz::index_from(&points, &partition)?,
        })
    }
}

impl fmt::Display for InternalScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "silhouette             {:.4}", self.silhouette)?;
        writeln!(f, "davies-bouldin         {:.4}", self.davies_bouldin)?;
        write!(f, "calinski-harabasz      {:.4}", self.calinski_harabasz)
    }
}
