//! Clustering evaluation metrics.
//!
//! `clump-metrics` is a small, dependency-light library that scores a hard
//! clustering, either against ground-truth labels or from the geometry of the
//! clustered points alone.
//!
//! The primary public API is under [`metrics`], which provides:
//! - label-based scores: purity, Rand Index, Adjusted Rand Index, mutual
//!   information, normalized mutual information, homogeneity / completeness /
//!   V-measure
//! - distance-based scores: silhouette, Davies-Bouldin, Calinski-Harabasz
//!
//! Every function is pure and stateless. Each metric emits one `tracing`
//! debug event; install a subscriber to see them.

#![forbid(unsafe_code)]

pub mod error;
pub mod metrics;

pub use error::{Error, ErrorKind, Result};
pub use metrics::{
    adjusted_rand_index, calinski_harabasz_index, davies_bouldin_index, davies_bouldin_index_with,
    entropy, homogeneity_completeness_v_measure, mutual_information, normalized_mutual_information,
    normalized_mutual_information_with, pair_confusion, purity, rand_index, silhouette_samples,
    silhouette_samples_with, silhouette_score, silhouette_score_with, Contingency, Distance,
    DistanceMetric, ExternalScores, HcvScore, InternalConfig, InternalScores, NmiNormalization,
    PairConfusion,
};
