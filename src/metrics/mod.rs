//! Metrics for judging a clustering.
//!
//! ## External vs Internal Metrics
//!
//! **External** (label-based) metrics compare a predicted clustering against
//! ground-truth classes. They only need the two label sequences, and they are
//! invariant to how either side names its groups: `[0, 0, 1]` and
//! `["b", "b", "a"]` describe the same partition.
//!
//! **Internal** (distance-based) metrics need no ground truth. They look at
//! the feature vectors and ask whether clusters are compact and well
//! separated. They also depend only on the partition, not on the ids used.
//!
//! ## Metrics (implemented)
//!
//! | metric | kind | range | better |
//! |---|---|---|---|
//! | [`purity`] | external | [0, 1] | higher |
//! | [`rand_index`] | external | [0, 1] | higher |
//! | [`adjusted_rand_index`] | external | [-1, 1] | higher |
//! | [`mutual_information`] | external | [0, ∞) nats | higher |
//! | [`normalized_mutual_information`] | external | [0, 1] | higher |
//! | [`homogeneity_completeness_v_measure`] | external | [0, 1] each | higher |
//! | [`silhouette_score`] | internal | [-1, 1] | higher |
//! | [`davies_bouldin_index`] | internal | [0, ∞) | lower |
//! | [`calinski_harabasz_index`] | internal | [0, ∞) | higher |
//!
//! ### Which one?
//!
//! - Purity is easy to explain but rewards over-splitting: N singleton
//!   clusters score 1.
//! - The Rand Index is inflated by the many pairs that are "apart in both";
//!   prefer the chance-corrected ARI when comparing clusterings.
//! - NMI is a good default external score when cluster counts differ.
//! - Silhouette works with any distance; Davies-Bouldin and
//!   Calinski-Harabasz assume roughly convex clusters because they go
//!   through centroids.
//!
//! ## Usage
//!
//! ```rust
//! use clump_metrics::metrics::{
//!     adjusted_rand_index, calinski_harabasz_index, normalized_mutual_information, purity,
//!     silhouette_score,
//! };
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//! let truth = ["a", "a", "b", "b"];
//! let pred = [1, 1, 0, 0];
//!
//! // External: ids differ, partition is the same.
//! assert_eq!(purity(&truth, &pred).unwrap(), 1.0);
//! assert!((adjusted_rand_index(&truth, &pred).unwrap() - 1.0).abs() < 1e-12);
//! assert!((normalized_mutual_information(&truth, &pred).unwrap() - 1.0).abs() < 1e-12);
//!
//! // Internal: compact, well separated clusters.
//! assert!(silhouette_score(&data, &pred).unwrap() > 0.9);
//! assert!(calinski_harabasz_index(&data, &pred).unwrap() > 100.0);
//! ```

mod calinski_harabasz;
mod contingency;
mod davies_bouldin;
mod distance;
mod information;
mod pairs;
mod report;
mod silhouette;
mod traits;
mod util;

pub use calinski_harabasz::calinski_harabasz_index;
pub use contingency::{pair_confusion, Contingency, PairConfusion};
pub use davies_bouldin::{davies_bouldin_index, davies_bouldin_index_with};
pub use distance::DistanceMetric;
pub use information::{
    entropy, homogeneity_completeness_v_measure, mutual_information, normalized_mutual_information,
    normalized_mutual_information_with, HcvScore, NmiNormalization,
};
pub use pairs::{adjusted_rand_index, purity, rand_index};
pub use report::{ExternalScores, InternalConfig, InternalScores};
pub use silhouette::{
    silhouette_samples, silhouette_samples_with, silhouette_score, silhouette_score_with,
};
pub use traits::Distance;
