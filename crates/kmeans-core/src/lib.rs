//! Iterative centroid clustering (Lloyd's k-means).
//!
//! # CRITICAL: NO FALLBACKS
//!
//! Invalid inputs are rejected before any work is done. If the inputs pass
//! validation, the call always returns a complete result: running out of the
//! iteration budget is a valid outcome, not an error.
//!
//! # Overview
//!
//! This crate partitions a fixed set of points in a low-dimensional numeric
//! space into k groups by alternating nearest-assignment and
//! centroid-recomputation until stable.
//!
//! # Algorithm
//!
//! 1. Initialize k centroids (uniform random draw of k distinct data points
//!    by default; k-means++ and caller-provided centroids are also supported)
//! 2. Assign each point to its nearest centroid (Euclidean distance, ties
//!    break to the lowest cluster index)
//! 3. Recompute each centroid as the mean of its assigned points; a cluster
//!    with no members keeps its previous centroid
//! 4. Repeat until centroid movement falls below the tolerance or the
//!    iteration budget is exhausted
//!
//! # Determinism
//!
//! All randomness flows through an injected [`rand::Rng`]. There is no
//! process-wide random state: the same dataset, configuration, and seed
//! always produce the same result. See [`cluster_with_seed`].
//!
//! # Fail-Fast Validation
//!
//! - the dataset must not be empty and all points must share one dimensionality
//! - k must be > 0 and <= the number of points
//! - max_iterations must be > 0
//! - tolerance must be finite and >= 0.0
//!
//! # Example
//!
//! ```
//! use kmeans_core::{cluster_with_seed, Dataset, KMeansConfig};
//!
//! let data = Dataset::new(vec![
//!     vec![1.0, 1.0],
//!     vec![1.0, 2.0],
//!     vec![9.0, 9.0],
//!     vec![9.0, 8.0],
//! ])
//! .unwrap();
//! let config = KMeansConfig::with_k(2).unwrap();
//!
//! let result = cluster_with_seed(&data, &config, 42).unwrap();
//! assert_eq!(result.num_clusters(), 2);
//! assert_eq!(result.assignments.len(), 4);
//! ```

pub mod algorithms;
mod clusterer;
mod config;
mod error;
pub mod metrics;
mod types;

#[cfg(test)]
mod tests;

pub use clusterer::{cluster_with_seed, CentroidClustering, LloydKMeans};
pub use config::{ConvergencePolicy, KMeansConfig, KMeansInit};
pub use error::{ClusteringError, Result};
pub use types::{Cluster, ClusteringResult, Dataset};
