//! Type definitions for centroid clustering.
//!
//! Contains the validated input dataset and the core types representing
//! clusters and clustering results.

use serde::{Deserialize, Serialize};

use crate::error::{ClusteringError, Result};

/// A validated, immutable set of points sharing one dimensionality.
///
/// Construction checks that the dataset is non-empty and that every point
/// has the same number of coordinates. Once built, the dataset cannot be
/// mutated for the duration of a clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<Vec<f64>>,
    dim: usize,
}

impl Dataset {
    /// Create a dataset from raw points with validation.
    ///
    /// # Errors
    ///
    /// - [`ClusteringError::EmptyDataset`] if `points` is empty
    /// - [`ClusteringError::InvalidParameter`] if points have no coordinates
    /// - [`ClusteringError::DimensionMismatch`] if points disagree on
    ///   dimensionality
    pub fn new(points: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = points.first() else {
            return Err(ClusteringError::EmptyDataset);
        };
        let dim = first.len();
        if dim == 0 {
            return Err(ClusteringError::InvalidParameter(
                "points must have at least one coordinate".into(),
            ));
        }
        for point in &points {
            if point.len() != dim {
                return Err(ClusteringError::DimensionMismatch {
                    expected: dim,
                    actual: point.len(),
                });
            }
        }

        Ok(Self { points, dim })
    }

    /// All points, in insertion order.
    #[inline]
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Number of points (n).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A validated dataset is never empty; this exists for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dimensionality (d) shared by all points.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }
}

/// A cluster of points sharing the same nearest centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster centroid.
    ///
    /// Mean of the member points, or the previous centroid if the cluster
    /// ended the run with no members.
    pub centroid: Vec<f64>,

    /// Indices into the dataset of the points assigned to this cluster.
    pub members: Vec<usize>,
}

impl Cluster {
    /// Create a new cluster.
    pub fn new(centroid: Vec<f64>, members: Vec<usize>) -> Self {
        Self { centroid, members }
    }

    /// Check if the cluster has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members in this cluster.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }
}

/// Result of a k-means clustering run.
///
/// Contains the final centroids and assignment plus convergence information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult {
    /// Final centroids. Length equals k from the configuration.
    pub centroids: Vec<Vec<f64>>,

    /// Cluster index for each point, in dataset order. Length equals n.
    pub assignments: Vec<usize>,

    /// Per-cluster view: centroid plus member indices.
    pub clusters: Vec<Cluster>,

    /// Number of iterations run.
    ///
    /// If `converged` is false, this equals max_iterations.
    pub iterations: usize,

    /// Whether convergence was achieved.
    ///
    /// True if centroid movement fell below the configured tolerance.
    pub converged: bool,

    /// Total within-cluster sum of squares (WCSS).
    ///
    /// Sum of squared distances from each point to its assigned centroid.
    /// Lower values indicate tighter clusters.
    pub wcss: f64,
}

impl ClusteringResult {
    /// Number of clusters.
    #[inline]
    pub fn num_clusters(&self) -> usize {
        self.centroids.len()
    }

    /// Total number of points across all clusters.
    pub fn total_points(&self) -> usize {
        self.clusters.iter().map(|c| c.len()).sum()
    }

    /// Member count per cluster, in cluster order.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(|c| c.len()).collect()
    }

    /// Average cluster size.
    pub fn avg_cluster_size(&self) -> f64 {
        if self.clusters.is_empty() {
            0.0
        } else {
            self.total_points() as f64 / self.clusters.len() as f64
        }
    }
}
