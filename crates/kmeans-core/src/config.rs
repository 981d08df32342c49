//! Configuration for k-means clustering.
//!
//! Provides validated configuration for clustering parameters.

use serde::{Deserialize, Serialize};

use crate::error::{ClusteringError, Result};

/// Centroid initialization strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum KMeansInit {
    /// Draw k distinct data points uniformly without replacement (default).
    #[default]
    Random,
    /// K-means++ seeding: first centroid uniform, the rest chosen with
    /// probability proportional to squared distance from existing centroids.
    KMeansPlusPlus,
    /// Caller-provided initial centroids. Must contain exactly k points of
    /// the dataset's dimensionality.
    Points(Vec<Vec<f64>>),
}

/// Convergence policy for the centroid-movement check.
///
/// The per-coordinate absolute check is the historical behavior; the other
/// policies are explicit opt-ins, not silent changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvergencePolicy {
    /// Converged when every coordinate of every centroid moved strictly
    /// less than `tolerance` (default).
    #[default]
    AbsolutePerCoordinate,
    /// Converged when the largest Euclidean centroid movement is strictly
    /// less than `tolerance`.
    AbsoluteNorm,
    /// Converged when every coordinate moved strictly less than
    /// `tolerance * (1 + |old coordinate|)`.
    RelativePerCoordinate,
}

/// Configuration for k-means clustering.
///
/// # Validation
///
/// All parameters are validated at construction time.
/// Invalid configurations result in immediate errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KMeansConfig {
    /// Number of clusters (k).
    ///
    /// Must be > 0 and <= number of data points (the upper bound is checked
    /// against the dataset when clustering starts).
    pub k: usize,

    /// Maximum iterations before stopping.
    ///
    /// Must be > 0. Typical values: 50-300.
    pub max_iterations: usize,

    /// Tolerance on centroid movement.
    ///
    /// Iteration stops when movement falls below this under the configured
    /// [`ConvergencePolicy`]. Must be finite and >= 0.0.
    pub tolerance: f64,

    /// Centroid initialization strategy.
    pub init: KMeansInit,

    /// Convergence policy applied to centroid movement.
    pub convergence: ConvergencePolicy,
}

impl KMeansConfig {
    /// Create a new configuration with validation.
    ///
    /// # Arguments
    ///
    /// * `k` - Number of clusters (must be > 0)
    /// * `max_iterations` - Maximum iterations (must be > 0)
    /// * `tolerance` - Centroid-movement tolerance (must be finite, >= 0.0)
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::InvalidParameter`] if any parameter is
    /// invalid, [`ClusteringError::InvalidK`] if k is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use kmeans_core::KMeansConfig;
    ///
    /// let config = KMeansConfig::new(5, 100, 1e-6).unwrap();
    /// assert_eq!(config.k, 5);
    /// ```
    pub fn new(k: usize, max_iterations: usize, tolerance: f64) -> Result<Self> {
        if k == 0 {
            return Err(ClusteringError::InvalidK { k, n: 0 });
        }
        if max_iterations == 0 {
            return Err(ClusteringError::InvalidParameter(
                "max_iterations must be > 0".into(),
            ));
        }
        if !tolerance.is_finite() {
            return Err(ClusteringError::InvalidParameter(
                "tolerance must be a finite number".into(),
            ));
        }
        if tolerance < 0.0 {
            return Err(ClusteringError::InvalidParameter(
                "tolerance must be >= 0.0".into(),
            ));
        }

        Ok(Self {
            k,
            max_iterations,
            tolerance,
            init: KMeansInit::default(),
            convergence: ConvergencePolicy::default(),
        })
    }

    /// Create a default configuration for the given number of clusters.
    ///
    /// Uses max_iterations=100 and tolerance=1e-6.
    ///
    /// # Errors
    ///
    /// Returns error if k is 0.
    pub fn with_k(k: usize) -> Result<Self> {
        Self::new(k, 100, 1e-6)
    }

    /// Set the initialization strategy.
    pub fn with_init(mut self, init: KMeansInit) -> Self {
        self.init = init;
        self
    }

    /// Set the convergence policy.
    pub fn with_convergence(mut self, convergence: ConvergencePolicy) -> Self {
        self.convergence = convergence;
        self
    }
}

impl Default for KMeansConfig {
    /// Default configuration: k=3, max_iterations=100, tolerance=1e-6,
    /// random initialization, per-coordinate absolute convergence.
    fn default() -> Self {
        Self {
            k: 3,
            max_iterations: 100,
            tolerance: 1e-6,
            init: KMeansInit::default(),
            convergence: ConvergencePolicy::default(),
        }
    }
}
