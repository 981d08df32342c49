//! Lloyd's k-means loop.
//!
//! Provides the [`LloydKMeans`] implementation behind the
//! [`CentroidClustering`] trait seam.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::algorithms::{
    assign_points, build_clusters, converged_under, kmeans_plus_plus_init, random_init,
    update_centroids,
};
use crate::config::{KMeansConfig, KMeansInit};
use crate::error::{ClusteringError, Result};
use crate::metrics::wcss;
use crate::types::{ClusteringResult, Dataset};

/// Trait for iterative centroid clustering over a dataset.
///
/// Implementors partition the dataset into `config.k` clusters. All
/// randomness flows through the caller-supplied RNG so results are
/// reproducible from a seed.
pub trait CentroidClustering {
    /// Cluster the dataset using the given configuration and random source.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::InvalidK`] if `config.k` is 0 or exceeds
    /// the number of points, and [`ClusteringError::DimensionMismatch`] /
    /// [`ClusteringError::InvalidParameter`] if caller-provided initial
    /// centroids do not match k and the dataset's dimensionality.
    ///
    /// # Fail-Fast
    ///
    /// Invalid inputs cause immediate errors before any iteration runs.
    /// Exhausting `max_iterations` is a valid outcome, not an error.
    fn cluster<R: Rng + ?Sized>(
        &self,
        data: &Dataset,
        config: &KMeansConfig,
        rng: &mut R,
    ) -> Result<ClusteringResult>;

    /// Assign new points to the nearest of previously fitted centroids.
    ///
    /// Uses the same tie-break rule as the assignment step: exact ties go
    /// to the lowest cluster index.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::InvalidParameter`] if `centroids` is
    /// empty and [`ClusteringError::DimensionMismatch`] if centroids do not
    /// match the dataset's dimensionality.
    fn predict(&self, centroids: &[Vec<f64>], data: &Dataset) -> Result<Vec<usize>>;
}

/// Standard Lloyd's algorithm.
///
/// Alternates a full nearest-centroid assignment pass with a coordinate-wise
/// mean update until centroid movement falls below the configured tolerance
/// or the iteration budget is exhausted. A cluster that receives no points
/// keeps its previous centroid.
#[derive(Clone, Debug, Default)]
pub struct LloydKMeans;

impl LloydKMeans {
    /// Create a new clusterer.
    pub fn new() -> Self {
        Self
    }

    fn initial_centroids<R: Rng + ?Sized>(
        &self,
        data: &Dataset,
        config: &KMeansConfig,
        rng: &mut R,
    ) -> Result<Vec<Vec<f64>>> {
        match &config.init {
            KMeansInit::Random => Ok(random_init(data.points(), config.k, rng)),
            KMeansInit::KMeansPlusPlus => {
                Ok(kmeans_plus_plus_init(data.points(), config.k, rng))
            }
            KMeansInit::Points(centroids) => {
                if centroids.len() != config.k {
                    return Err(ClusteringError::InvalidParameter(format!(
                        "init points count ({}) must equal k ({})",
                        centroids.len(),
                        config.k
                    )));
                }
                for centroid in centroids {
                    if centroid.len() != data.dim() {
                        return Err(ClusteringError::DimensionMismatch {
                            expected: data.dim(),
                            actual: centroid.len(),
                        });
                    }
                }
                Ok(centroids.clone())
            }
        }
    }
}

impl CentroidClustering for LloydKMeans {
    fn cluster<R: Rng + ?Sized>(
        &self,
        data: &Dataset,
        config: &KMeansConfig,
        rng: &mut R,
    ) -> Result<ClusteringResult> {
        // FAIL FAST: validate inputs before any work
        let n = data.len();
        if config.k == 0 || config.k > n {
            return Err(ClusteringError::InvalidK { k: config.k, n });
        }

        debug!(
            k = config.k,
            n,
            max_iterations = config.max_iterations,
            tolerance = config.tolerance,
            "starting k-means"
        );

        let points = data.points();
        let mut centroids = self.initial_centroids(data, config, rng)?;

        let mut assignments = vec![0usize; n];
        let mut iterations = 0;
        let mut converged = false;

        for iter in 0..config.max_iterations {
            iterations = iter + 1;

            // Assignment step: full recompute, nearest centroid wins
            assign_points(points, &centroids, &mut assignments);

            // Update step: empty clusters keep their previous centroid
            let new_centroids = update_centroids(points, &assignments, &centroids);

            // Recompute-then-check: commit the new centroids, then compare
            // them against the pre-commit ones
            let done = converged_under(
                &centroids,
                &new_centroids,
                config.convergence,
                config.tolerance,
            );
            centroids = new_centroids;

            trace!(iteration = iterations, converged = done, "k-means step");

            if done {
                converged = true;
                break;
            }
        }

        let clusters = build_clusters(&assignments, &centroids);
        let total_wcss = wcss(points, &assignments, &centroids);

        debug!(
            iterations,
            converged,
            wcss = total_wcss,
            "k-means finished"
        );

        Ok(ClusteringResult {
            centroids,
            assignments,
            clusters,
            iterations,
            converged,
            wcss: total_wcss,
        })
    }

    fn predict(&self, centroids: &[Vec<f64>], data: &Dataset) -> Result<Vec<usize>> {
        if centroids.is_empty() {
            return Err(ClusteringError::InvalidParameter(
                "centroids must not be empty".into(),
            ));
        }
        for centroid in centroids {
            if centroid.len() != data.dim() {
                return Err(ClusteringError::DimensionMismatch {
                    expected: data.dim(),
                    actual: centroid.len(),
                });
            }
        }

        let mut assignments = vec![0usize; data.len()];
        assign_points(data.points(), centroids, &mut assignments);
        Ok(assignments)
    }
}

/// Cluster with a deterministic seed.
///
/// Convenience wrapper constructing a [`ChaCha8Rng`] from the seed, so the
/// same dataset, configuration, and seed always produce the same result.
///
/// # Errors
///
/// Same as [`CentroidClustering::cluster`].
pub fn cluster_with_seed(
    data: &Dataset,
    config: &KMeansConfig,
    seed: u64,
) -> Result<ClusteringResult> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    LloydKMeans::new().cluster(data, config, &mut rng)
}
