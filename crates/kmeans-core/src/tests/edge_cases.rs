//! Edge case and boundary condition tests for clustering.

use crate::clusterer::{cluster_with_seed, CentroidClustering, LloydKMeans};
use crate::config::{KMeansConfig, KMeansInit};
use crate::error::ClusteringError;
use crate::types::Dataset;

use super::helpers::{dataset_2d, seeded_rng};

#[test]
fn test_cluster_empty_dataset_fails() {
    let result = Dataset::new(vec![]);

    assert!(matches!(result, Err(ClusteringError::EmptyDataset)));

    println!("[VERIFIED] FAIL FAST: empty dataset is rejected at construction");
}

#[test]
fn test_cluster_k_greater_than_n_fails() {
    let data = dataset_2d(&[[0.0, 0.0]]);
    let config = KMeansConfig::new(5, 100, 1e-6).unwrap(); // k=5 but only 1 point

    let result = cluster_with_seed(&data, &config, 0);

    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("k (5)"));
    assert!(msg.contains("(1)"));

    println!("[VERIFIED] FAIL FAST: clustering rejects k > n: {}", msg);
}

#[test]
fn test_dataset_rejects_mismatched_dimensions() {
    let result = Dataset::new(vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]);

    assert!(matches!(
        result,
        Err(ClusteringError::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    ));

    println!("[VERIFIED] FAIL FAST: mismatched point dimensionality is rejected");
}

#[test]
fn test_dataset_rejects_zero_dimensional_points() {
    let result = Dataset::new(vec![vec![], vec![]]);

    assert!(matches!(result, Err(ClusteringError::InvalidParameter(_))));

    println!("[VERIFIED] FAIL FAST: zero-dimensional points are rejected");
}

#[test]
fn test_cluster_max_iterations_reached() {
    // Irregularly spaced collinear points so no assignment is stable after
    // a single update
    let points: Vec<Vec<f64>> = (0..20)
        .map(|i| vec![i as f64 * 1.3 + (i * i) as f64 * 0.07, 0.0])
        .collect();
    let data = Dataset::new(points).unwrap();

    // Very few iterations, effectively unreachable tolerance
    let config = KMeansConfig::new(5, 2, 1e-12).unwrap();

    let result = cluster_with_seed(&data, &config, 9).unwrap();

    assert_eq!(result.iterations, 2);

    println!(
        "[VERIFIED] Clustering respects max_iterations limit (converged={})",
        result.converged
    );
}

#[test]
fn test_k_equals_n_yields_singletons() {
    let data = dataset_2d(&[
        [0.0, 0.0],
        [1.0, 3.0],
        [4.0, 1.0],
        [7.0, 7.0],
        [2.0, 9.0],
        [8.0, 2.0],
    ]);
    let config = KMeansConfig::new(6, 100, 1e-6).unwrap();

    let result = cluster_with_seed(&data, &config, 21).unwrap();

    assert!(result.converged);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.wcss, 0.0);
    assert!(result.clusters.iter().all(|c| c.len() == 1));

    // Every centroid coincides with its single member
    for cluster in &result.clusters {
        let member = &data.points()[cluster.members[0]];
        assert_eq!(&cluster.centroid, member);
    }

    println!("[VERIFIED] k == n produces singleton clusters with WCSS = 0");
}

#[test]
fn test_empty_cluster_centroid_stays_frozen() {
    // The second initial centroid is a far outlier that attracts no points
    let data = dataset_2d(&[[0.0, 0.0], [0.1, 0.0], [0.0, 0.1], [0.2, 0.1]]);
    let config = KMeansConfig::new(2, 50, 1e-6)
        .unwrap()
        .with_init(KMeansInit::Points(vec![
            vec![0.05, 0.05],
            vec![100.0, 100.0],
        ]));

    let result = cluster_with_seed(&data, &config, 0).unwrap();

    assert!(result.converged);
    assert!(result.iterations <= 50);

    // The outlier centroid is left exactly as seeded: not NaN, not zeroed
    assert!(result.clusters[1].is_empty());
    assert_eq!(result.centroids[1], vec![100.0, 100.0]);
    assert!(result.centroids[1].iter().all(|c| c.is_finite()));

    // All four points live in the first cluster
    assert_eq!(result.clusters[0].len(), 4);

    println!(
        "[VERIFIED] Empty cluster keeps its previous centroid (iterations={})",
        result.iterations
    );
}

#[test]
fn test_init_points_count_must_match_k() {
    let data = dataset_2d(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    let config = KMeansConfig::new(2, 100, 1e-6)
        .unwrap()
        .with_init(KMeansInit::Points(vec![vec![0.0, 0.0]])); // 1 point, k=2

    let result = cluster_with_seed(&data, &config, 0);

    assert!(matches!(result, Err(ClusteringError::InvalidParameter(_))));

    println!("[VERIFIED] FAIL FAST: init points count must equal k");
}

#[test]
fn test_init_points_dimensionality_must_match_data() {
    let data = dataset_2d(&[[0.0, 0.0], [1.0, 1.0]]);
    let config = KMeansConfig::new(1, 100, 1e-6)
        .unwrap()
        .with_init(KMeansInit::Points(vec![vec![0.0, 0.0, 0.0]]));

    let result = cluster_with_seed(&data, &config, 0);

    assert!(matches!(
        result,
        Err(ClusteringError::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    ));

    println!("[VERIFIED] FAIL FAST: init points must match dataset dimensionality");
}

#[test]
fn test_predict_rejects_bad_centroids() {
    let clusterer = LloydKMeans::new();
    let data = dataset_2d(&[[0.0, 0.0]]);

    let empty: Vec<Vec<f64>> = vec![];
    assert!(clusterer.predict(&empty, &data).is_err());

    let wrong_dim = vec![vec![0.0, 0.0, 0.0]];
    assert!(matches!(
        clusterer.predict(&wrong_dim, &data),
        Err(ClusteringError::DimensionMismatch { .. })
    ));

    println!("[VERIFIED] FAIL FAST: predict validates centroids");
}

#[test]
fn test_single_point_single_cluster() {
    let data = dataset_2d(&[[0.5, 0.5]]);
    let config = KMeansConfig::new(1, 100, 1e-6).unwrap();

    let result = cluster_with_seed(&data, &config, 0).unwrap();

    assert!(result.converged);
    assert_eq!(result.num_clusters(), 1);
    assert_eq!(result.assignments, vec![0]);
    assert_eq!(result.centroids[0], vec![0.5, 0.5]);
    assert_eq!(result.wcss, 0.0);

    println!("[VERIFIED] Single point clustering works correctly");
}

#[test]
fn test_all_identical_points() {
    let points: Vec<Vec<f64>> = (0..5).map(|_| vec![0.5, 0.5]).collect();
    let data = Dataset::new(points).unwrap();
    let config = KMeansConfig::new(2, 100, 1e-6).unwrap();

    let clusterer = LloydKMeans::new();
    let mut rng = seeded_rng(13);
    let result = clusterer.cluster(&data, &config, &mut rng).unwrap();

    assert_eq!(result.num_clusters(), 2);
    assert_eq!(result.total_points(), 5);
    assert!(result.wcss < 1e-12);

    println!("[VERIFIED] Identical points cluster without NaN (edge case)");
}

#[test]
fn test_result_clone_and_debug() {
    let data = dataset_2d(&[[0.1, 0.2], [0.3, 0.4]]);
    let config = KMeansConfig::new(1, 10, 1e-6).unwrap();

    let result = cluster_with_seed(&data, &config, 0).unwrap();

    let cloned = result.clone();
    assert_eq!(cloned.num_clusters(), result.num_clusters());
    assert_eq!(cloned.iterations, result.iterations);

    let debug_str = format!("{:?}", result);
    assert!(debug_str.contains("ClusteringResult"));

    println!("[VERIFIED] ClusteringResult implements Clone and Debug");
}
