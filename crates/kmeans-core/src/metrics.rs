//! Distance metrics for clustering.
//!
//! Explicit nested-loop Euclidean distance over coordinate slices; no
//! implicit broadcasting.

/// Compute squared Euclidean distance between two points.
///
/// Uses squared distance to avoid sqrt for comparison.
#[inline]
pub fn euclidean_distance_squared(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Compute Euclidean distance between two points.
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Compute within-cluster sum of squares.
pub fn wcss(points: &[Vec<f64>], assignments: &[usize], centroids: &[Vec<f64>]) -> f64 {
    points
        .iter()
        .zip(assignments.iter())
        .map(|(point, &cluster)| euclidean_distance_squared(point, &centroids[cluster]))
        .sum()
}
