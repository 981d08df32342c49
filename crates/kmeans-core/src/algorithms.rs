//! Clustering algorithm building blocks.
//!
//! Contains centroid initialization, the assignment and update steps, and
//! the convergence check. Each function is a pure step of Lloyd's loop so
//! that tests can exercise them independently.

use rand::Rng;

use crate::config::ConvergencePolicy;
use crate::metrics::{euclidean_distance, euclidean_distance_squared};
use crate::types::Cluster;

/// Draw k distinct data points uniformly without replacement as initial
/// centroids.
///
/// The caller guarantees `k <= points.len()`.
pub fn random_init<R: Rng + ?Sized>(points: &[Vec<f64>], k: usize, rng: &mut R) -> Vec<Vec<f64>> {
    rand::seq::index::sample(rng, points.len(), k)
        .iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Initialize centroids using the k-means++ algorithm.
///
/// The first centroid is drawn uniformly; each subsequent centroid is drawn
/// with probability proportional to its squared distance from the nearest
/// existing centroid.
pub fn kmeans_plus_plus_init<R: Rng + ?Sized>(
    points: &[Vec<f64>],
    k: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..n)].clone());

    // Squared distance from each point to its nearest chosen centroid
    let mut min_distances = vec![f64::MAX; n];

    for _ in 1..k {
        let last = centroids.last().expect("at least one centroid chosen");
        for (i, point) in points.iter().enumerate() {
            let dist = euclidean_distance_squared(point, last);
            if dist < min_distances[i] {
                min_distances[i] = dist;
            }
        }

        let total: f64 = min_distances.iter().sum();
        if total <= 0.0 {
            // All remaining points coincide with chosen centroids; take the
            // first point not already selected.
            let next = points
                .iter()
                .find(|p| {
                    !centroids
                        .iter()
                        .any(|c| euclidean_distance_squared(c, p) < 1e-12)
                })
                .unwrap_or(&points[0]);
            centroids.push(next.clone());
            continue;
        }

        // Weighted draw: walk the cumulative D^2 mass until the threshold
        let threshold = rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        let mut chosen = n - 1;
        for (i, &dist) in min_distances.iter().enumerate() {
            cumulative += dist;
            if cumulative >= threshold {
                chosen = i;
                break;
            }
        }
        centroids.push(points[chosen].clone());
    }

    centroids
}

/// Assignment step: write the nearest-centroid index for every point.
///
/// Exact distance ties break to the lowest cluster index (strict `<` scan
/// in ascending centroid order).
pub fn assign_points(points: &[Vec<f64>], centroids: &[Vec<f64>], assignments: &mut [usize]) {
    for (i, point) in points.iter().enumerate() {
        let mut min_dist = f64::INFINITY;
        let mut best_cluster = 0;

        for (j, centroid) in centroids.iter().enumerate() {
            let dist = euclidean_distance_squared(point, centroid);
            if dist < min_dist {
                min_dist = dist;
                best_cluster = j;
            }
        }

        assignments[i] = best_cluster;
    }
}

/// Update step: recompute each centroid as the coordinate-wise mean of its
/// assigned points.
///
/// A cluster with zero members keeps its previous centroid unchanged; it is
/// neither zeroed nor re-seeded.
pub fn update_centroids(
    points: &[Vec<f64>],
    assignments: &[usize],
    previous: &[Vec<f64>],
) -> Vec<Vec<f64>> {
    let k = previous.len();
    let dim = previous.first().map_or(0, Vec::len);

    let mut sums = vec![vec![0.0f64; dim]; k];
    let mut counts = vec![0usize; k];

    for (point, &cluster) in points.iter().zip(assignments.iter()) {
        counts[cluster] += 1;
        for (sum, coord) in sums[cluster].iter_mut().zip(point.iter()) {
            *sum += coord;
        }
    }

    sums.into_iter()
        .zip(counts)
        .zip(previous.iter())
        .map(|((mut sum, count), prev)| {
            if count == 0 {
                return prev.clone();
            }
            for coord in sum.iter_mut() {
                *coord /= count as f64;
            }
            sum
        })
        .collect()
}

/// Check whether centroid movement from `old` to `new` is below `tolerance`
/// under the given policy.
pub fn converged_under(
    old: &[Vec<f64>],
    new: &[Vec<f64>],
    policy: ConvergencePolicy,
    tolerance: f64,
) -> bool {
    match policy {
        ConvergencePolicy::AbsolutePerCoordinate => {
            old.iter().zip(new.iter()).all(|(a, b)| {
                a.iter()
                    .zip(b.iter())
                    .all(|(x, y)| (x - y).abs() < tolerance)
            })
        }
        ConvergencePolicy::AbsoluteNorm => old
            .iter()
            .zip(new.iter())
            .all(|(a, b)| euclidean_distance(a, b) < tolerance),
        ConvergencePolicy::RelativePerCoordinate => {
            old.iter().zip(new.iter()).all(|(a, b)| {
                a.iter()
                    .zip(b.iter())
                    .all(|(x, y)| (x - y).abs() < tolerance * (1.0 + x.abs()))
            })
        }
    }
}

/// Build per-cluster member lists from the final assignment.
pub fn build_clusters(assignments: &[usize], centroids: &[Vec<f64>]) -> Vec<Cluster> {
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); centroids.len()];

    for (i, &cluster) in assignments.iter().enumerate() {
        members[cluster].push(i);
    }

    centroids
        .iter()
        .zip(members)
        .map(|(centroid, members)| Cluster::new(centroid.clone(), members))
        .collect()
}
