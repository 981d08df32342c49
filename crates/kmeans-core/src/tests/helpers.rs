//! Helper functions for creating test data (REAL data, NO mocks).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::types::Dataset;

/// Deterministic RNG for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Build a 2D dataset from fixed-size coordinate pairs.
pub fn dataset_2d(points: &[[f64; 2]]) -> Dataset {
    Dataset::new(points.iter().map(|p| p.to_vec()).collect()).expect("valid test dataset")
}

/// Centers of the three groups produced by [`clustered_dataset`].
pub const GROUP_CENTERS: [[f64; 2]; 3] = [[0.0, 0.0], [10.0, 10.0], [20.0, 0.0]];

/// Create 15 points forming three well-separated groups of five.
pub fn clustered_dataset() -> Dataset {
    let mut points = Vec::new();

    for center in GROUP_CENTERS {
        for i in 0..5 {
            let offset = i as f64 * 0.1;
            points.push(vec![center[0] + offset, center[1] - offset]);
        }
    }

    Dataset::new(points).expect("valid clustered dataset")
}
