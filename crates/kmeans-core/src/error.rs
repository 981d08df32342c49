//! Error types for centroid clustering.
//!
//! Every variant is an invalid-argument failure reported before any
//! clustering work starts. An empty cluster during iteration is NOT an
//! error: its centroid is left unchanged (see [`crate::algorithms`]).

use thiserror::Error;

/// Errors produced by dataset construction and clustering calls.
#[derive(Debug, Error)]
pub enum ClusteringError {
    /// The dataset contains no points.
    #[error("dataset must not be empty")]
    EmptyDataset,

    /// k is zero or exceeds the number of points.
    #[error("k ({k}) must be > 0 and <= number of points ({n})")]
    InvalidK {
        /// Requested number of clusters
        k: usize,
        /// Number of points in the dataset
        n: usize,
    },

    /// A point or centroid does not match the dataset's dimensionality.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality established by the dataset
        expected: usize,
        /// Dimensionality actually received
        actual: usize,
    },

    /// A configuration parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClusteringError>;
