//! Tests for centroid clustering.
//!
//! Uses REAL datasets built in `helpers` — no mocks.

mod edge_cases;
mod helpers;
