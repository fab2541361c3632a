//! Brute-force baseline for radius queries.

use landmark::{Landmark, Position};

/// Find landmarks within `radius` of `position` by checking every one of them.
pub fn linear_search(landmarks: &[Landmark], position: Position, radius: f64) -> Vec<Landmark> {
    landmarks
        .iter()
        .filter(|lm| lm.distance(position) <= radius)
        .copied()
        .collect()
}
