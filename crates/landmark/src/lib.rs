//! Shared types for the landmark quadtree.
//!
//! This crate contains:
//! - `Position` and `Landmark`, the records stored in the index
//! - `Cell`, the square region covered by one tree node

mod cell;

pub use cell::{Cell, CONTAINS_TOLERANCE};

/// A 2D position using glam's double precision vector.
pub type Position = glam::DVec2;

/// A point record stored in the index.
///
/// Several landmarks may share a position. Ids are expected to be unique
/// but nothing checks it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub pos: Position,
    pub id: u32,
}

impl Landmark {
    #[inline]
    pub const fn new(id: u32, x: f64, y: f64) -> Self {
        Self {
            pos: Position::new(x, y),
            id,
        }
    }

    /// Euclidean distance from this landmark to `position`.
    #[inline]
    pub fn distance(&self, position: Position) -> f64 {
        self.pos.distance(position)
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id: {} x: {} y: {}", self.id, self.pos.x, self.pos.y)
    }
}
