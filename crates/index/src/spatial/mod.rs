//! Spatial indexing.
//!
//! A region quadtree that subdivides down to a fixed cell resolution.

mod options;
mod quadrant;
mod quadtree;

pub use options::{IndexOptions, LeafFilter};
pub use quadrant::Quadrant;
pub use quadtree::{QuadTree, TreeStats};
