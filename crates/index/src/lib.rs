//! Landmark quadtree library.

pub mod config;
pub mod error;
pub mod scan;
pub mod spatial;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, IndexError};
pub use spatial::{IndexOptions, LeafFilter, QuadTree, Quadrant, TreeStats};
