//! Square cells owned by quadtree nodes.

use crate::Position;
use std::f64::consts::SQRT_2;

/// Slack added on every side of a cell when testing containment.
pub const CONTAINS_TOLERANCE: f64 = 1e-5;

/// Axis-aligned square given by its center and half-width.
///
/// The cell spans `[center.x - size, center.x + size]` on x and the same on y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub center: Position,
    pub size: f64,
}

impl Cell {
    #[inline]
    pub const fn new(center: Position, size: f64) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn min(&self) -> Position {
        self.center - Position::splat(self.size)
    }

    #[inline]
    pub fn max(&self) -> Position {
        self.center + Position::splat(self.size)
    }

    /// Check if `p` lies inside the cell, grown by [`CONTAINS_TOLERANCE`].
    ///
    /// NaN coordinates are never contained.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        let min = self.min() - Position::splat(CONTAINS_TOLERANCE);
        let max = self.max() + Position::splat(CONTAINS_TOLERANCE);
        p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y
    }

    /// Distance from the center to a corner of the tolerance-grown cell.
    #[inline]
    pub fn half_diagonal(&self) -> f64 {
        SQRT_2 * (self.size + CONTAINS_TOLERANCE)
    }

    /// Conservative circle overlap test.
    ///
    /// Compares the center distance against the radius plus the half diagonal,
    /// so it can report an overlap for a circle that only touches the
    /// bounding circle of the cell, but never misses a real one.
    #[inline]
    pub fn may_overlap_circle(&self, center: Position, radius: f64) -> bool {
        self.center.distance(center) <= radius + self.half_diagonal()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "size: {} center: {}, {}",
            self.size, self.center.x, self.center.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_contains() {
        let cell = Cell::new(Position::ZERO, 10.0);

        assert!(cell.contains(Position::new(0.0, 0.0)));
        assert!(cell.contains(Position::new(10.0, -10.0)));
        assert!(cell.contains(Position::new(10.0 + 5e-6, 0.0)));
        assert!(!cell.contains(Position::new(10.001, 0.0)));
        assert!(!cell.contains(Position::new(100.0, 100.0)));
        assert!(!cell.contains(Position::new(f64::NAN, 0.0)));
    }

    #[test]
    fn test_cell_overlap_is_conservative() {
        let cell = Cell::new(Position::new(1.0, 1.0), 1.0);

        // Corner (2, 2) is exactly sqrt(2) away from (3, 3).
        assert!(cell.may_overlap_circle(Position::new(3.0, 3.0), SQRT_2));
        // Outside the square but inside its bounding circle.
        assert!(cell.may_overlap_circle(Position::new(2.6, 1.0), 0.5));
        assert!(!cell.may_overlap_circle(Position::new(10.0, 10.0), 1.0));
    }
}
