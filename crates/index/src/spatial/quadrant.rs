use landmark::Position;

/// One of the four children of a node.
///
/// Discriminants index the child array; search visits children in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast = 0,
    SouthEast = 1,
    SouthWest = 2,
    NorthWest = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
        Quadrant::NorthWest,
    ];

    /// Pick the quadrant of `center` that `p` falls in.
    ///
    /// Points on the vertical split go west, points on the horizontal split go south.
    #[inline]
    pub fn of(center: Position, p: Position) -> Self {
        match (p.x > center.x, p.y > center.y) {
            (true, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::SouthEast,
            (false, false) => Quadrant::SouthWest,
            (false, true) => Quadrant::NorthWest,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Center of this quadrant's child cell for a parent at `center` with half-size `size`.
    #[inline]
    pub fn child_center(self, center: Position, size: f64) -> Position {
        let half = size / 2.0;
        let offset = match self {
            Quadrant::NorthEast => Position::new(half, half),
            Quadrant::SouthEast => Position::new(half, -half),
            Quadrant::SouthWest => Position::new(-half, -half),
            Quadrant::NorthWest => Position::new(-half, half),
        };
        center + offset
    }
}
