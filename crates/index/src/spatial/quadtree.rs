//! QuadTree for radius queries over landmarks.
//!
//! Nodes split their cell into four quadrants until the half-size drops below
//! the resolution. Children are only allocated when a landmark is routed to
//! them, and only nodes below resolution store landmarks.

use super::{IndexOptions, LeafFilter, Quadrant};
use crate::IndexError;
use landmark::{Cell, Landmark, Position};
use tracing::{debug, trace};

/// Node counts gathered by walking a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    /// Nodes at or above resolution, which route instead of storing.
    pub internal_nodes: usize,
    /// Nodes below resolution.
    pub leaf_nodes: usize,
    pub landmarks: usize,
    pub max_depth: u32,
}

/// Region quadtree node.
///
/// The value returned by [`QuadTree::new`] is the root; every child is
/// exclusively owned by its parent and dropped with it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadTree {
    center: Position,
    /// Half-width of the cell.
    size: f64,
    resolution: f64,
    depth: u32,
    options: IndexOptions,
    /// Indexed by [`Quadrant::index`].
    children: [Option<Box<QuadTree>>; 4],
    /// Only filled below resolution.
    landmarks: Vec<Landmark>,
}

impl QuadTree {
    /// Create an empty root with default options.
    ///
    /// `size` and `resolution` must both be positive. A resolution of zero
    /// makes insertion recurse until the stack runs out.
    pub fn new(center: Position, size: f64, resolution: f64) -> Self {
        Self::with_options(center, size, resolution, IndexOptions::default())
    }

    /// Create an empty root with explicit options.
    pub fn with_options(center: Position, size: f64, resolution: f64, options: IndexOptions) -> Self {
        Self::node(center, size, resolution, 0, options)
    }

    fn node(center: Position, size: f64, resolution: f64, depth: u32, options: IndexOptions) -> Self {
        if options.verbose {
            trace!(
                depth,
                size,
                resolution,
                center_x = center.x,
                center_y = center.y,
                "QuadTree constructor"
            );
        }
        Self {
            center,
            size,
            resolution,
            depth,
            options,
            children: [None, None, None, None],
            landmarks: Vec::new(),
        }
    }

    #[inline]
    pub fn center(&self) -> Position {
        self.center
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn options(&self) -> IndexOptions {
        self.options
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        Cell::new(self.center, self.size)
    }

    /// Get a child node, if any landmark was ever routed to it.
    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTree> {
        self.children[quadrant.index()].as_deref()
    }

    /// Landmarks stored directly in this node.
    #[inline]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Whether this node stores landmarks instead of subdividing.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.size < self.resolution
    }

    /// Check if `p` lies in this node's cell, with a small tolerance.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.cell().contains(p)
    }

    /// Insert a landmark.
    ///
    /// With `strict` set, a landmark outside the cell is rejected with
    /// [`IndexError::OutOfBounds`]. Without it, such a landmark is routed to
    /// the nearest quadrant at every level and stored outside its leaf cell.
    ///
    /// Only the node `insert` is called on is checked. Below it, child cells
    /// are rounded halves of this one and routing alone decides placement.
    pub fn insert(&mut self, landmark: Landmark) -> Result<(), IndexError> {
        if self.options.strict && !self.contains(landmark.pos) {
            debug!(id = landmark.id, depth = self.depth, "landmark outside of cell");
            return Err(IndexError::OutOfBounds {
                landmark,
                cell: self.cell(),
            });
        }

        self.insert_routed(landmark);
        Ok(())
    }

    fn insert_routed(&mut self, landmark: Landmark) {
        if self.is_leaf() {
            self.landmarks.push(landmark);
            return;
        }

        let quadrant = Quadrant::of(self.center, landmark.pos);
        let center = quadrant.child_center(self.center, self.size);
        let (size, resolution, depth, options) =
            (self.size / 2.0, self.resolution, self.depth + 1, self.options);

        self.children[quadrant.index()]
            .get_or_insert_with(|| Box::new(Self::node(center, size, resolution, depth, options)))
            .insert_routed(landmark);
    }

    /// Find landmarks within `radius` of `position`.
    ///
    /// With [`LeafFilter::Cell`] every landmark of a reached leaf is returned,
    /// so the result may include landmarks farther than `radius`. The order of
    /// the result is not meaningful.
    pub fn search(&self, position: Position, radius: f64) -> Vec<Landmark> {
        let mut found = Vec::new();
        self.search_into(position, radius, &mut found);
        found
    }

    fn search_into(&self, position: Position, radius: f64, found: &mut Vec<Landmark>) {
        if !self.cell().may_overlap_circle(position, radius) {
            return;
        }

        if !self.landmarks.is_empty() {
            match self.options.leaf_filter {
                LeafFilter::Exact => found.extend(
                    self.landmarks
                        .iter()
                        .filter(|lm| lm.distance(position) <= radius)
                        .copied(),
                ),
                LeafFilter::Cell => found.extend_from_slice(&self.landmarks),
            }
            return;
        }

        for child in self.children.iter().flatten() {
            child.search_into(position, radius, found);
        }
    }

    /// Total number of landmarks in this subtree.
    pub fn len(&self) -> usize {
        self.landmarks.len()
            + self
                .children
                .iter()
                .flatten()
                .map(|child| child.len())
                .sum::<usize>()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty() && self.children.iter().all(Option::is_none)
    }

    /// Walk the subtree and count its nodes.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.collect_stats(&mut stats);
        stats
    }

    fn collect_stats(&self, stats: &mut TreeStats) {
        stats.nodes += 1;
        if self.is_leaf() {
            stats.leaf_nodes += 1;
        } else {
            stats.internal_nodes += 1;
        }
        stats.landmarks += self.landmarks.len();
        stats.max_depth = stats.max_depth.max(self.depth);
        for child in self.children.iter().flatten() {
            child.collect_stats(stats);
        }
    }

    /// Depth of the deepest node a tree with these parameters can grow.
    ///
    /// Halves `size` the same way insertion does, so the result is exact:
    /// `floor(log2(size / resolution)) + 1` when `size >= resolution`, else 0.
    pub fn max_depth_bound(size: f64, resolution: f64) -> u32 {
        let mut depth = 0;
        let mut size = size;
        while size >= resolution {
            size /= 2.0;
            depth += 1;
        }
        depth
    }
}

impl Drop for QuadTree {
    fn drop(&mut self) {
        if self.options.verbose {
            trace!(
                depth = self.depth,
                size = self.size,
                center_x = self.center.x,
                center_y = self.center.y,
                "QuadTree destructor"
            );
        }
    }
}
