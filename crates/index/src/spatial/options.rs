use serde::{Deserialize, Serialize};

/// How a node holding landmarks directly answers a search that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafFilter {
    /// Only landmarks within the search radius.
    #[default]
    Exact,
    /// Every landmark in the cell, near or not.
    Cell,
}

/// Per-tree switches, copied into every node on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Reject landmarks that fall outside the node they are inserted into.
    pub strict: bool,
    /// Trace node creation and destruction.
    pub verbose: bool,
    pub leaf_filter: LeafFilter,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            strict: true,
            verbose: false,
            leaf_filter: LeafFilter::default(),
        }
    }
}
