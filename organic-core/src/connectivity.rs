//! Probabilistic path graphs over an ordered node sequence.
//!
//! The graph is mostly a chain: each node may link to its successor and to
//! the node after that. A few closing links wrap the tail back to the head,
//! so a column reads as a loosely connected ring once it scrolls.

use crate::config::PathOdds;
use crate::node::Node;
use crate::random::RandomSource;
use crate::types::NodeIndex;

/// Directed, non-owning link between two nodes of the same sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodePath {
    pub from: NodeIndex,
    pub to: NodeIndex,
}

impl NodePath {
    pub const fn new(from: NodeIndex, to: NodeIndex) -> Self {
        Self { from, to }
    }

    /// Resolves both ends against the sequence the path was generated for.
    ///
    /// ### Panics
    /// Panics if either index is out of bounds for `nodes`.
    #[inline]
    pub fn resolve<'a>(&self, nodes: &'a [Node]) -> (&'a Node, &'a Node) {
        (&nodes[self.from], &nodes[self.to])
    }
}

/// Builds the path list for `nodes`.
///
/// For a sequence of length `n`:
/// 1. For every `i < n - 2`: `(i, i + 1)` with `odds.first` and
///    `(i, i + 2)` with `odds.second`.
/// 2. If `n > 2`: `(n - 2, n - 1)` with `odds.first` and `(n - 2, 0)` with
///    `odds.second_end`.
/// 3. If `n > 1`: `(n - 1, 0)` with `odds.first` and `(n - 1, 1)` with
///    `odds.second_end`.
///
/// Every candidate is an independent trial drawn from `rng`, in the order
/// above.
pub fn generate_paths(nodes: &[Node], odds: &PathOdds, rng: &mut RandomSource) -> Vec<NodePath> {
    generate_paths_for_len(nodes.len(), odds, rng)
}

/// Same as [`generate_paths`] but only needs the sequence length.
pub fn generate_paths_for_len(n: usize, odds: &PathOdds, rng: &mut RandomSource) -> Vec<NodePath> {
    let mut paths = Vec::with_capacity(n * 2);
    let mut try_add = |from: NodeIndex, to: NodeIndex, percent: u32| {
        if rng.chance(percent) {
            paths.push(NodePath::new(from, to));
        }
    };

    for i in 0..n.saturating_sub(2) {
        try_add(i, i + 1, odds.first);
        try_add(i, i + 2, odds.second);
    }

    if n > 2 {
        try_add(n - 2, n - 1, odds.first);
        try_add(n - 2, 0, odds.second_end);
    }

    if n > 1 {
        try_add(n - 1, 0, odds.first);
        try_add(n - 1, 1, odds.second_end);
    }

    paths
}
