//! Graph algorithms module
//!
//! Algorithms are implemented in the `costar-graph-algorithms` crate over a
//! dense [`GraphView`]. This module provides the integration/adapter layer:
//! projecting the store into a view and mapping indices back to vertices and
//! their edge labels.

pub mod ranking;
pub mod tree;

use crate::graph::GraphStore;

// Re-export algorithms
pub use costar_graph_algorithms::{
    average_separation, bfs_tree, children_index, total_separation,
    BfsTree, BoundedTopK, GraphView, Retain, Scored,
};
pub use ranking::{rank_centers, top_k_by_average_separation, top_k_by_degree, RankBy, Ranked};
pub use tree::{build_tree, Link, SeparationTree};

/// Build a GraphView from the store for algorithm execution.
///
/// View index `i` is store index `i`, and each neighbor run keeps the store's
/// insertion order.
pub fn build_view(store: &GraphStore) -> GraphView {
    let adjacency = (0..store.vertex_count())
        .map(|idx| store.neighbor_indices(idx).collect())
        .collect();
    GraphView::from_adjacency_list(adjacency)
}
