//! Separation statistics over a [`BfsTree`]

use super::common::NodeIndex;
use super::traversal::BfsTree;

/// Nodes discovered by each node, in discovery order. Indexed like the view;
/// leaves and unreached nodes have an empty run.
pub fn children_index(tree: &BfsTree) -> Vec<Vec<NodeIndex>> {
    let mut children = vec![Vec::new(); tree.node_count()];
    for &idx in tree.vertices() {
        if let Some(parent) = tree.parent(idx) {
            children[parent].push(idx);
        }
    }
    children
}

/// Sum of every tree node's separation from the root.
///
/// Walks the children index outward from the root, so each node is counted
/// exactly once at its own depth.
pub fn total_separation(tree: &BfsTree) -> usize {
    let children = children_index(tree);
    let mut total = 0;
    let mut worklist = vec![(tree.root(), 0usize)];

    while let Some((idx, separation)) = worklist.pop() {
        total += separation;
        if let Some(discovered) = children.get(idx) {
            worklist.extend(discovered.iter().map(|&child| (child, separation + 1)));
        }
    }

    total
}

/// Mean separation over all tree nodes, root included.
///
/// A tree always holds its root, so a lone root gives `0.0`.
pub fn average_separation(tree: &BfsTree) -> f64 {
    total_separation(tree) as f64 / tree.vertex_count() as f64
}
