//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of an undirected graph topology for
//! algorithm execution.

/// Dense node index (0..node_count)
pub type NodeIndex = usize;

/// A dense, integer-indexed view of an undirected graph using Compressed Sparse Row (CSR) format.
///
/// Every undirected edge `u - v` appears twice: `v` in the neighbor run of `u`
/// and `u` in the neighbor run of `v`. The order of each run is the order the
/// caller supplied, and every traversal in this crate honours it, so results
/// are reproducible for a given view.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<NodeIndex>,
}

impl GraphView {
    /// Build a view from per-node neighbor lists.
    ///
    /// Neighbor indices outside `0..adjacency.len()` are dropped.
    pub fn from_adjacency_list(adjacency: Vec<Vec<NodeIndex>>) -> Self {
        let node_count = adjacency.len();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for neighbors in adjacency {
            targets.extend(neighbors.into_iter().filter(|&n| n < node_count));
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            offsets,
            targets,
        }
    }

    /// Build a view from an undirected edge list, mirroring each edge.
    pub fn from_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(u, v) in edges {
            if u >= node_count || v >= node_count {
                continue;
            }
            adjacency[u].push(v);
            if u != v {
                adjacency[v].push(u);
            }
        }
        Self::from_adjacency_list(adjacency)
    }

    /// True if `idx` names a node of this view
    pub fn contains(&self, idx: NodeIndex) -> bool {
        idx < self.node_count
    }

    /// Get the neighbors of a node; empty for an index outside the view
    pub fn neighbors(&self, idx: NodeIndex) -> &[NodeIndex] {
        if !self.contains(idx) {
            return &[];
        }
        match (self.offsets.get(idx), self.offsets.get(idx + 1)) {
            (Some(&start), Some(&end)) => self.targets.get(start..end).unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Get the degree of a node (by index); 0 outside the view
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.neighbors(idx).len()
    }

    /// Number of undirected edges, counting a self-loop once
    pub fn edge_count(&self) -> usize {
        let loops = (0..self.node_count)
            .map(|u| self.neighbors(u).iter().filter(|&&v| v == u).count())
            .sum::<usize>();
        (self.targets.len() - loops) / 2 + loops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_mirrors() {
        // 0 - 1 - 2, 3 isolated
        let view = GraphView::from_edges(4, &[(0, 1), (1, 2)]);

        assert_eq!(view.node_count, 4);
        assert_eq!(view.neighbors(0), &[1]);
        assert_eq!(view.neighbors(1), &[0, 2]);
        assert_eq!(view.neighbors(2), &[1]);
        assert!(view.neighbors(3).is_empty());
        assert_eq!(view.degree(1), 2);
        assert_eq!(view.edge_count(), 2);
    }

    #[test]
    fn test_out_of_range_neighbors_dropped() {
        let view = GraphView::from_adjacency_list(vec![vec![1, 7], vec![0]]);
        assert_eq!(view.neighbors(0), &[1]);
        assert!(view.contains(1));
        assert!(!view.contains(2));
    }

    #[test]
    fn test_lookups_outside_view() {
        let view = GraphView::from_edges(2, &[(0, 1)]);
        assert!(view.neighbors(2).is_empty());
        assert!(view.neighbors(usize::MAX).is_empty());
        assert_eq!(view.degree(5), 0);
        assert!(GraphView::default().neighbors(0).is_empty());
    }

    #[test]
    fn test_self_loop_counted_once() {
        let view = GraphView::from_edges(2, &[(0, 0), (0, 1)]);
        assert_eq!(view.neighbors(0), &[0, 1]);
        assert_eq!(view.edge_count(), 2);
    }
}
