//! Breadth-first separation trees
//!
//! A [`BfsTree`] records, for every node reachable from a root, the node that
//! discovered it. Following those parent links from any node walks one
//! shortest path back to the root.

use super::common::{GraphView, NodeIndex};
use std::collections::VecDeque;

/// Shortest-path tree produced by [`bfs_tree`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    root: NodeIndex,
    /// index -> discovering node; `None` for the root and for unreached nodes
    parent: Vec<Option<NodeIndex>>,
    /// index -> discovery depth; `None` for unreached nodes
    depth: Vec<Option<usize>>,
    /// Tree nodes in discovery order, root first
    order: Vec<NodeIndex>,
}

/// Breadth-First Search from `root`, keeping the discovery tree.
///
/// Returns `None` when `root` is not a node of `view`.
pub fn bfs_tree(view: &GraphView, root: NodeIndex) -> Option<BfsTree> {
    if !view.contains(root) {
        return None;
    }

    let mut parent = vec![None; view.node_count];
    let mut depth = vec![None; view.node_count];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    depth[root] = Some(0);
    order.push(root);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        let next_depth = depth[current].unwrap_or(0) + 1;

        for &next in view.neighbors(current) {
            if depth[next].is_some() {
                continue;
            }
            depth[next] = Some(next_depth);
            order.push(next);
            queue.push_back(next);

            // A node only gets one parent link, and never to itself
            if next != current && parent[next].is_none() {
                parent[next] = Some(current);
            }
        }
    }

    Some(BfsTree {
        root,
        parent,
        depth,
        order,
    })
}

impl BfsTree {
    /// The node the tree was grown from
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// True if `idx` was reached from the root
    pub fn contains(&self, idx: NodeIndex) -> bool {
        self.depth.get(idx).map_or(false, Option::is_some)
    }

    /// Node that discovered `idx`; `None` for the root or unreached nodes
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.parent.get(idx).copied().flatten()
    }

    /// Separation of `idx` from the root
    pub fn depth(&self, idx: NodeIndex) -> Option<usize> {
        self.depth.get(idx).copied().flatten()
    }

    /// Number of nodes in the view the tree was grown over
    pub fn node_count(&self) -> usize {
        self.parent.len()
    }

    /// Number of nodes in the tree, root included
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Tree nodes in discovery order, root first
    pub fn vertices(&self) -> &[NodeIndex] {
        &self.order
    }

    /// Number of nodes discovered directly by the root
    pub fn root_degree(&self) -> usize {
        self.order
            .iter()
            .filter(|&&idx| self.parent(idx) == Some(self.root))
            .count()
    }

    /// Nodes from the root to `target`, both inclusive.
    ///
    /// Empty when `target` is not in the tree; `[root]` when it is the root.
    pub fn path_to(&self, target: NodeIndex) -> Vec<NodeIndex> {
        if !self.contains(target) {
            return Vec::new();
        }

        let mut path = Vec::with_capacity(self.depth(target).unwrap_or(0) + 1);
        let mut curr = Some(target);
        while let Some(idx) = curr {
            path.push(idx);
            curr = self.parent(idx);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn sample() -> GraphView {
        // A(0) - B(1) - C(2), A(0) - D(3), E(4) isolated
        GraphView::from_edges(5, &[(0, 1), (1, 2), (0, 3)])
    }

    #[test]
    fn test_bfs_tree() {
        let view = sample();
        let tree = bfs_tree(&view, 0).unwrap();

        assert_eq!(tree.vertices(), &[0, 1, 3, 2]);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.parent(3), Some(0));
        assert_eq!(tree.depth(2), Some(2));
        assert!(!tree.contains(4));
        assert_eq!(tree.root_degree(), 2);
    }

    #[test]
    fn test_invalid_root() {
        assert!(bfs_tree(&sample(), 9).is_none());
    }

    #[test]
    fn test_isolated_root() {
        let tree = bfs_tree(&sample(), 4).unwrap();
        assert_eq!(tree.vertex_count(), 1);
        assert_eq!(tree.root_degree(), 0);
        assert_eq!(tree.path_to(4), vec![4]);
        assert!(tree.path_to(0).is_empty());
    }

    #[test]
    fn test_path_to() {
        let tree = bfs_tree(&sample(), 0).unwrap();
        assert_eq!(tree.path_to(2), vec![0, 1, 2]);
        assert_eq!(tree.path_to(3), vec![0, 3]);
        assert_eq!(tree.path_to(0), vec![0]);
        assert!(tree.path_to(4).is_empty());
        assert!(tree.path_to(42).is_empty());
    }

    #[test]
    fn test_self_loop_ignored() {
        let view = GraphView::from_edges(2, &[(0, 0), (0, 1)]);
        let tree = bfs_tree(&view, 0).unwrap();
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.root_degree(), 1);
    }

    #[test]
    fn test_rebuild_is_identical() {
        let view = sample();
        assert_eq!(bfs_tree(&view, 1), bfs_tree(&view, 1));
    }

    #[test]
    fn test_random_graphs_reachability_and_depth() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let n = rng.gen_range(1..40);
            let m = rng.gen_range(0..n * 2);
            let edges: Vec<(usize, usize)> = (0..m)
                .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
                .collect();
            let view = GraphView::from_edges(n, &edges);
            let root = rng.gen_range(0..n);
            let tree = bfs_tree(&view, root).unwrap();

            // Reachable set via a plain depth-first flood
            let mut seen = vec![false; n];
            let mut stack = vec![root];
            seen[root] = true;
            while let Some(u) = stack.pop() {
                for &v in view.neighbors(u) {
                    if !seen[v] {
                        seen[v] = true;
                        stack.push(v);
                    }
                }
            }
            for (v, &reachable) in seen.iter().enumerate() {
                assert_eq!(tree.contains(v), reachable);
            }

            for &v in tree.vertices() {
                // Parent chains end at the root within vertex_count steps
                let path = tree.path_to(v);
                assert!(path.len() <= tree.vertex_count());
                assert_eq!(path[0], root);
                assert_eq!(*path.last().unwrap(), v);
                assert_eq!(path.len() - 1, tree.depth(v).unwrap());
                for pair in path.windows(2) {
                    assert!(view.neighbors(pair[0]).contains(&pair[1]));
                }
                // Shortest-path property: neighbors differ by at most one level
                for &w in view.neighbors(v) {
                    let (dv, dw) = (tree.depth(v).unwrap(), tree.depth(w).unwrap());
                    assert!(dv.abs_diff(dw) <= 1);
                }
            }
        }
    }
}
