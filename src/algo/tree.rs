//! Separation trees over the co-star graph
//!
//! A [`SeparationTree`] pairs an index-level [`BfsTree`] with the store it was
//! grown over, so callers get vertices and shared-work labels back instead of
//! dense indices. Labels are borrowed from the store, never copied.

use crate::graph::{EdgeLabel, GraphError, GraphResult, GraphStore, Vertex};
use costar_graph_algorithms::{average_separation, bfs_tree, total_separation, BfsTree, GraphView};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// One hop of a path: `from` appeared in `label` with `to`, who is one step
/// closer to the root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link<'g> {
    pub from: &'g Vertex,
    pub to: &'g Vertex,
    pub label: &'g EdgeLabel,
}

/// Shortest-path tree rooted at one vertex
#[derive(Debug, Clone)]
pub struct SeparationTree<'g> {
    store: &'g GraphStore,
    root: &'g Vertex,
    tree: BfsTree,
}

/// Grow the separation tree of `root`.
///
/// `view` must be the projection of `store` (see [`super::build_view`]).
pub fn build_tree<'g>(
    store: &'g GraphStore,
    view: &GraphView,
    root: &str,
) -> GraphResult<SeparationTree<'g>> {
    let invalid = || GraphError::InvalidRoot(root.to_string());
    let root_idx = store.index_of(root).ok_or_else(invalid)?;
    let root_vertex = store.vertex_at(root_idx).ok_or_else(invalid)?;
    let tree = bfs_tree(view, root_idx).ok_or_else(invalid)?;

    debug!(
        "Separation tree for {:?} reaches {} of {} people",
        root,
        tree.vertex_count(),
        store.vertex_count()
    );
    Ok(SeparationTree {
        store,
        root: root_vertex,
        tree,
    })
}

impl<'g> SeparationTree<'g> {
    fn vertex(&self, idx: usize) -> Option<&'g Vertex> {
        self.store.vertex_at(idx)
    }

    fn index_in_tree(&self, vertex: &str) -> Option<usize> {
        self.store
            .index_of(vertex)
            .filter(|&idx| self.tree.contains(idx))
    }

    /// The underlying index-level tree
    pub fn inner(&self) -> &BfsTree {
        &self.tree
    }

    /// The center this tree was grown from
    pub fn root(&self) -> &'g Vertex {
        self.root
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.index_in_tree(vertex).is_some()
    }

    /// Number of people in the tree, root included
    pub fn vertex_count(&self) -> usize {
        self.tree.vertex_count()
    }

    /// Tree members in discovery order, root first
    pub fn vertices(&self) -> impl Iterator<Item = &'g Vertex> + '_ {
        self.tree
            .vertices()
            .iter()
            .filter_map(move |&idx| self.vertex(idx))
    }

    /// The person through whom `vertex` was reached
    pub fn parent_of(&self, vertex: &str) -> Option<&'g Vertex> {
        let idx = self.index_in_tree(vertex)?;
        self.tree.parent(idx).and_then(|parent| self.vertex(parent))
    }

    /// Works shared by `vertex` and its parent
    pub fn link_label(&self, vertex: &str) -> Option<&'g EdgeLabel> {
        let idx = self.index_in_tree(vertex)?;
        let parent = self.tree.parent(idx)?;
        self.store.label_at(idx, parent)
    }

    /// Separation of `vertex` from the root
    pub fn separation_of(&self, vertex: &str) -> Option<usize> {
        self.index_in_tree(vertex)
            .and_then(|idx| self.tree.depth(idx))
    }

    /// People from the root to `target`, both inclusive.
    ///
    /// Empty when `target` cannot be reached; `[root]` when it is the root.
    pub fn path_to(&self, target: &str) -> Vec<&'g Vertex> {
        match self.index_in_tree(target) {
            Some(idx) => self
                .tree
                .path_to(idx)
                .into_iter()
                .filter_map(|step| self.vertex(step))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Hops from `target` back to the root, each with the works it rests on
    pub fn links_to(&self, target: &str) -> Vec<Link<'g>> {
        let Some(idx) = self.index_in_tree(target) else {
            return Vec::new();
        };

        let path = self.tree.path_to(idx);
        path.windows(2)
            .rev()
            .filter_map(|pair| {
                Some(Link {
                    from: self.vertex(pair[1])?,
                    to: self.vertex(pair[0])?,
                    label: self.store.label_at(pair[1], pair[0])?,
                })
            })
            .collect()
    }

    /// Store vertices this tree never reached
    pub fn missing(&self) -> BTreeSet<&'g Vertex> {
        let store: &'g GraphStore = self.store;
        store
            .vertices()
            .enumerate()
            .filter(|&(idx, _)| !self.tree.contains(idx))
            .map(|(_, vertex)| vertex)
            .collect()
    }

    pub fn total_separation(&self) -> usize {
        total_separation(&self.tree)
    }

    pub fn average_separation(&self) -> f64 {
        average_separation(&self.tree)
    }

    /// People the root shares a work with
    pub fn root_degree(&self) -> usize {
        self.tree.root_degree()
    }
}
