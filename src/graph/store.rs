//! In-memory co-star graph storage
//!
//! Vertices live in an insertion-ordered map so every vertex has a stable
//! dense index and neighbor iteration is reproducible run to run. Edge labels
//! are stored once per undirected edge, keyed by the ordered index pair.

use super::types::{EdgeLabel, Vertex};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0:?} not found")]
    VertexNotFound(String),

    #[error("Edge {0:?} - {1:?} not found")]
    EdgeNotFound(String, String),

    #[error("Invalid root: {0:?} is not a vertex of the graph")]
    InvalidRoot(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Summary counters for a loaded graph
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub isolated_count: usize,
    pub max_degree: usize,
}

/// Undirected graph of people, each edge labeled with the works they share
///
/// - vertices: Vertex -> neighbor indices (insertion ordered)
/// - labels: (lower index, higher index) -> EdgeLabel
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    vertices: IndexMap<Vertex, IndexSet<usize>>,
    labels: FxHashMap<(usize, usize), EdgeLabel>,
}

fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `vertex` if absent. Returns its dense index either way.
    pub fn insert_vertex(&mut self, vertex: impl Into<Vertex>) -> usize {
        let entry = self.vertices.entry(vertex.into());
        let idx = entry.index();
        entry.or_default();
        idx
    }

    /// Connect `u` and `v`, creating either endpoint if needed.
    ///
    /// An existing edge keeps its label and gains the titles of `label`.
    /// Nobody is their own co-star: `u == v` only inserts the vertex.
    pub fn insert_undirected_edge(
        &mut self,
        u: impl Into<Vertex>,
        v: impl Into<Vertex>,
        label: EdgeLabel,
    ) {
        let u_idx = self.insert_vertex(u);
        let v_idx = self.insert_vertex(v);
        if u_idx == v_idx {
            return;
        }

        self.vertices[u_idx].insert(v_idx);
        self.vertices[v_idx].insert(u_idx);

        self.labels
            .entry(edge_key(u_idx, v_idx))
            .or_default()
            .merge(label);
    }

    pub fn has_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains_key(vertex)
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(a), Some(b)) => self.labels.contains_key(&edge_key(a, b)),
            _ => false,
        }
    }

    /// People who share at least one work with `vertex`
    pub fn neighbors_of(&self, vertex: &str) -> GraphResult<impl Iterator<Item = &Vertex> + '_> {
        let neighbors = self
            .vertices
            .get(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.to_string()))?;
        Ok(neighbors.iter().filter_map(move |&idx| self.vertex_at(idx)))
    }

    /// Shared works of `u` and `v`, looked up in either order
    pub fn label(&self, u: &str, v: &str) -> GraphResult<&EdgeLabel> {
        let missing = || GraphError::EdgeNotFound(u.to_string(), v.to_string());
        let a = self.index_of(u).ok_or_else(missing)?;
        let b = self.index_of(v).ok_or_else(missing)?;
        self.label_at(a, b).ok_or_else(missing)
    }

    pub fn degree(&self, vertex: &str) -> GraphResult<usize> {
        self.vertices
            .get(vertex)
            .map(IndexSet::len)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.to_string()))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.labels.len()
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.keys()
    }

    pub fn index_of(&self, vertex: &str) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    pub fn vertex_at(&self, idx: usize) -> Option<&Vertex> {
        self.vertices.get_index(idx).map(|(vertex, _)| vertex)
    }

    /// Neighbor indices of the vertex at `idx`, in insertion order
    pub fn neighbor_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices
            .get_index(idx)
            .into_iter()
            .flat_map(|(_, neighbors)| neighbors.iter().copied())
    }

    pub fn label_at(&self, a: usize, b: usize) -> Option<&EdgeLabel> {
        self.labels.get(&edge_key(a, b))
    }

    pub fn statistics(&self) -> GraphStatistics {
        let degrees = self.vertices.values().map(IndexSet::len);
        GraphStatistics {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            isolated_count: degrees.clone().filter(|&d| d == 0).count(),
            max_degree: degrees.max().unwrap_or(0),
        }
    }
}
