//! The co-star universe
//!
//! Owns the graph and its algorithm view, both built once and read-only from
//! then on. Every query borrows them; nothing is rebuilt per query.

use crate::algo::{self, RankBy, Ranked, SeparationTree};
use crate::config::DataSources;
use crate::graph::{GraphResult, GraphStore, Vertex};
use crate::loader::{load_graph, LoadResult};
use costar_graph_algorithms::GraphView;
use serde::Serialize;

/// How one center relates to the rest of the graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterSummary<'g> {
    pub center: &'g Vertex,
    /// People with a finite separation, excluding the center
    pub connected: usize,
    /// All people in the graph
    pub total: usize,
    pub average_separation: f64,
    pub degree: usize,
}

/// Loaded graph plus its algorithm view
#[derive(Debug, Clone)]
pub struct Universe {
    store: GraphStore,
    view: GraphView,
}

impl Universe {
    pub fn new(store: GraphStore) -> Self {
        let view = algo::build_view(&store);
        Self { store, view }
    }

    /// Load the three sources and build the universe
    pub fn load(sources: &DataSources) -> LoadResult<Self> {
        Ok(Self::new(load_graph(sources)?))
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn view(&self) -> &GraphView {
        &self.view
    }

    /// Separation tree centered on `root`
    pub fn build_tree(&self, root: &str) -> GraphResult<SeparationTree<'_>> {
        algo::build_tree(&self.store, &self.view, root)
    }

    pub fn top_k_by_average_separation(&self, k: usize, target: &str) -> GraphResult<Vec<Ranked<'_>>> {
        algo::top_k_by_average_separation(&self.store, &self.view, k, target)
    }

    pub fn top_k_by_degree(&self, k: usize, target: &str) -> GraphResult<Vec<Ranked<'_>>> {
        algo::top_k_by_degree(&self.store, &self.view, k, target)
    }

    pub fn rank(&self, by: RankBy, k: usize, target: &str) -> GraphResult<Vec<Ranked<'_>>> {
        algo::rank_centers(&self.store, &self.view, by, k, target)
    }

    pub fn summary(&self, center: &str) -> GraphResult<CenterSummary<'_>> {
        let tree = self.build_tree(center)?;
        Ok(CenterSummary {
            center: tree.root(),
            connected: tree.vertex_count() - 1,
            total: self.store.vertex_count(),
            average_separation: tree.average_separation(),
            degree: tree.root_degree(),
        })
    }
}

impl From<GraphStore> for Universe {
    fn from(store: GraphStore) -> Self {
        Self::new(store)
    }
}
