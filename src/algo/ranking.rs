//! Ranking alternative centers
//!
//! Every vertex is a candidate center. A candidate qualifies only if its
//! separation tree still reaches the target; qualifying candidates are scored
//! and the best `k` kept in a [`BoundedTopK`].
//!
//! Candidate trees are independent, so they are built in parallel. Each rayon
//! worker folds into its own top-k and the partial results are merged at the
//! end; the top-k order is total, so the outcome does not depend on scheduling.

use crate::graph::{GraphError, GraphResult, GraphStore, Vertex};
use costar_graph_algorithms::{average_separation, bfs_tree, BfsTree, BoundedTopK, GraphView, Retain, Scored};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// A candidate center with its score
pub type Ranked<'g> = Scored<&'g Vertex>;

/// Ranking metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankBy {
    /// Average separation of the candidate's tree; lower is better
    Separation,
    /// Number of people the candidate shares a work with; higher is better
    Degree,
}

impl RankBy {
    pub fn retain(self) -> Retain {
        match self {
            RankBy::Separation => Retain::Lowest,
            RankBy::Degree => Retain::Highest,
        }
    }

    fn score(self, tree: &BfsTree) -> f64 {
        match self {
            RankBy::Separation => average_separation(tree),
            RankBy::Degree => tree.root_degree() as f64,
        }
    }
}

impl fmt::Display for RankBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankBy::Separation => write!(f, "average separation"),
            RankBy::Degree => write!(f, "degree"),
        }
    }
}

/// The `k` best centers by `by` among those still connected to `target`, best first.
///
/// Equal scores favor the lexicographically greater name.
pub fn rank_centers<'g>(
    store: &'g GraphStore,
    view: &GraphView,
    by: RankBy,
    k: usize,
    target: &str,
) -> GraphResult<Vec<Ranked<'g>>> {
    let not_found = || GraphError::VertexNotFound(target.to_string());
    let target_idx = store.index_of(target).ok_or_else(not_found)?;

    // Undirected: a candidate's tree reaches the target iff the target's tree
    // reaches the candidate, so one traversal prunes whole foreign components.
    let reachable = bfs_tree(view, target_idx).ok_or_else(not_found)?;
    // There are never more candidates than tree members
    let k = k.min(reachable.vertex_count());

    let top = (0..view.node_count)
        .into_par_iter()
        .filter(|&candidate| reachable.contains(candidate))
        .filter_map(|candidate| {
            let tree = bfs_tree(view, candidate)?;
            tree.contains(target_idx)
                .then(|| (candidate, by.score(&tree)))
        })
        .fold(
            || BoundedTopK::new(k, by.retain()),
            |mut top, (candidate, score)| {
                if let Some(vertex) = store.vertex_at(candidate) {
                    top.push(vertex, score);
                }
                top
            },
        )
        .reduce(|| BoundedTopK::new(k, by.retain()), BoundedTopK::merge);

    info!(
        "Ranked {} candidate centers for {:?} by {}, kept {}",
        reachable.vertex_count(),
        target,
        by,
        top.len()
    );
    Ok(top.into_sorted_vec())
}

/// Centers with the lowest average separation that still reach `target`
pub fn top_k_by_average_separation<'g>(
    store: &'g GraphStore,
    view: &GraphView,
    k: usize,
    target: &str,
) -> GraphResult<Vec<Ranked<'g>>> {
    rank_centers(store, view, RankBy::Separation, k, target)
}

/// Centers with the most co-stars that still reach `target`
pub fn top_k_by_degree<'g>(
    store: &'g GraphStore,
    view: &GraphView,
    k: usize,
    target: &str,
) -> GraphResult<Vec<Ranked<'g>>> {
    rank_centers(store, view, RankBy::Degree, k, target)
}
