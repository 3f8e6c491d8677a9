//! Graph construction from loaded sources

use super::{load_link_map, load_membership_map, LinkMap, LoadResult, MembershipMap};
use crate::config::DataSources;
use crate::graph::{EdgeLabel, GraphStore};
use tracing::{info, warn};

/// Build the co-star graph.
///
/// Every person becomes a vertex, cast or not. Each pair of distinct people in
/// a cast is joined by an edge labeled with the work's title; pairs that share
/// several works end up with all of those titles.
pub fn build_graph(people: &LinkMap, works: &LinkMap, casts: &MembershipMap) -> GraphStore {
    let mut store = GraphStore::new();

    for name in people.values() {
        store.insert_vertex(name.as_str());
    }

    for (work_id, cast) in casts {
        let title = match works.get(work_id) {
            Some(title) => title.as_str(),
            None => {
                warn!("Work {} has no title, using its id", work_id);
                work_id.as_str()
            }
        };

        let names: Vec<&str> = cast
            .iter()
            .filter_map(|person_id| match people.get(person_id) {
                Some(name) => Some(name.as_str()),
                None => {
                    warn!("Work {} lists unknown person {}", work_id, person_id);
                    None
                }
            })
            .collect();

        for (i, &a) in names.iter().enumerate() {
            for &b in &names[i + 1..] {
                // Two ids can share a display name
                if a != b {
                    store.insert_undirected_edge(a, b, EdgeLabel::single(title));
                }
            }
        }
    }

    info!(
        "Built graph with {} people and {} links from {} works",
        store.vertex_count(),
        store.edge_count(),
        casts.len()
    );
    store
}

/// Load all three sources and build the graph
pub fn load_graph(sources: &DataSources) -> LoadResult<GraphStore> {
    let people = load_link_map(&sources.people)?;
    let works = load_link_map(&sources.works)?;
    let casts = load_membership_map(&sources.casts)?;
    Ok(build_graph(&people, &works, &casts))
}
