//! Costar
//!
//! A degrees-of-separation engine over co-star graphs: people are vertices,
//! and two people are linked when they appeared in a common work.
//!
//! # Architecture
//!
//! - `graph`: the undirected, labeled [`GraphStore`], built once and then
//!   read-only
//! - `loader`: `id|value` source parsing and graph construction
//! - `algo`: separation trees, paths and center ranking, adapted onto the
//!   index-level algorithms in `costar-graph-algorithms`
//! - `universe`: the facade a front end talks to
//! - `config`: YAML game configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use costar::graph::{EdgeLabel, GraphStore};
//! use costar::Universe;
//!
//! let mut store = GraphStore::new();
//! store.insert_undirected_edge("A", "B", EdgeLabel::single("M1"));
//! store.insert_undirected_edge("B", "C", EdgeLabel::single("M1"));
//! store.insert_undirected_edge("A", "D", EdgeLabel::single("M2"));
//!
//! let universe = Universe::new(store);
//! let tree = universe.build_tree("A").unwrap();
//!
//! let path: Vec<&str> = tree.path_to("C").iter().map(|v| v.as_str()).collect();
//! assert_eq!(path, vec!["A", "B", "C"]);
//! assert_eq!(tree.average_separation(), 1.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod loader;
pub mod universe;

// Re-export main types for convenience
pub use graph::{EdgeLabel, GraphError, GraphResult, GraphStatistics, GraphStore, Vertex};

pub use algo::{Link, RankBy, Ranked, SeparationTree};

pub use config::{ConfigError, DataSources, GameConfig};

pub use loader::{LoadError, LoadResult};

pub use universe::{CenterSummary, Universe};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
