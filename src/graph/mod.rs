//! Co-star graph data model
//!
//! People are vertices; an undirected edge joins two people who appeared in
//! at least one common work and is labeled with the titles of those works.

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, GraphStatistics, GraphStore};
pub use types::{EdgeLabel, Vertex};
