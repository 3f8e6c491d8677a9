pub mod common;
pub mod traversal;
pub mod separation;
pub mod topk;

pub use common::{GraphView, NodeIndex};
pub use traversal::{bfs_tree, BfsTree};
pub use separation::{average_separation, children_index, total_separation};
pub use topk::{BoundedTopK, Retain, Scored};
