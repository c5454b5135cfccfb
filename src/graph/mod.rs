//! The adjacency-list graph and the algorithms built on it.
//!
//! - `adjacency_graph`: the [`Graph`] container and its mutation/query API
//! - `visit`: per-vertex traversal records shared by every algorithm
//! - `algorithms`: traversals, shortest paths, components and spanning trees

pub mod adjacency_graph;
pub mod algorithms;
pub mod visit;

pub use adjacency_graph::{Adjacent, Edge, Graph, GraphStatistics};
pub use algorithms::{Bfs, Dfs, DistanceMatrix};
pub use visit::{Color, VisitState};

/// Integer edge weight. Negative weights are allowed.
pub type Weight = i64;

/// Weight given to edges added without an explicit one.
pub const DEFAULT_EDGE_WEIGHT: Weight = 1;

/// Distance sentinel for vertices that have not been reached.
pub const INFINITE_DISTANCE: Weight = Weight::MAX;
