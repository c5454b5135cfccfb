//! Graph algorithms, each implemented as inherent methods on [`Graph`](crate::Graph).

mod components;
mod mst;
mod paths;
mod traversal;

pub use paths::DistanceMatrix;
pub use traversal::{Bfs, Dfs};
