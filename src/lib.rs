//! # `graphkit` - Adjacency-List Graphs and Classical Algorithms
//!
//! A weighted, directed or undirected adjacency-list [`Graph`] over a dense
//! integer vertex space, plus the classical algorithms that run on it.
//!
//! ## Key Features
//!
//! - **Dynamic structure**: add/remove vertices and edges at runtime; vertex
//!   ids stay dense and edges mirror atomically in undirected graphs
//! - **Traversals**: BFS, DFS and whole-graph DFS forests producing a reusable
//!   [`VisitState`] (discovery/finish times, parents, distances, colors)
//! - **Shortest paths**: Dijkstra, Bellman-Ford and Floyd-Warshall
//! - **Structure**: cycle detection, connectivity, connected and strongly
//!   connected components, topological sort
//! - **Spanning trees**: Prim and Kruskal
//!
//! ## Architecture
//!
//! 1. **Collections** (`collections`): the [`PriorityQueue`] driving Dijkstra
//!    and Prim, the [`DisjointSet`] driving Kruskal, and the [`ComponentSet`]
//!    returned by component queries.
//! 2. **Graph** (`graph`): the container, the [`VisitState`] record, and the
//!    algorithms as inherent methods on [`Graph`].
//!
//! Everything is single-threaded and synchronous. Algorithms never mutate the
//! graph they analyze; spanning-tree builders return a new graph.
//!
//! ## Example
//!
//! ```rust
//! use graphkit::Graph;
//!
//! let mut graph = Graph::directed();
//! graph.add_vertices(3).unwrap();
//! graph.add_weighted_edge(0, 1, 4).unwrap();
//! graph.add_weighted_edge(1, 2, 1).unwrap();
//! graph.add_weighted_edge(0, 2, 7).unwrap();
//!
//! let visit = graph.dijkstra(0).unwrap();
//! assert_eq!(visit.distance(2), Some(5));
//! assert_eq!(visit.path_to(2), Some(vec![0, 1, 2]));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![forbid(unsafe_code)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{ComponentSet, DisjointSet, PriorityQueue};
pub use error::{GraphError, Result};
pub use graph::{
    Adjacent, Bfs, Color, Dfs, DistanceMatrix, Edge, Graph, GraphStatistics, VisitState, Weight,
    DEFAULT_EDGE_WEIGHT, INFINITE_DISTANCE,
};
