//! Auxiliary collections used by the graph algorithms.
//!
//! - `priority_queue`: FIFO queue with editable priorities (Dijkstra, Prim)
//! - `disjoint_set`: union-by-rank partition of vertex ids (Kruskal)
//! - `component_set`: result type of the component queries

pub mod component_set;
pub mod disjoint_set;
pub mod priority_queue;

pub use component_set::ComponentSet;
pub use disjoint_set::DisjointSet;
pub use priority_queue::PriorityQueue;
