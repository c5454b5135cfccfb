//! Error type shared by every graph operation.
//!
//! Mutations and analyses report failure through [`GraphError`] instead of
//! sentinel values. Pure predicates (`contains_edge`, `is_cyclic`, ...) stay
//! `bool` and never fail.

use crate::graph::Weight;

/// Reasons a graph operation can refuse to run or fail midway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id outside `[0, size)` was supplied.
    #[error("vertex {vertex} is out of range for a graph with {size} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Vertex count at the time of the call.
        size: usize,
    },

    /// `add_vertices` was asked to add zero vertices.
    #[error("vertex batch must contain at least one vertex")]
    EmptyVertexBatch,

    /// An edge from a vertex to itself was requested.
    #[error("self-loop on vertex {vertex} is not supported")]
    SelfLoop {
        /// The vertex on both ends.
        vertex: usize,
    },

    /// The edge is already present; parallel edges are not supported.
    #[error("edge {from} -> {to} already exists")]
    EdgeExists {
        /// Source vertex.
        from: usize,
        /// Destination vertex.
        to: usize,
    },

    /// The edge is not present.
    #[error("edge {from} -> {to} does not exist")]
    EdgeNotFound {
        /// Source vertex.
        from: usize,
        /// Destination vertex.
        to: usize,
    },

    /// An undirected edge lacks its mirror, or the mirror has another weight.
    #[error("undirected edge {from} -> {to} has no matching mirror")]
    UnmirroredEdge {
        /// Source vertex.
        from: usize,
        /// Destination vertex.
        to: usize,
    },

    /// The operation is only defined on directed graphs.
    #[error("operation requires a directed graph")]
    RequiresDirected,

    /// The operation is only defined on undirected graphs.
    #[error("operation requires an undirected graph")]
    RequiresUndirected,

    /// The operation requires a connected graph.
    #[error("graph is not connected")]
    Disconnected,

    /// The operation requires an acyclic graph.
    #[error("graph contains a cycle")]
    Cyclic,

    /// Dijkstra met a negative edge while relaxing.
    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        /// Source vertex.
        from: usize,
        /// Destination vertex.
        to: usize,
        /// The negative weight.
        weight: Weight,
    },

    /// A negative-weight cycle makes shortest distances undefined.
    #[error("negative cycle detected")]
    NegativeCycle,
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_items() {
        let err = GraphError::VertexOutOfRange { vertex: 7, size: 3 };
        assert_eq!(err.to_string(), "vertex 7 is out of range for a graph with 3 vertices");

        let err = GraphError::NegativeWeight { from: 1, to: 2, weight: -4 };
        assert_eq!(err.to_string(), "negative edge weight -4 on 1 -> 2");
    }
}
