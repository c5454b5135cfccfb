//! A dynamic, weighted adjacency-list graph over the dense vertex range `[0, n)`.
//!
//! The graph is either directed or undirected, fixed at construction:
//! - directed graphs store each edge `u -> v` once, in `u`'s list
//! - undirected graphs store `{u, v}` as the mirrored pair `u -> v` and `v -> u`,
//!   always with equal weight; every mutation updates both sides before returning
//!
//! New edges are inserted at the **head** of each affected list, so adjacency
//! lists enumerate the most recently added edge first. Traversal orders, and
//! therefore discovery/finish times, depend on this.
//!
//! Vertex ids stay dense: removing vertex `v` shifts every higher id down by one
//! and rewrites every stored endpoint accordingly.

use std::collections::VecDeque;
use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Weight, DEFAULT_EDGE_WEIGHT};

/// One outgoing adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Destination vertex.
    pub to: usize,
    /// Edge weight; may be negative.
    pub weight: Weight,
}

/// Read-only view over one vertex's outgoing edges, head first.
pub type Adjacent<'a> = std::collections::vec_deque::Iter<'a, Edge>;

/// A weighted adjacency-list graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertices` | \(O(k)\) amortized | Appends `k` empty lists |
/// | `remove_vertex` | \(O(n + m)\) | Rewrites every list |
/// | `add_edge` | \(O(\text{out-degree})\) | Checks for existence first |
/// | `remove_edge` | \(O(\text{out-degree})\) | Linear scan, both sides if undirected |
/// | `edge_count` | \(O(n)\) | Sums list lengths |
/// | `in_degree` | \(O(n + m)\) | Scans all adjacency lists |
/// | `transpose` | \(O(n + m)\) | Builds a new directed graph |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGraph")]
pub struct Graph {
    adjacency: Vec<VecDeque<Edge>>,
    directed: bool,
}

/// Serialized form of [`Graph`], checked before it becomes one.
#[derive(Deserialize)]
struct RawGraph {
    adjacency: Vec<VecDeque<Edge>>,
    directed: bool,
}

impl TryFrom<RawGraph> for Graph {
    type Error = GraphError;

    /// Rejects out-of-range endpoints, self-loops, parallel edges and
    /// undirected edges whose mirror is missing or differently weighted.
    fn try_from(raw: RawGraph) -> Result<Self> {
        let graph = Graph {
            adjacency: raw.adjacency,
            directed: raw.directed,
        };
        let size = graph.vertex_count();

        for (from, list) in graph.adjacency.iter().enumerate() {
            let mut targets: Vec<usize> = list.iter().map(|edge| edge.to).collect();
            targets.sort_unstable();
            if let Some(pair) = targets.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(GraphError::EdgeExists { from, to: pair[0] });
            }

            for edge in list {
                if edge.to >= size {
                    return Err(GraphError::VertexOutOfRange { vertex: edge.to, size });
                }
                if edge.to == from {
                    return Err(GraphError::SelfLoop { vertex: from });
                }
                if !graph.directed && graph.edge_weight(edge.to, from) != Some(edge.weight) {
                    return Err(GraphError::UnmirroredEdge { from, to: edge.to });
                }
            }
        }

        Ok(graph)
    }
}

impl Graph {
    /// Creates an empty graph with no vertices.
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: Vec::new(),
            directed,
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn with_vertices(directed: bool, vertex_count: usize) -> Self {
        Self {
            adjacency: vec![VecDeque::new(); vertex_count],
            directed,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, inserted in order.
    ///
    /// Fails on the first edge that `add_weighted_edge` would reject.
    pub fn from_edges<I>(directed: bool, vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let mut graph = Self::with_vertices(directed, vertex_count);
        for (from, to, weight) in edges {
            graph.add_weighted_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns `true` for a directed graph.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Appends one isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> usize {
        let id = self.adjacency.len();
        self.adjacency.push(VecDeque::new());
        tracing::trace!(vertex = id, "added vertex");
        id
    }

    /// Appends `count` isolated vertices and returns their id range.
    pub fn add_vertices(&mut self, count: usize) -> Result<Range<usize>> {
        if count == 0 {
            return Err(GraphError::EmptyVertexBatch);
        }
        let start = self.adjacency.len();
        self.adjacency.resize_with(start + count, VecDeque::new);
        tracing::trace!(first = start, count, "added vertices");
        Ok(start..start + count)
    }

    /// Returns `true` if `vertex` is a valid id.
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    /// Removes `vertex` and all of its incident edges.
    ///
    /// Every vertex id above `vertex` is decremented by one, in the vertex
    /// table and in every stored edge. Unaffected entries keep their order.
    pub fn remove_vertex(&mut self, vertex: usize) -> Result<()> {
        self.check_vertex(vertex)?;

        // Outgoing edges (and, when undirected, one side of every incident pair)
        // are dropped with the list itself.
        self.adjacency.remove(vertex);

        for list in &mut self.adjacency {
            list.retain(|edge| edge.to != vertex);
            for edge in list.iter_mut() {
                if edge.to > vertex {
                    edge.to -= 1;
                }
            }
        }

        tracing::trace!(vertex, remaining = self.adjacency.len(), "removed vertex");
        Ok(())
    }

    /// Adds `from -> to` with the default weight of 1.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.add_weighted_edge(from, to, DEFAULT_EDGE_WEIGHT)
    }

    /// Adds `from -> to` with the given weight (and its mirror if undirected).
    ///
    /// Fails if either endpoint is invalid, if `from == to`, or if the edge
    /// already exists.
    pub fn add_weighted_edge(&mut self, from: usize, to: usize, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from == to {
            return Err(GraphError::SelfLoop { vertex: from });
        }
        if self.contains_edge(from, to) {
            return Err(GraphError::EdgeExists { from, to });
        }

        self.adjacency[from].push_front(Edge { to, weight });
        if !self.directed {
            self.adjacency[to].push_front(Edge { to: from, weight });
        }

        tracing::trace!(from, to, weight, "added edge");
        Ok(())
    }

    /// Replaces the weight of an existing edge (and its mirror if undirected).
    pub fn set_edge_weight(&mut self, from: usize, to: usize, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let edge = self.adjacency[from]
            .iter_mut()
            .find(|edge| edge.to == to)
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        edge.weight = weight;

        if !self.directed {
            if let Some(mirror) = self.adjacency[to].iter_mut().find(|edge| edge.to == from) {
                mirror.weight = weight;
            }
        }

        tracing::trace!(from, to, weight, "reweighted edge");
        Ok(())
    }

    /// Returns the weight of `from -> to`, or `None` if there is no such edge.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<Weight> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    /// Returns `true` if `from -> to` exists.
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.contains_vertex(to) && self.edge_weight(from, to).is_some()
    }

    /// Removes `from -> to` (and its mirror if undirected).
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<()> {
        if !self.contains_edge(from, to) {
            return Err(GraphError::EdgeNotFound { from, to });
        }

        Self::unlink(&mut self.adjacency[from], to);
        if !self.directed {
            Self::unlink(&mut self.adjacency[to], from);
        }

        tracing::trace!(from, to, "removed edge");
        Ok(())
    }

    fn unlink(list: &mut VecDeque<Edge>, to: usize) {
        if let Some(pos) = list.iter().position(|edge| edge.to == to) {
            list.remove(pos);
        }
    }

    /// Returns the number of edges; an undirected pair counts once.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(VecDeque::len).sum();
        if self.directed {
            entries
        } else {
            entries / 2
        }
    }

    /// Returns the outgoing edges of `vertex`, most recently added first.
    pub fn adjacent(&self, vertex: usize) -> Option<Adjacent<'_>> {
        self.adjacency.get(vertex).map(VecDeque::iter)
    }

    /// Returns the out-degree of `vertex`.
    pub fn out_degree(&self, vertex: usize) -> Option<usize> {
        self.adjacency.get(vertex).map(VecDeque::len)
    }

    /// Returns the in-degree of `vertex`.
    pub fn in_degree(&self, vertex: usize) -> Option<usize> {
        self.in_neighbors(vertex).map(|preds| preds.len())
    }

    /// Returns the vertices with an edge into `vertex`, in ascending order.
    pub fn in_neighbors(&self, vertex: usize) -> Option<Vec<usize>> {
        if !self.contains_vertex(vertex) {
            return None;
        }
        let preds = (0..self.vertex_count())
            .filter(|&u| self.neighbors(u).any(|edge| edge.to == vertex))
            .collect();
        Some(preds)
    }

    /// Iterates over every edge as `(from, to, weight)`.
    ///
    /// Undirected edges are reported once, from the lower id.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(from, list)| {
            list.iter()
                .filter(move |edge| self.directed || edge.to > from)
                .map(move |edge| (from, edge.to, edge.weight))
        })
    }

    /// Returns a new directed graph with every edge reversed.
    ///
    /// Weights are preserved. The result is directed even for an undirected
    /// input, in which case both mirrored entries survive as two edges.
    pub fn transpose(&self) -> Graph {
        let mut transposed = Graph::with_vertices(true, self.vertex_count());
        for (from, list) in self.adjacency.iter().enumerate() {
            for edge in list {
                transposed.adjacency[edge.to].push_front(Edge {
                    to: from,
                    weight: edge.weight,
                });
            }
        }
        transposed
    }

    /// Computes basic graph statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();

        let mut degrees: Vec<usize> = self.adjacency.iter().map(VecDeque::len).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };
        let entries: usize = degrees.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let average_degree = if vertex_count == 0 {
            0.0
        } else {
            entries as f64 / vertex_count as f64
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree,
        }
    }

    /// Fails with `VertexOutOfRange` unless `vertex` is a valid id.
    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                size: self.vertex_count(),
            })
        }
    }

    /// Outgoing edges of a vertex already known to be valid.
    #[inline]
    pub(crate) fn neighbors(&self, vertex: usize) -> Adjacent<'_> {
        self.adjacency[vertex].iter()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Directed: {}", self.directed)?;
        writeln!(f, "Vertices: {}", self.vertex_count())?;
        writeln!(f, "Edges: {}", self.edge_count())?;
        for (from, to, weight) in self.edges() {
            let arrow = if self.directed { "-->" } else { "<-->" };
            writeln!(f, "{from} {arrow} {to} (weight {weight})")?;
        }
        Ok(())
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges, undirected pairs counted once.
    pub edge_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree (adjacency entries per vertex).
    pub average_degree: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heads(graph: &Graph, vertex: usize) -> Vec<usize> {
        graph.adjacent(vertex).unwrap().map(|edge| edge.to).collect()
    }

    #[test]
    fn add_vertices_rejects_empty_batch() {
        let mut graph = Graph::directed();
        assert_eq!(graph.add_vertices(0), Err(GraphError::EmptyVertexBatch));
        assert_eq!(graph.add_vertices(3), Ok(0..3));
        assert_eq!(graph.add_vertex(), 3);
        assert_eq!(graph.vertex_count(), 4);
        assert!(graph.contains_vertex(3));
        assert!(!graph.contains_vertex(4));
    }

    #[test]
    fn edges_are_inserted_at_the_head() {
        let mut graph = Graph::with_vertices(true, 4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(0, 3).unwrap();
        assert_eq!(heads(&graph, 0), vec![3, 2, 1]);
    }

    #[test]
    fn duplicate_and_invalid_edges_fail() {
        let mut graph = Graph::with_vertices(true, 2);
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.add_edge(0, 1), Err(GraphError::EdgeExists { from: 0, to: 1 }));
        assert_eq!(graph.add_edge(1, 1), Err(GraphError::SelfLoop { vertex: 1 }));
        assert_eq!(
            graph.add_edge(0, 5),
            Err(GraphError::VertexOutOfRange { vertex: 5, size: 2 })
        );
        // The reverse direction is a distinct edge in a directed graph.
        assert!(graph.add_edge(1, 0).is_ok());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let mut graph = Graph::with_vertices(false, 3);
        graph.add_weighted_edge(0, 2, 9).unwrap();
        assert!(graph.contains_edge(2, 0));
        assert_eq!(graph.edge_weight(2, 0), Some(9));
        assert_eq!(graph.add_edge(2, 0), Err(GraphError::EdgeExists { from: 2, to: 0 }));
        assert_eq!(graph.edge_count(), 1);

        graph.set_edge_weight(2, 0, 4).unwrap();
        assert_eq!(graph.edge_weight(0, 2), Some(4));

        graph.remove_edge(2, 0).unwrap();
        assert!(!graph.contains_edge(0, 2));
        assert!(!graph.contains_edge(2, 0));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn missing_edges_are_reported() {
        let mut graph = Graph::with_vertices(true, 3);
        graph.add_weighted_edge(0, 1, 0).unwrap();

        // A zero-weight edge is distinguishable from no edge.
        assert_eq!(graph.edge_weight(0, 1), Some(0));
        assert_eq!(graph.edge_weight(1, 0), None);
        assert_eq!(graph.edge_weight(7, 0), None);

        assert_eq!(
            graph.set_edge_weight(1, 2, 5),
            Err(GraphError::EdgeNotFound { from: 1, to: 2 })
        );
        assert_eq!(graph.remove_edge(1, 0), Err(GraphError::EdgeNotFound { from: 1, to: 0 }));
    }

    #[test]
    fn remove_vertex_shifts_higher_ids() {
        let mut graph = Graph::with_vertices(true, 5);
        graph.add_weighted_edge(0, 4, 7).unwrap();
        graph.add_weighted_edge(0, 2, 1).unwrap();
        graph.add_weighted_edge(0, 3, 2).unwrap();
        graph.add_weighted_edge(3, 2, 5).unwrap();
        graph.add_weighted_edge(4, 0, 6).unwrap();

        graph.remove_vertex(2).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        // 3 -> 2 and 0 -> 2 are gone; 4 and 3 became 3 and 2.
        assert_eq!(heads(&graph, 0), vec![2, 3]);
        assert_eq!(graph.edge_weight(0, 3), Some(7));
        assert_eq!(graph.edge_weight(3, 0), Some(6));
        assert_eq!(graph.out_degree(2), Some(0));
        assert_eq!(graph.edge_count(), 3);

        assert_eq!(
            graph.remove_vertex(4),
            Err(GraphError::VertexOutOfRange { vertex: 4, size: 4 })
        );
    }

    #[test]
    fn remove_vertex_on_undirected_drops_both_sides() {
        let mut graph = Graph::with_vertices(false, 3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.remove_vertex(1).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.out_degree(0), Some(0));
        assert_eq!(graph.out_degree(1), Some(0));
    }

    #[test]
    fn transpose_reverses_and_keeps_weights() {
        let graph = Graph::from_edges(true, 3, [(0, 1, 3), (1, 2, -2)]).unwrap();
        let transposed = graph.transpose();

        assert!(transposed.is_directed());
        assert_eq!(transposed.edge_weight(1, 0), Some(3));
        assert_eq!(transposed.edge_weight(2, 1), Some(-2));
        assert!(!transposed.contains_edge(0, 1));
        assert_eq!(graph.edge_count(), transposed.edge_count());
    }

    #[test]
    fn transpose_of_undirected_is_directed_both_ways() {
        let graph = Graph::from_edges(false, 2, [(0, 1, 5)]).unwrap();
        let transposed = graph.transpose();
        assert!(transposed.is_directed());
        assert_eq!(transposed.edge_count(), 2);
    }

    #[test]
    fn degrees_and_neighbors() {
        let graph = Graph::from_edges(true, 3, [(0, 1, 1), (0, 2, 1), (1, 2, 1)]).unwrap();

        assert_eq!(graph.out_degree(0), Some(2));
        assert_eq!(graph.in_degree(2), Some(2));
        assert_eq!(graph.in_neighbors(2), Some(vec![0, 1]));
        assert_eq!(graph.in_neighbors(3), None);
        assert_eq!(graph.out_degree(3), None);
        assert!(graph.adjacent(3).is_none());
    }

    #[test]
    fn edges_reports_undirected_pairs_once() {
        let graph = Graph::from_edges(false, 3, [(0, 1, 2), (2, 1, 4)]).unwrap();
        let mut edges: Vec<_> = graph.edges().collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![(0, 1, 2), (1, 2, 4)]);
    }

    #[test]
    fn statistics_summarize_degrees() {
        let graph = Graph::from_edges(
            true,
            4,
            [(0, 1, 1), (0, 2, 1), (0, 3, 1), (1, 2, 1), (3, 1, 1), (3, 2, 1)],
        )
        .unwrap();
        let stats = graph.statistics();

        assert_eq!(stats.vertex_count, 4);
        assert_eq!(stats.edge_count, 6);
        assert_eq!(stats.min_degree, 0);
        assert_eq!(stats.max_degree, 3);
        assert_eq!(stats.median_degree, 1); // sorted: 0,1,2,3 -> median of 1,2 = 1.5 -> 1
        assert!((stats.average_degree - 1.5).abs() < 0.001);
    }

    #[test]
    fn deserialize_accepts_a_well_formed_graph() {
        let graph = Graph::from_edges(false, 3, [(0, 1, 4), (1, 2, -1)]).unwrap();
        let json = serde_json::to_string(&graph).unwrap();
        let restored: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, graph);
        assert_eq!(heads(&restored, 1), heads(&graph, 1));
    }

    #[test]
    fn deserialize_rejects_broken_structure() {
        let corrupt = [
            // Endpoint past the last vertex.
            r#"{"adjacency":[[{"to":5,"weight":1}]],"directed":true}"#,
            // Self-loop.
            r#"{"adjacency":[[{"to":0,"weight":1}]],"directed":true}"#,
            // Parallel edge.
            r#"{"adjacency":[[{"to":1,"weight":1},{"to":1,"weight":2}],[]],"directed":true}"#,
            // Undirected edge stored on one side only.
            r#"{"adjacency":[[{"to":1,"weight":1}],[]],"directed":false}"#,
            // Mirror with a different weight.
            r#"{"adjacency":[[{"to":1,"weight":1}],[{"to":0,"weight":2}]],"directed":false}"#,
        ];
        for json in corrupt {
            assert!(serde_json::from_str::<Graph>(json).is_err(), "accepted {json}");
        }
    }

    #[test]
    fn conversion_names_the_broken_edge() {
        let raw = RawGraph {
            adjacency: vec![VecDeque::from([Edge { to: 1, weight: 3 }]), VecDeque::new()],
            directed: false,
        };
        assert_eq!(Graph::try_from(raw), Err(GraphError::UnmirroredEdge { from: 0, to: 1 }));
    }

    #[test]
    fn display_lists_each_edge_once() {
        let graph = Graph::from_edges(false, 2, [(0, 1, 3)]).unwrap();
        let dump = graph.to_string();
        assert!(dump.contains("Directed: false"));
        assert!(dump.contains("Edges: 1"));
        assert!(dump.contains("0 <--> 1 (weight 3)"));
        assert_eq!(dump.matches("<-->").count(), 1);
    }
}
