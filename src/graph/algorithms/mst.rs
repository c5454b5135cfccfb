//! Minimum spanning trees (Prim and Kruskal).
//!
//! Both builders require a connected undirected graph and return a new
//! undirected graph on the same vertex set holding exactly the tree edges.

use crate::collections::{DisjointSet, PriorityQueue};
use crate::error::{GraphError, Result};
use crate::graph::visit::{Color, VisitState};
use crate::graph::{Graph, Weight};

impl Graph {
    /// Prim's algorithm, growing the tree from vertex 0.
    ///
    /// A vertex's priority is the lightest known edge joining it to the tree.
    /// When a vertex is extracted, the edge to its parent enters the result.
    ///
    /// Vertices enter the queue when first reached (white to gray), so any
    /// weight up to `Weight::MAX` is a usable tree edge.
    pub fn prim_mst(&self) -> Result<Graph> {
        self.check_spanning_tree_input()?;
        tracing::debug!(vertices = self.vertex_count(), "prim mst");

        let n = self.vertex_count();
        let mut tree = Graph::with_vertices(false, n);
        if n == 0 {
            return Ok(tree);
        }

        let mut visit = VisitState::new(n);
        visit.distance[0] = 0;
        visit.color[0] = Color::Gray;

        let mut queue = PriorityQueue::with_capacity(n);
        queue.enqueue_with_priority(0, 0);

        while let Some(u) = queue.dequeue_min() {
            if let Some(parent) = visit.parent[u] {
                tree.add_weighted_edge(parent, u, visit.distance[u])?;
            }
            visit.color[u] = Color::Black;

            for edge in self.neighbors(u) {
                let v = edge.to;
                match visit.color[v] {
                    Color::White => {
                        visit.color[v] = Color::Gray;
                        queue.enqueue_with_priority(v, edge.weight);
                    }
                    Color::Gray if edge.weight < visit.distance[v] => {
                        queue.edit_priority(&v, edge.weight);
                    }
                    _ => continue,
                }
                visit.parent[v] = Some(u);
                visit.distance[v] = edge.weight;
            }
        }

        Ok(tree)
    }

    /// Kruskal's algorithm.
    ///
    /// Each undirected edge is collected once (from its lower endpoint), the
    /// list is stably sorted by weight, and edges joining two different trees
    /// are accepted until `n - 1` have been taken.
    pub fn kruskal_mst(&self) -> Result<Graph> {
        self.check_spanning_tree_input()?;
        tracing::debug!(vertices = self.vertex_count(), "kruskal mst");

        let n = self.vertex_count();
        let mut tree = Graph::with_vertices(false, n);

        let mut edges: Vec<(usize, usize, Weight)> = self.edges().collect();
        edges.sort_by_key(|&(_, _, weight)| weight);

        let mut forest = DisjointSet::new(n);
        let mut accepted = 0;
        for (u, v, weight) in edges {
            if accepted + 1 >= n {
                break;
            }
            if forest.union(u, v) {
                tree.add_weighted_edge(u, v, weight)?;
                accepted += 1;
            }
        }

        Ok(tree)
    }

    fn check_spanning_tree_input(&self) -> Result<()> {
        if self.is_directed() {
            tracing::debug!("spanning tree requested on a directed graph");
            return Err(GraphError::RequiresUndirected);
        }
        if !self.is_connected() {
            tracing::debug!(
                vertices = self.vertex_count(),
                "spanning tree requested on a disconnected graph"
            );
            return Err(GraphError::Disconnected);
        }
        Ok(())
    }
}
