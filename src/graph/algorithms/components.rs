//! Connectivity, (strongly) connected components and topological order.
//!
//! Strongly connected components use Kosaraju's algorithm:
//! 1. DFS forest on the graph to get finish times
//! 2. order vertices by descending finish time
//! 3. transpose the graph
//! 4. DFS forest on the transpose, restarting in that order; each tree is one SCC

use crate::collections::ComponentSet;
use crate::error::{GraphError, Result};
use crate::graph::visit::{Color, VisitState};
use crate::graph::Graph;

impl Graph {
    /// Returns `true` if one DFS from vertex 0 reaches every vertex.
    ///
    /// Always `false` for a directed graph; see
    /// [`is_strongly_connected`](Self::is_strongly_connected). An empty graph
    /// is connected.
    pub fn is_connected(&self) -> bool {
        if self.is_directed() {
            return false;
        }
        match self.dfs(0) {
            Ok(visit) => visit.colors().iter().all(|&c| c == Color::Black),
            Err(_) => self.is_empty(),
        }
    }

    /// Returns `true` if the graph forms a single strongly connected component.
    ///
    /// Always `false` for an undirected graph. An empty graph is strongly
    /// connected.
    pub fn is_strongly_connected(&self) -> bool {
        if !self.is_directed() {
            return false;
        }
        match self.strongly_connected_components() {
            Ok(components) => components.len() <= 1,
            Err(_) => false,
        }
    }

    /// Connected components of an undirected graph, discovered in id order.
    pub fn connected_components(&self) -> Result<ComponentSet> {
        if self.is_directed() {
            tracing::debug!("connected components requested on a directed graph");
            return Err(GraphError::RequiresUndirected);
        }
        tracing::debug!(vertices = self.vertex_count(), "connected components");

        let order: Vec<usize> = (0..self.vertex_count()).collect();
        Ok(self.components_in_order(&order))
    }

    /// Strongly connected components of a directed graph (Kosaraju).
    pub fn strongly_connected_components(&self) -> Result<ComponentSet> {
        if !self.is_directed() {
            tracing::debug!("strongly connected components requested on an undirected graph");
            return Err(GraphError::RequiresDirected);
        }
        if self.is_empty() {
            return Ok(ComponentSet::new());
        }
        tracing::debug!(vertices = self.vertex_count(), "strongly connected components");

        let order = self.dfs_forest(0)?.by_descending_finish();
        Ok(self.transpose().components_in_order(&order))
    }

    /// Topological order of a directed acyclic graph.
    ///
    /// Vertices are listed by descending DFS-forest finish time, so every edge
    /// points from an earlier to a later entry.
    pub fn topological_sort(&self) -> Result<Vec<usize>> {
        if !self.is_directed() {
            return Err(GraphError::RequiresDirected);
        }
        if self.is_cyclic() {
            tracing::debug!("topological sort requested on a cyclic graph");
            return Err(GraphError::Cyclic);
        }
        if self.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(vertices = self.vertex_count(), "topological sort");

        Ok(self.dfs_forest(0)?.by_descending_finish())
    }

    /// Runs a DFS forest restarting from `order`; each tree becomes one component.
    fn components_in_order(&self, order: &[usize]) -> ComponentSet {
        let mut visit = VisitState::new(self.vertex_count());
        let mut clock = 0;
        let mut components = ComponentSet::new();

        for &root in order {
            if visit.color[root] != Color::White {
                continue;
            }
            let mut members = Vec::new();
            self.dfs_visit(root, &mut clock, &mut visit, |v| members.push(v));
            components.push(members);
        }

        components
    }
}
