//! Shortest paths: Dijkstra, Bellman-Ford and Floyd-Warshall.
//!
//! Single-source algorithms return a [`VisitState`] whose `distance` and
//! `parent` describe the shortest-path tree. Floyd-Warshall returns a dense
//! [`DistanceMatrix`].
//!
//! Relaxation never starts from an unreached vertex, and all sums are checked,
//! so the [`INFINITE_DISTANCE`] sentinel never takes part in arithmetic.

use serde::{Deserialize, Serialize};

use crate::collections::PriorityQueue;
use crate::error::{GraphError, Result};
use crate::graph::visit::{Color, VisitState};
use crate::graph::{Graph, Weight, INFINITE_DISTANCE};

/// `base + weight`, or `None` if `base` is unreached or the sum overflows.
#[inline]
fn extend(base: Weight, weight: Weight) -> Option<Weight> {
    if base == INFINITE_DISTANCE {
        return None;
    }
    base.checked_add(weight).filter(|&d| d != INFINITE_DISTANCE)
}

impl Graph {
    /// Dijkstra's single-source shortest paths from `start`.
    ///
    /// Every vertex is queued up front with its current distance as priority
    /// and extracted in order of increasing distance. The call fails with
    /// [`GraphError::NegativeWeight`] as soon as an extracted vertex has a
    /// negative outgoing edge; there is no pre-scan.
    pub fn dijkstra(&self, start: usize) -> Result<VisitState> {
        self.check_vertex(start)?;
        tracing::debug!(start, vertices = self.vertex_count(), "dijkstra");

        let n = self.vertex_count();
        let mut visit = VisitState::new(n);
        visit.distance[start] = 0;

        let mut queue = PriorityQueue::with_capacity(n);
        for v in 0..n {
            queue.enqueue_with_priority(v, visit.distance[v]);
        }

        while let Some(u) = queue.dequeue_min() {
            // Unreachable vertices are still scanned for negative edges but stay white.
            if visit.distance[u] != INFINITE_DISTANCE {
                visit.color[u] = Color::Black;
            }
            for edge in self.neighbors(u) {
                if edge.weight < 0 {
                    tracing::debug!(
                        from = u,
                        to = edge.to,
                        weight = edge.weight,
                        "dijkstra met a negative edge"
                    );
                    return Err(GraphError::NegativeWeight {
                        from: u,
                        to: edge.to,
                        weight: edge.weight,
                    });
                }

                let Some(candidate) = extend(visit.distance[u], edge.weight) else {
                    continue;
                };
                if candidate < visit.distance[edge.to] {
                    visit.distance[edge.to] = candidate;
                    visit.parent[edge.to] = Some(u);
                    queue.edit_priority(&edge.to, candidate);
                }
            }
        }

        Ok(visit)
    }

    /// Bellman-Ford single-source shortest paths from `start`.
    ///
    /// Relaxes every edge `n - 1` times, then makes one more pass: if any edge
    /// still relaxes, a negative cycle is reachable from `start` and the call
    /// fails with [`GraphError::NegativeCycle`].
    pub fn bellman_ford(&self, start: usize) -> Result<VisitState> {
        self.check_vertex(start)?;
        tracing::debug!(start, vertices = self.vertex_count(), "bellman-ford");

        let n = self.vertex_count();
        // Every adjacency entry, so undirected edges relax both ways.
        let edges: Vec<(usize, usize, Weight)> = (0..n)
            .flat_map(|u| self.neighbors(u).map(move |edge| (u, edge.to, edge.weight)))
            .collect();

        let mut visit = VisitState::new(n);
        visit.distance[start] = 0;
        visit.color[start] = Color::Black;

        for _ in 1..n {
            let mut changed = false;
            for &(u, v, weight) in &edges {
                if let Some(candidate) = extend(visit.distance[u], weight) {
                    if candidate < visit.distance[v] {
                        visit.distance[v] = candidate;
                        visit.parent[v] = Some(u);
                        visit.color[v] = Color::Black;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        let relaxable = edges.iter().any(|&(u, v, weight)| {
            extend(visit.distance[u], weight).is_some_and(|candidate| candidate < visit.distance[v])
        });
        if relaxable {
            tracing::debug!(start, "bellman-ford found a negative cycle");
            return Err(GraphError::NegativeCycle);
        }

        Ok(visit)
    }

    /// Floyd-Warshall all-pairs shortest paths.
    ///
    /// Fails with [`GraphError::NegativeCycle`] as soon as a diagonal entry
    /// turns negative during relaxation.
    pub fn floyd_warshall(&self) -> Result<DistanceMatrix> {
        let n = self.vertex_count();
        tracing::debug!(vertices = n, "floyd-warshall");

        let mut dist = DistanceMatrix::unreachable(n);
        for i in 0..n {
            dist.set(i, i, 0);
            for edge in self.neighbors(i) {
                dist.set(i, edge.to, edge.weight);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through_k = dist.raw(i, k);
                if through_k == INFINITE_DISTANCE {
                    continue;
                }
                for j in 0..n {
                    let k_to_j = dist.raw(k, j);
                    if k_to_j == INFINITE_DISTANCE {
                        continue;
                    }
                    if let Some(candidate) = extend(through_k, k_to_j) {
                        if candidate < dist.raw(i, j) {
                            dist.set(i, j, candidate);
                        }
                    }
                }
                if dist.raw(i, i) < 0 {
                    tracing::debug!(vertex = i, "floyd-warshall found a negative cycle");
                    return Err(GraphError::NegativeCycle);
                }
            }
        }

        Ok(dist)
    }
}

/// Dense `n x n` distance table stored row-major in one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Weight>,
}

impl DistanceMatrix {
    fn unreachable(size: usize) -> Self {
        Self {
            size,
            cells: vec![INFINITE_DISTANCE; size * size],
        }
    }

    #[inline]
    fn raw(&self, from: usize, to: usize) -> Weight {
        self.cells[from * self.size + to]
    }

    #[inline]
    fn set(&mut self, from: usize, to: usize, distance: Weight) {
        self.cells[from * self.size + to] = distance;
    }

    /// Number of vertices (rows and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest distance from `from` to `to`, or `None` if unreachable or out
    /// of range.
    pub fn get(&self, from: usize, to: usize) -> Option<Weight> {
        if from >= self.size || to >= self.size {
            return None;
        }
        Some(self.raw(from, to)).filter(|&d| d != INFINITE_DISTANCE)
    }

    /// Raw row of distances from `from`; unreachable entries hold
    /// [`INFINITE_DISTANCE`].
    pub fn row(&self, from: usize) -> Option<&[Weight]> {
        if from >= self.size {
            return None;
        }
        Some(&self.cells[from * self.size..(from + 1) * self.size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small weighted DAG with a cheaper detour: 0 -> 2 costs 5 directly, 3 via 1.
    fn detour() -> Graph {
        Graph::from_edges(true, 4, [(0, 1, 1), (1, 2, 2), (0, 2, 5), (2, 3, 1)]).unwrap()
    }

    #[test]
    fn dijkstra_prefers_cheaper_detour() {
        let visit = detour().dijkstra(0).unwrap();
        assert_eq!(visit.distance(2), Some(3));
        assert_eq!(visit.distance(3), Some(4));
        assert_eq!(visit.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn dijkstra_rejects_negative_edges() {
        let graph = Graph::from_edges(true, 3, [(0, 1, 2), (1, 2, -1)]).unwrap();
        assert_eq!(
            graph.dijkstra(0),
            Err(GraphError::NegativeWeight { from: 1, to: 2, weight: -1 })
        );
    }

    #[test]
    fn dijkstra_guard_fires_on_unreachable_vertices_too() {
        // Vertex 2 is never reached from 0 but is still extracted.
        let graph = Graph::from_edges(true, 4, [(0, 1, 2), (2, 3, -1)]).unwrap();
        assert!(matches!(graph.dijkstra(0), Err(GraphError::NegativeWeight { from: 2, .. })));
    }

    #[test]
    fn unreachable_vertices_have_no_distance() {
        let graph = Graph::from_edges(true, 3, [(1, 0, 4)]).unwrap();
        let visit = graph.dijkstra(0).unwrap();
        assert_eq!(visit.distance(0), Some(0));
        assert_eq!(visit.distance(1), None);
        assert_eq!(visit.parent(2), None);

        let visit = graph.bellman_ford(0).unwrap();
        assert_eq!(visit.distance(1), None);
    }

    #[test]
    fn bellman_ford_handles_negative_edges() {
        let graph = Graph::from_edges(true, 3, [(0, 1, 4), (0, 2, 5), (2, 1, -3)]).unwrap();
        let visit = graph.bellman_ford(0).unwrap();
        assert_eq!(visit.distance(1), Some(2));
        assert_eq!(visit.parent(1), Some(2));
    }

    #[test]
    fn bellman_ford_detects_reachable_negative_cycle() {
        let graph = Graph::from_edges(true, 3, [(0, 1, 1), (1, 2, -2), (2, 1, 1)]).unwrap();
        assert_eq!(graph.bellman_ford(0), Err(GraphError::NegativeCycle));
        // Starting inside the cycle fails as well.
        assert_eq!(graph.bellman_ford(2), Err(GraphError::NegativeCycle));
    }

    #[test]
    fn bellman_ford_ignores_unreachable_negative_cycle() {
        let graph = Graph::from_edges(true, 4, [(0, 1, 1), (2, 3, -2), (3, 2, 1)]).unwrap();
        let visit = graph.bellman_ford(0).unwrap();
        assert_eq!(visit.distance(1), Some(1));
        assert_eq!(visit.distance(2), None);
    }

    #[test]
    fn floyd_warshall_all_pairs() {
        let matrix = detour().floyd_warshall().unwrap();
        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.get(0, 3), Some(4));
        assert_eq!(matrix.get(1, 3), Some(3));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.get(2, 2), Some(0));
        assert_eq!(matrix.get(9, 0), None);
        assert_eq!(matrix.row(3).map(|row| row[3]), Some(0));
    }

    #[test]
    fn floyd_warshall_detects_negative_cycle() {
        let graph = Graph::from_edges(true, 3, [(0, 1, 1), (1, 2, -2), (2, 1, 1)]).unwrap();
        assert_eq!(graph.floyd_warshall(), Err(GraphError::NegativeCycle));
    }

    #[test]
    fn undirected_negative_edge_is_a_negative_cycle() {
        let graph = Graph::from_edges(false, 2, [(0, 1, -1)]).unwrap();
        assert_eq!(graph.bellman_ford(0), Err(GraphError::NegativeCycle));
        assert_eq!(graph.floyd_warshall(), Err(GraphError::NegativeCycle));
    }
}
