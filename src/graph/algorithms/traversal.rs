//! Breadth-first and depth-first traversal, and cycle detection.
//!
//! Both traversals stamp vertices from a single logical clock that ticks once
//! on discovery and once on finish, so every vertex reached gets two distinct
//! times. BFS stamps discovery when a vertex is *dequeued*, not when it is
//! enqueued.
//!
//! DFS is an explicit-stack walk that assigns times in exactly the order a
//! recursive walk would, so deep graphs cannot overflow the call stack.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::visit::{Color, VisitState};
use crate::graph::{Adjacent, Graph};

/// Returns the current clock value and advances it.
#[inline]
fn tick(clock: &mut usize) -> usize {
    let now = *clock;
    *clock += 1;
    now
}

impl Graph {
    /// Breadth-first search from `start`.
    ///
    /// Fills discovery/finish times, BFS-tree parents and hop distances.
    /// Vertices unreachable from `start` stay white.
    pub fn bfs(&self, start: usize) -> Result<VisitState> {
        self.check_vertex(start)?;
        tracing::debug!(start, vertices = self.vertex_count(), "bfs");

        let mut visit = VisitState::new(self.vertex_count());
        let mut queue = VecDeque::new();
        let mut clock = 0;

        visit.distance[start] = 0;
        visit.color[start] = Color::Gray;
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            visit.start_time[u] = Some(tick(&mut clock));
            for edge in self.neighbors(u) {
                let v = edge.to;
                if visit.color[v] == Color::White {
                    visit.color[v] = Color::Gray;
                    visit.parent[v] = Some(u);
                    visit.distance[v] = visit.distance[u] + 1;
                    queue.push_back(v);
                }
            }
            visit.color[u] = Color::Black;
            visit.end_time[u] = Some(tick(&mut clock));
        }

        Ok(visit)
    }

    /// Depth-first search from `start`, visiting only what `start` reaches.
    pub fn dfs(&self, start: usize) -> Result<VisitState> {
        self.check_vertex(start)?;
        tracing::debug!(start, vertices = self.vertex_count(), "dfs");

        let mut visit = VisitState::new(self.vertex_count());
        let mut clock = 0;
        self.dfs_visit(start, &mut clock, &mut visit, |_| {});
        Ok(visit)
    }

    /// Depth-first search of the whole graph.
    ///
    /// Walks from `start` first, then restarts from every still-white vertex
    /// in id order. All trees share one clock and one [`VisitState`].
    pub fn dfs_forest(&self, start: usize) -> Result<VisitState> {
        self.check_vertex(start)?;
        tracing::debug!(start, vertices = self.vertex_count(), "dfs forest");

        let mut visit = VisitState::new(self.vertex_count());
        let mut clock = 0;
        self.dfs_visit(start, &mut clock, &mut visit, |_| {});
        for root in 0..self.vertex_count() {
            if visit.color[root] == Color::White {
                self.dfs_visit(root, &mut clock, &mut visit, |_| {});
            }
        }
        Ok(visit)
    }

    /// Runs one DFS tree from the white vertex `root`.
    ///
    /// `on_finish` is called with each vertex as it turns black.
    pub(crate) fn dfs_visit<F>(
        &self,
        root: usize,
        clock: &mut usize,
        visit: &mut VisitState,
        mut on_finish: F,
    ) where
        F: FnMut(usize),
    {
        visit.color[root] = Color::Gray;
        visit.start_time[root] = Some(tick(clock));

        // Stack of (vertex, remaining outgoing edges).
        let mut stack: Vec<(usize, Adjacent<'_>)> = vec![(root, self.neighbors(root))];
        while let Some((u, mut edges)) = stack.pop() {
            if let Some(edge) = edges.next() {
                stack.push((u, edges));
                let v = edge.to;
                if visit.color[v] == Color::White {
                    visit.parent[v] = Some(u);
                    visit.color[v] = Color::Gray;
                    visit.start_time[v] = Some(tick(clock));
                    stack.push((v, self.neighbors(v)));
                }
            } else {
                visit.color[u] = Color::Black;
                visit.end_time[u] = Some(tick(clock));
                on_finish(u);
            }
        }
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// A cycle is a DFS edge into a gray vertex. In an undirected graph the
    /// edge back to the immediate parent is the mirror of the tree edge and
    /// does not count.
    pub fn is_cyclic(&self) -> bool {
        let mut visit = VisitState::new(self.vertex_count());
        (0..self.vertex_count())
            .any(|root| visit.color[root] == Color::White && self.cycle_from(root, &mut visit))
    }

    fn cycle_from(&self, root: usize, visit: &mut VisitState) -> bool {
        visit.color[root] = Color::Gray;

        let mut stack: Vec<(usize, Adjacent<'_>)> = vec![(root, self.neighbors(root))];
        while let Some((u, mut edges)) = stack.pop() {
            let Some(edge) = edges.next() else {
                visit.color[u] = Color::Black;
                continue;
            };
            stack.push((u, edges));

            let v = edge.to;
            match visit.color[v] {
                Color::White => {
                    visit.parent[v] = Some(u);
                    visit.color[v] = Color::Gray;
                    stack.push((v, self.neighbors(v)));
                }
                Color::Gray if self.is_directed() || visit.parent[u] != Some(v) => {
                    tracing::debug!(from = u, to = v, "back edge closes a cycle");
                    return true;
                }
                _ => {}
            }
        }
        false
    }

    /// Lazily yields vertices reachable from `start` in breadth-first order.
    ///
    /// An out-of-range `start` yields nothing.
    pub fn bfs_iter(&self, start: usize) -> Bfs<'_> {
        Bfs::new(self, start)
    }

    /// Lazily yields vertices reachable from `start` in stack order.
    ///
    /// An out-of-range `start` yields nothing.
    pub fn dfs_iter(&self, start: usize) -> Dfs<'_> {
        Dfs::new(self, start)
    }
}

/// Lazy breadth-first walk over vertex ids.
///
/// Neighbors are taken head first, so the newest edge out of a vertex is
/// followed first. No times or parents are recorded; use [`Graph::bfs`] when
/// a [`VisitState`] is needed.
pub struct Bfs<'a> {
    graph: &'a Graph,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a> Bfs<'a> {
    /// Starts a walk at `start`; an id outside the graph yields nothing.
    pub fn new(graph: &'a Graph, start: usize) -> Self {
        let len = graph.vertex_count();
        let mut visited = vec![false; len];
        let mut queue = VecDeque::new();

        if start < len {
            visited[start] = true;
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for edge in self.graph.neighbors(u) {
            if !self.visited[edge.to] {
                self.visited[edge.to] = true;
                self.queue.push_back(edge.to);
            }
        }

        Some(u)
    }
}

/// Lazy depth-first walk over vertex ids.
///
/// A vertex is marked when pushed, so ids come out in stack order: the last
/// neighbor in adjacency order is yielded next. This differs from the
/// recursive preorder that [`Graph::dfs`] stamps.
pub struct Dfs<'a> {
    graph: &'a Graph,
    visited: Vec<bool>,
    stack: Vec<usize>,
}

impl<'a> Dfs<'a> {
    /// Starts a walk at `start`; an id outside the graph yields nothing.
    pub fn new(graph: &'a Graph, start: usize) -> Self {
        let len = graph.vertex_count();
        let mut visited = vec![false; len];
        let mut stack = Vec::new();

        if start < len {
            visited[start] = true;
            stack.push(start);
        }

        Self {
            graph,
            visited,
            stack,
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for edge in self.graph.neighbors(u) {
            if !self.visited[edge.to] {
                self.visited[edge.to] = true;
                self.stack.push(edge.to);
            }
        }

        Some(u)
    }
}
