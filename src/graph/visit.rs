//! Per-vertex traversal records.
//!
//! Every traversal and single-source shortest-path call returns a fresh
//! [`VisitState`] sized to the graph at call time. It is a snapshot: once the
//! graph is mutated the state no longer describes it.

use serde::{Deserialize, Serialize};

use crate::graph::{Weight, INFINITE_DISTANCE};

/// Traversal state of a vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Not yet discovered.
    #[default]
    White,
    /// Discovered, exploration still in progress.
    Gray,
    /// Exploration finished.
    Black,
}

/// Discovery/finish times, parents, distances and colors for every vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitState {
    pub(crate) start_time: Vec<Option<usize>>,
    pub(crate) end_time: Vec<Option<usize>>,
    pub(crate) parent: Vec<Option<usize>>,
    pub(crate) distance: Vec<Weight>,
    pub(crate) color: Vec<Color>,
}

impl VisitState {
    /// Creates a state for `len` vertices, all white, unreached and parentless.
    pub fn new(len: usize) -> Self {
        Self {
            start_time: vec![None; len],
            end_time: vec![None; len],
            parent: vec![None; len],
            distance: vec![INFINITE_DISTANCE; len],
            color: vec![Color::White; len],
        }
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.color.len()
    }

    /// Returns `true` if the state covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
    }

    /// Discovery time of `vertex`, if it was discovered.
    pub fn start_time(&self, vertex: usize) -> Option<usize> {
        self.start_time.get(vertex).copied().flatten()
    }

    /// Finish time of `vertex`, if it was finished.
    pub fn end_time(&self, vertex: usize) -> Option<usize> {
        self.end_time.get(vertex).copied().flatten()
    }

    /// Parent of `vertex` in the traversal tree.
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    /// Distance of `vertex` from the source, or `None` if unreached.
    pub fn distance(&self, vertex: usize) -> Option<Weight> {
        self.distance
            .get(vertex)
            .copied()
            .filter(|&d| d != INFINITE_DISTANCE)
    }

    /// Color of `vertex`. Out-of-range ids are reported white.
    pub fn color(&self, vertex: usize) -> Color {
        self.color.get(vertex).copied().unwrap_or_default()
    }

    /// All discovery times, indexed by vertex.
    pub fn start_times(&self) -> &[Option<usize>] {
        &self.start_time
    }

    /// All finish times, indexed by vertex.
    pub fn end_times(&self) -> &[Option<usize>] {
        &self.end_time
    }

    /// All parents, indexed by vertex.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// All raw distances, indexed by vertex; unreached entries hold
    /// [`INFINITE_DISTANCE`].
    pub fn distances(&self) -> &[Weight] {
        &self.distance
    }

    /// All colors, indexed by vertex.
    pub fn colors(&self) -> &[Color] {
        &self.color
    }

    /// Returns the tree path from the root to `vertex` by following parents.
    ///
    /// Returns `None` if `vertex` was never discovered or is out of range.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        if self.color(vertex) == Color::White {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parent(current) {
            // Parent chains are acyclic; the bound guards against a corrupted state.
            if path.len() > self.len() {
                return None;
            }
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Vertex ids ordered by descending finish time. Unfinished vertices go last.
    pub(crate) fn by_descending_finish(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by_key(|&v| std::cmp::Reverse(self.end_time[v]));
        order
    }
}
