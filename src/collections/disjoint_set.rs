//! Disjoint Set (Union-Find) over a fixed universe of vertex ids.
//!
//! Kruskal's algorithm uses this to decide whether an edge joins two different
//! trees of the growing forest.
//!
//! # Behavior
//!
//! - Union by rank keeps trees shallow (height is at most \(\log_2 n\)).
//! - `find` walks the parent chain and does **not** compress paths, so it only
//!   needs `&self`.

/// A Disjoint Set (Union-Find) data structure over `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    /// Parent pointers; a root is its own parent.
    parent: Vec<usize>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `size` singleton sets `{0}, {1}, ..., {size - 1}`.
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Adds a new singleton set and returns its id.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    /// Finds the representative of the set containing `id`.
    ///
    /// Returns `None` if `id` is outside the universe.
    pub fn find(&self, id: usize) -> Option<usize> {
        if id >= self.parent.len() {
            return None;
        }
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        Some(root)
    }

    /// Unites the sets containing `a` and `b`.
    ///
    /// Returns `true` if they were in different sets, `false` if they were
    /// already joined or either id is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (Some(x), Some(y)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if x == y {
            return false;
        }

        let (rank_x, rank_y) = (self.rank[x], self.rank[y]);
        if rank_x > rank_y {
            self.parent[y] = x;
        } else {
            // Ties attach `x` under `y`, which then grows by one.
            self.parent[x] = y;
            if rank_x == rank_y {
                self.rank[y] = rank_y.saturating_add(1);
            }
        }

        true
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(id, &parent)| id == parent)
            .count()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
