//! A FIFO queue whose entries also carry an editable priority.
//!
//! The queue serves two access patterns over the same storage:
//! - [`PriorityQueue::dequeue`] pops in insertion order and ignores priorities.
//! - [`PriorityQueue::dequeue_min`] scans for the smallest priority and pops it.
//!   On ties the entry closest to the front wins.
//!
//! Priorities are edited in place with [`PriorityQueue::edit_priority`], which
//! locates the entry by value. Value uniqueness is the caller's invariant; only
//! the first match is updated.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `enqueue` | \(O(1)\) amortized | Appends to the back |
//! | `dequeue` | \(O(1)\) | Pops the front |
//! | `dequeue_min` | \(O(n)\) | Linear scan, first minimum wins |
//! | `edit_priority` | \(O(n)\) | Linear scan by value |

use std::collections::VecDeque;

use crate::graph::Weight;

/// FIFO queue of `(value, priority)` entries with minimum-priority extraction.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = Weight> {
    entries: VecDeque<(T, P)>,
}

impl<T, P> PriorityQueue<T, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `value` with the given priority.
    pub fn enqueue_with_priority(&mut self, value: T, priority: P) {
        self.entries.push_back((value, priority));
    }

    /// Pops the oldest entry, regardless of priority.
    pub fn dequeue(&mut self) -> Option<T> {
        self.entries.pop_front().map(|(value, _)| value)
    }

    /// Returns the oldest entry without removing it.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.entries.front().map(|(value, priority)| (value, priority))
    }
}

impl<T, P: Default> PriorityQueue<T, P> {
    /// Appends `value` with the default priority.
    pub fn enqueue(&mut self, value: T) {
        self.entries.push_back((value, P::default()));
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Pops the entry with the smallest priority.
    ///
    /// When several entries share the minimum, the one nearest the front wins.
    pub fn dequeue_min(&mut self) -> Option<T> {
        let mut min_idx = 0;
        for (idx, (_, priority)) in self.entries.iter().enumerate().skip(1) {
            // Strict comparison keeps the earliest of equal priorities.
            if *priority < self.entries[min_idx].1 {
                min_idx = idx;
            }
        }
        self.entries.remove(min_idx).map(|(value, _)| value)
    }
}

impl<T: PartialEq, P> PriorityQueue<T, P> {
    /// Replaces the priority of the first entry holding `value`.
    ///
    /// Returns `false` if no entry holds `value`.
    pub fn edit_priority(&mut self, value: &T, priority: P) -> bool {
        match self.entries.iter_mut().find(|(v, _)| v == value) {
            Some(entry) => {
                entry.1 = priority;
                true
            }
            None => false,
        }
    }

    /// Returns the priority of the first entry holding `value`.
    pub fn priority_of(&self, value: &T) -> Option<&P> {
        self.entries.iter().find(|(v, _)| v == value).map(|(_, p)| p)
    }

    /// Returns `true` if some entry holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.entries.iter().any(|(v, _)| v == value)
    }
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
