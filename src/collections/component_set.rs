//! Output type of the component queries.

use serde::{Deserialize, Serialize};

/// An ordered sequence of vertex sets.
///
/// Components appear in discovery order. Within one component, vertex ids are
/// listed in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSet {
    components: Vec<Vec<usize>>,
}

impl ComponentSet {
    /// Creates an empty set of components.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a component. Empty components are ignored.
    pub fn push(&mut self, mut members: Vec<usize>) {
        if members.is_empty() {
            return;
        }
        members.sort_unstable();
        self.components.push(members);
    }

    /// Adds `vertex` to the component at `index`.
    ///
    /// Returns `false` if there is no such component.
    pub fn add_to(&mut self, index: usize, vertex: usize) -> bool {
        let Some(members) = self.components.get_mut(index) else {
            return false;
        };
        if let Err(pos) = members.binary_search(&vertex) {
            members.insert(pos, vertex);
        }
        true
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the members of the component at `index`.
    pub fn component(&self, index: usize) -> Option<&[usize]> {
        self.components.get(index).map(Vec::as_slice)
    }

    /// Returns `true` if the component at `index` contains `vertex`.
    pub fn contains(&self, index: usize, vertex: usize) -> bool {
        self.component(index)
            .is_some_and(|members| members.binary_search(&vertex).is_ok())
    }

    /// Returns the index of the component holding `vertex`.
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.components
            .iter()
            .position(|members| members.binary_search(&vertex).is_ok())
    }

    /// Total number of vertices across all components.
    pub fn total_vertices(&self) -> usize {
        self.components.iter().map(Vec::len).sum()
    }

    /// Iterates over the components in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.components.iter().map(Vec::as_slice)
    }
}

impl<'a> IntoIterator for &'a ComponentSet {
    type Item = &'a Vec<usize>;
    type IntoIter = std::slice::Iter<'a, Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
