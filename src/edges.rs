//! Ordered edge collection owned by every node.
//!
//! Edges are kept in a `Vec` sorted by label so that iteration yields children
//! in ascending byte order. Lookups use binary search; insertions and removals
//! shift the tail of the vector.

use crate::node::Node;

/// A labeled ownership link from a node to one of its children.
///
/// The label always equals the first byte of `node.prefix`.
#[derive(Debug, Clone)]
pub(crate) struct Edge<V> {
    pub label: u8,
    pub node: Box<Node<V>>,
}

/// Children of a node, sorted ascending by label with at most one entry per label.
#[derive(Debug, Clone)]
pub(crate) struct Edges<V> {
    entries: Vec<Edge<V>>,
}

impl<V> Default for Edges<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Edges<V> {
    pub fn new() -> Self {
        Edges {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    fn search(&self, label: u8) -> Result<usize, usize> {
        self.entries.binary_search_by(|edge| edge.label.cmp(&label))
    }

    /// Returns the index of the edge for `label`, if present.
    pub fn position(&self, label: u8) -> Option<usize> {
        self.search(label).ok()
    }

    /// Index of the first edge whose label is `>= label`.
    pub fn lower_bound(&self, label: u8) -> usize {
        match self.search(label) {
            Ok(idx) | Err(idx) => idx,
        }
    }

    /// Inserts a new edge keeping labels sorted.
    pub fn add(&mut self, label: u8, node: Box<Node<V>>) {
        debug_assert_eq!(node.prefix.first(), Some(&label));
        match self.search(label) {
            Ok(idx) => {
                debug_assert!(false, "duplicate edge label {:#04x}", label);
                self.entries[idx].node = node;
            }
            Err(idx) => self.entries.insert(idx, Edge { label, node }),
        }
    }

    pub fn get(&self, label: u8) -> Option<&Node<V>> {
        self.position(label).map(|idx| &*self.entries[idx].node)
    }

    pub fn get_mut(&mut self, label: u8) -> Option<&mut Node<V>> {
        match self.position(label) {
            Some(idx) => Some(&mut *self.entries[idx].node),
            None => None,
        }
    }

    /// Child at a position previously returned by [`Edges::position`].
    pub fn child(&self, idx: usize) -> &Node<V> {
        &self.entries[idx].node
    }

    pub fn child_mut(&mut self, idx: usize) -> &mut Node<V> {
        &mut self.entries[idx].node
    }

    /// Replaces the child stored under `label`, returning the displaced child.
    ///
    /// # Panics
    ///
    /// Panics if no edge carries `label`. Callers only replace edges they have
    /// just found, so a miss means the tree is corrupt.
    pub fn update(&mut self, label: u8, node: Box<Node<V>>) -> Box<Node<V>> {
        match self.search(label) {
            Ok(idx) => std::mem::replace(&mut self.entries[idx].node, node),
            Err(_) => panic!("replacing missing edge {:#04x}", label),
        }
    }

    /// Removes the edge for `label`, preserving the order of the rest.
    pub fn remove(&mut self, label: u8) -> Option<Box<Node<V>>> {
        match self.search(label) {
            Ok(idx) => Some(self.entries.remove(idx).node),
            Err(_) => None,
        }
    }

    /// Detaches the sole child, leaving the collection empty.
    ///
    /// Returns `None` unless there is exactly one edge.
    pub fn take_only(&mut self) -> Option<Box<Node<V>>> {
        if self.entries.len() != 1 {
            return None;
        }
        self.entries.pop().map(|edge| edge.node)
    }

    pub fn first(&self) -> Option<&Node<V>> {
        self.entries.first().map(|edge| &*edge.node)
    }

    pub fn last(&self) -> Option<&Node<V>> {
        self.entries.last().map(|edge| &*edge.node)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<V>> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Edge<V>> {
        self.entries.iter_mut()
    }

    /// Edges from position `idx` onwards, in label order.
    pub fn iter_from(&self, idx: usize) -> std::slice::Iter<'_, Edge<V>> {
        self.entries[idx.min(self.entries.len())..].iter()
    }

    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }
}
