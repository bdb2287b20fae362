//! Internal node implementation for the radix tree.
//!
//! Every node owns the span of key bytes collapsed into it since its parent
//! edge, an optional value and its ordered children. Ownership is strictly
//! hierarchical: children are boxed and there are no parent links.

use std::mem;

use crate::edges::{Edge, Edges};

/// Internal node type for the radix tree.
#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    /// Key bytes covered by this node, starting with the label of its parent edge
    pub prefix: Vec<u8>,

    /// The value stored at this node, if the path to it is a stored key
    pub value: Option<V>,

    /// Children ordered by the first byte of their prefix
    pub edges: Edges<V>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node::new(Vec::new())
    }
}

impl<V> Node<V> {
    /// Creates a new node without a value.
    pub fn new(prefix: Vec<u8>) -> Self {
        Node {
            prefix,
            value: None,
            edges: Edges::new(),
        }
    }

    /// Creates a new childless node holding `value`.
    pub fn leaf(prefix: Vec<u8>, value: V) -> Self {
        Node {
            prefix,
            value: Some(value),
            edges: Edges::new(),
        }
    }

    /// Returns whether the path to this node is a stored key.
    pub fn is_leaf(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the number of values stored in this subtree, this node included.
    pub fn subtree_size(&self) -> usize {
        let mut count = if self.value.is_some() { 1 } else { 0 };

        for edge in self.edges.iter() {
            count += edge.node.subtree_size();
        }

        count
    }

    /// Absorbs the sole child into this node.
    ///
    /// The child's prefix is appended to ours and its value and edges are
    /// adopted wholesale. Only valid on a node with no value and exactly one
    /// edge; otherwise nothing happens.
    pub fn merge_child(&mut self) {
        debug_assert!(self.value.is_none(), "merging a node that holds a value");
        if self.value.is_some() {
            return;
        }
        let child = match self.edges.take_only() {
            Some(child) => child,
            None => return,
        };
        let Node {
            prefix,
            value,
            edges,
        } = *child;

        log::trace!(
            "merging {:?} into {:?}",
            String::from_utf8_lossy(&prefix),
            String::from_utf8_lossy(&self.prefix)
        );
        self.prefix.extend_from_slice(&prefix);
        self.value = value;
        self.edges = edges;
    }

    /// Drops the value and every descendant, returning how many values went away.
    pub fn clear(&mut self) -> usize {
        let removed = self.subtree_size();
        self.value = None;
        self.edges = Edges::new();
        removed
    }

    /// Shrinks allocation slack in this subtree and returns its approximate size in bytes.
    ///
    /// Edge collections are always trimmed; prefix buffers only when `reclaim` is set.
    pub fn compact(&mut self, reclaim: bool) -> usize {
        self.edges.shrink_to_fit();
        if reclaim {
            self.prefix.shrink_to_fit();
        }

        let mut bytes = mem::size_of::<Node<V>>()
            + self.prefix.capacity()
            + self.edges.capacity() * mem::size_of::<Edge<V>>();

        for edge in self.edges.iter_mut() {
            bytes += edge.node.compact(reclaim);
        }

        bytes
    }
}
