//! Ordered borrowing iterators over a tree.
//!
//! This module provides the `Iter` type, which walks a subtree depth-first and
//! yields entries in ascending key order.

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

/// An iterator over the entries of a tree or of one prefix of it.
///
/// This iterator performs a depth-first traversal and yields the full key of
/// each entry along with a reference to its value. Keys come out in ascending
/// byte order.
pub struct Iter<'a, V> {
    /// Nodes still to visit, each with the full key leading to it
    stack: Vec<(&'a Node<V>, Vec<u8>)>,

    /// Entries left to yield, when known up front
    remaining: Option<usize>,
}

impl<'a, V> Iter<'a, V> {
    fn new(start: Option<(&'a Node<V>, Vec<u8>)>, remaining: Option<usize>) -> Self {
        Iter {
            stack: start.into_iter().collect(),
            remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            // Push children in reverse so the smallest label is popped first
            for edge in node.edges.iter().rev() {
                let mut child_key = key.clone();
                child_key.extend_from_slice(&edge.node.prefix);
                self.stack.push((&*edge.node, child_key));
            }

            if let Some(value) = &node.value {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl<'a, V: fmt::Debug> fmt::Debug for Iter<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("pending", &self.stack.len())
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<V> Tree<V> {
    /// Returns an iterator over all entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let tree = Tree::from_entries(vec![("zebra", 5), ("apple", 1), ("apricot", 6)]);
    ///
    /// let keys: Vec<Vec<u8>> = tree.iter().map(|(key, _)| key).collect();
    /// assert_eq!(keys, vec![b"apple".to_vec(), b"apricot".to_vec(), b"zebra".to_vec()]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(Some((&self.root, Vec::new())), Some(self.size))
    }

    /// Returns an iterator over the entries whose key starts with `prefix`.
    pub fn iter_prefix<K: AsRef<[u8]>>(&self, prefix: K) -> Iter<'_, V> {
        let mut node = &self.root;
        let mut search = prefix.as_ref();
        let mut key = Vec::new();

        while let Some(&label) = search.first() {
            node = match node.edges.get(label) {
                Some(child) => child,
                None => return Iter::new(None, Some(0)),
            };
            key.extend_from_slice(&node.prefix);

            match search.strip_prefix(node.prefix.as_slice()) {
                Some(rest) => search = rest,
                None if node.prefix.starts_with(search) => break,
                None => return Iter::new(None, Some(0)),
            }
        }

        Iter::new(Some((node, key)), None)
    }
}

impl<'a, V> IntoIterator for &'a Tree<V> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
