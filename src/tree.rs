//! The main tree implementation.
//!
//! This module contains the `Tree` type, which owns the root node and provides
//! the insertion, deletion and lookup operations. Traversals live in
//! [`crate::walk`], iterators in [`crate::iter`] and the capacity pass in
//! [`crate::optimize`].

use std::collections::BTreeMap;
use std::iter::FromIterator;

use once_cell::unsync::OnceCell;

use crate::node::Node;
use crate::util::prefix_match;
use crate::{Error, Result};

/// A mutable radix tree keyed by byte strings.
///
/// Chains of single-child nodes are collapsed so every node stores a
/// multi-byte prefix segment. Keys are kept in lexicographic byte order,
/// which makes prefix queries and ordered walks cheap.
///
/// Keys are accepted as anything that implements `AsRef<[u8]>` and are
/// handed back as `Vec<u8>`.
///
/// # Examples
///
/// ```
/// use radix_tree::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert("romane", 1);
/// tree.insert("romanus", 2);
///
/// assert_eq!(tree.get("romanus"), Some(&2));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Tree<V> {
    /// The root node; its prefix is always empty
    pub(crate) root: Node<V>,

    /// The number of values stored in the tree
    pub(crate) size: usize,

    /// Footprint computed by the last `optimize` call
    pub(crate) memory_estimate: OnceCell<usize>,
}

impl<V> Tree<V> {
    /// Creates a new, empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let tree = Tree::<i32>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Tree {
            root: Node::default(),
            size: 0,
            memory_estimate: OnceCell::new(),
        }
    }

    /// Builds a tree from key/value pairs. Later duplicates overwrite earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let tree = Tree::from_entries(vec![("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.get("a"), Some(&3));
    /// ```
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut tree = Tree::new();
        tree.extend(entries);
        tree
    }

    /// Returns the number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts a value, returning the previous one if the key already existed.
    ///
    /// A `None` result means the key is new and the length grew by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.insert("alpha", 1), None);
    /// assert_eq!(tree.insert("alpha", 2), Some(1));
    /// assert_eq!(tree.get("alpha"), Some(&2));
    /// ```
    pub fn insert<K: AsRef<[u8]>>(&mut self, key: K, value: V) -> Option<V> {
        let mut node = &mut self.root;
        let mut search = key.as_ref();

        loop {
            // Key exhausted: the value belongs on this node
            if search.is_empty() {
                let old = node.value.replace(value);
                if old.is_none() {
                    self.size += 1;
                }
                return old;
            }

            let label = search[0];
            let idx = match node.edges.position(label) {
                Some(idx) => idx,
                None => {
                    node.edges
                        .add(label, Box::new(Node::leaf(search.to_vec(), value)));
                    self.size += 1;
                    return None;
                }
            };

            let child = node.edges.child(idx);
            let common = prefix_match(search, &child.prefix);
            if common == child.prefix.len() {
                search = &search[common..];
                node = node.edges.child_mut(idx);
                continue;
            }

            log::trace!(
                "splitting {:?} after {} bytes",
                String::from_utf8_lossy(&child.prefix),
                common
            );

            // The intermediate node takes over the old child's edge
            let split = Box::new(Node::new(search[..common].to_vec()));
            let mut old = node.edges.update(label, split);
            old.prefix.drain(..common);
            let old_label = old.prefix[0];

            let split = node.edges.child_mut(idx);
            split.edges.add(old_label, old);

            let rest = &search[common..];
            if rest.is_empty() {
                split.value = Some(value);
            } else {
                split
                    .edges
                    .add(rest[0], Box::new(Node::leaf(rest.to_vec(), value)));
            }
            self.size += 1;
            return None;
        }
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// Deleting a missing key leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let mut tree = Tree::from_entries(vec![("abc", 1), ("abcde", 2)]);
    /// assert_eq!(tree.delete("abc"), Some(1));
    /// assert_eq!(tree.delete("abc"), None);
    /// assert_eq!(tree.get("abcde"), Some(&2));
    /// ```
    pub fn delete<K: AsRef<[u8]>>(&mut self, key: K) -> Option<V> {
        let key = key.as_ref();
        let value = if key.is_empty() {
            self.root.value.take()?
        } else {
            Self::delete_below(&mut self.root, key, true)?
        };
        self.size -= 1;
        Some(value)
    }

    // Deletes `search` below `parent`, restoring path compression on the way out
    fn delete_below(parent: &mut Node<V>, search: &[u8], parent_is_root: bool) -> Option<V> {
        let label = search[0];
        let idx = parent.edges.position(label)?;
        let child = parent.edges.child_mut(idx);
        let rest = search.strip_prefix(child.prefix.as_slice())?;
        if !rest.is_empty() {
            return Self::delete_below(child, rest, false);
        }

        let value = child.value.take()?;
        if child.edges.is_empty() {
            parent.edges.remove(label);
        } else if child.edges.len() == 1 {
            child.merge_child();
        }

        // Removing the child may leave the parent as a pass-through node
        if !parent_is_root && !parent.is_leaf() && parent.edges.len() == 1 {
            parent.merge_child();
        }
        Some(value)
    }

    /// Removes every key starting with `prefix` and returns how many were removed.
    ///
    /// An empty prefix clears the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let mut tree = Tree::from_entries(vec![("rubens", 1), ("ruber", 2), ("romane", 3)]);
    /// assert_eq!(tree.delete_prefix("rub"), 2);
    /// assert_eq!(tree.delete_prefix("xyz"), 0);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn delete_prefix<K: AsRef<[u8]>>(&mut self, prefix: K) -> usize {
        let prefix = prefix.as_ref();
        let removed = if prefix.is_empty() {
            self.root.clear()
        } else {
            Self::delete_prefix_below(&mut self.root, prefix, true)
        };
        if removed > 0 {
            log::debug!(
                "deleted {} keys under prefix {:?}",
                removed,
                String::from_utf8_lossy(prefix)
            );
        }
        self.size -= removed;
        removed
    }

    fn delete_prefix_below(parent: &mut Node<V>, search: &[u8], parent_is_root: bool) -> usize {
        let label = search[0];
        let idx = match parent.edges.position(label) {
            Some(idx) => idx,
            None => return 0,
        };
        let child = parent.edges.child_mut(idx);

        let removed = if let Some(rest) = search.strip_prefix(child.prefix.as_slice()) {
            if !rest.is_empty() {
                return Self::delete_prefix_below(child, rest, false);
            }
            child.subtree_size()
        } else if child.prefix.starts_with(search) {
            // The prefix ends inside this segment, so the whole subtree matches
            child.subtree_size()
        } else {
            return 0;
        };

        parent.edges.remove(label);
        if !parent_is_root && !parent.is_leaf() && parent.edges.len() == 1 {
            parent.merge_child();
        }
        removed
    }

    fn find(&self, key: &[u8]) -> Option<&Node<V>> {
        let mut node = &self.root;
        let mut search = key;
        while let Some(&label) = search.first() {
            node = node.edges.get(label)?;
            search = search.strip_prefix(node.prefix.as_slice())?;
        }
        Some(node)
    }

    fn find_mut(&mut self, key: &[u8]) -> Option<&mut Node<V>> {
        let mut node = &mut self.root;
        let mut search = key;
        while let Some(&label) = search.first() {
            node = node.edges.get_mut(label)?;
            search = search.strip_prefix(node.prefix.as_slice())?;
        }
        Some(node)
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let tree = Tree::from_entries(vec![("hello", 42)]);
    ///
    /// assert_eq!(tree.get("hello"), Some(&42));
    /// assert_eq!(tree.get("hell"), None);
    /// ```
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<&V> {
        self.find(key.as_ref()).and_then(|node| node.value.as_ref())
    }

    /// Retrieves a mutable reference to the value stored for the given key.
    pub fn get_mut<K: AsRef<[u8]>>(&mut self, key: K) -> Option<&mut V> {
        self.find_mut(key.as_ref())
            .and_then(|node| node.value.as_mut())
    }

    /// Returns `true` if the tree contains a value for the given key.
    pub fn contains_key<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Approximate lookup along the matched path.
    ///
    /// Descends while edges match `key` completely. On an exact hit this is
    /// [`Tree::get`]. When descent stops because no edge starts with the next
    /// byte, the value of the last node descended into is returned if it has
    /// one. A mismatch inside a segment, or a stop at the root, yields `None`.
    ///
    /// This is **not** a lexicographic predecessor search: only the node at
    /// which descent halted is considered, not earlier ancestors and not
    /// smaller siblings.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let tree = Tree::from_entries(vec![("7901", "msk"), ("7912", "spb")]);
    ///
    /// assert_eq!(tree.get_approximate_floor("79015551234"), Some(&"msk"));
    /// assert_eq!(tree.get_approximate_floor("7913"), None);
    /// ```
    pub fn get_approximate_floor<K: AsRef<[u8]>>(&self, key: K) -> Option<&V> {
        let mut node = &self.root;
        let mut search = key.as_ref();
        let mut descended = false;

        while let Some(&label) = search.first() {
            match node.edges.get(label) {
                Some(child) => {
                    node = child;
                    descended = true;
                }
                None if descended => return node.value.as_ref(),
                None => return None,
            }
            search = search.strip_prefix(node.prefix.as_slice())?;
        }
        node.value.as_ref()
    }

    /// Finds the longest stored key that is a prefix of `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let tree = Tree::from_entries(vec![("/api", 1), ("/api/users", 2)]);
    ///
    /// let (matched, value) = tree.longest_prefix("/api/users/7").unwrap();
    /// assert_eq!(matched, b"/api/users".to_vec());
    /// assert_eq!(value, &2);
    /// assert!(tree.longest_prefix("/ap").is_none());
    /// ```
    pub fn longest_prefix<K: AsRef<[u8]>>(&self, key: K) -> Option<(Vec<u8>, &V)> {
        let key = key.as_ref();
        let mut node = &self.root;
        let mut consumed = 0;
        let mut last = None;

        loop {
            if let Some(value) = &node.value {
                last = Some((consumed, value));
            }

            let search = &key[consumed..];
            let label = match search.first() {
                Some(&label) => label,
                None => break,
            };
            node = match node.edges.get(label) {
                Some(child) => child,
                None => break,
            };
            if !search.starts_with(&node.prefix) {
                break;
            }
            consumed += node.prefix.len();
        }

        last.map(|(len, value)| (key[..len].to_vec(), value))
    }

    /// Returns the lexicographically smallest key and its value.
    pub fn minimum(&self) -> Option<(Vec<u8>, &V)> {
        let mut node = &self.root;
        let mut key = Vec::new();

        loop {
            if let Some(value) = &node.value {
                return Some((key, value));
            }
            node = node.edges.first()?;
            key.extend_from_slice(&node.prefix);
        }
    }

    /// Returns the lexicographically largest key and its value.
    pub fn maximum(&self) -> Option<(Vec<u8>, &V)> {
        let mut node = &self.root;
        let mut key = Vec::new();

        // Anything below an edge sorts after the node's own key
        while let Some(child) = node.edges.last() {
            node = child;
            key.extend_from_slice(&node.prefix);
        }
        node.value.as_ref().map(|value| (key, value))
    }

    /// Copies every entry into an ordered map.
    pub fn to_map(&self) -> BTreeMap<Vec<u8>, V>
    where
        V: Clone,
    {
        let mut out = BTreeMap::new();
        self.walk(|key, value| {
            out.insert(key.to_vec(), value.clone());
            false
        });
        out
    }

    /// Verifies the structural invariants of the tree.
    ///
    /// Checks that edges are sorted and labeled by their child's first byte,
    /// that no non-root node is a valueless pass-through, and that the cached
    /// length matches the number of stored values.
    pub fn check_invariants(&self) -> Result<()> {
        if !self.root.prefix.is_empty() {
            return Err(Error::RootPrefix);
        }

        let mut path = Vec::new();
        let found = check_node(&self.root, &mut path, true)?;
        if found != self.size {
            return Err(Error::SizeMismatch {
                expected: self.size,
                found,
            });
        }
        Ok(())
    }
}

fn check_node<V>(node: &Node<V>, path: &mut Vec<u8>, is_root: bool) -> Result<usize> {
    if !is_root {
        if node.prefix.is_empty() {
            return Err(Error::EmptyPrefix { path: path.clone() });
        }
        if node.value.is_none() && node.edges.len() < 2 {
            return Err(Error::Uncompressed { path: path.clone() });
        }
    }

    let mut count = if node.value.is_some() { 1 } else { 0 };
    let mut previous: Option<u8> = None;
    for edge in node.edges.iter() {
        if previous.map_or(false, |label| label >= edge.label) {
            return Err(Error::UnsortedEdges { path: path.clone() });
        }
        previous = Some(edge.label);

        let len = path.len();
        path.extend_from_slice(&edge.node.prefix);
        if edge.node.prefix.first() != Some(&edge.label) {
            return Err(Error::LabelMismatch {
                path: path.clone(),
                label: edge.label,
            });
        }
        count += check_node(&edge.node, path, false)?;
        path.truncate(len);
    }
    Ok(count)
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<[u8]>, V> Extend<(K, V)> for Tree<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for Tree<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Tree::from_entries(iter)
    }
}

// Two trees are equal when they hold the same entries; shape follows from content
impl<V: PartialEq> PartialEq for Tree<V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Tree<V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> Tree<u32> {
        Tree::from_entries(vec![
            ("romane", 1),
            ("romanus", 2),
            ("romulus", 3),
            ("rubens", 4),
            ("ruber", 5),
            ("rubicon", 6),
            ("rubicundus", 7),
        ])
    }

    #[test]
    fn test_new_tree() {
        let tree: Tree<u32> = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_get_nonexistent() {
        let tree: Tree<u32> = Tree::new();
        assert_eq!(tree.get("hello"), None);
        assert_eq!(tree.get(""), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut tree = Tree::new();
        assert_eq!(tree.insert("hello", 42), None);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("hello"), Some(&42));
        assert_eq!(tree.get("world"), None);
        assert_eq!(tree.get("hell"), None);
        assert_eq!(tree.get("hello!"), None);
    }

    #[test]
    fn test_insert_replace() {
        let mut tree = Tree::new();
        tree.insert("hello", 42);

        assert_eq!(tree.insert("hello", 100), Some(42));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("hello"), Some(&100));
    }

    #[test]
    fn test_empty_key() {
        let mut tree = Tree::new();
        assert_eq!(tree.insert("", 1), None);
        tree.insert("a", 2);

        assert_eq!(tree.get(""), Some(&1));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.delete(""), Some(1));
        assert_eq!(tree.get(""), None);
        assert_eq!(tree.get("a"), Some(&2));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_node_splitting() {
        let mut tree = Tree::new();

        // Insert a key
        tree.insert("alphabet", 1);

        // Insert another with common prefix - should cause splitting
        tree.insert("alpha", 2);

        assert_eq!(tree.get("alphabet"), Some(&1));
        assert_eq!(tree.get("alpha"), Some(&2));

        // The split node carries the shorter key
        let split = tree.root.edges.get(b'a').unwrap();
        assert_eq!(split.prefix, b"alpha".to_vec());
        assert_eq!(split.value, Some(2));
        assert_eq!(split.edges.get(b'b').unwrap().prefix, b"bet".to_vec());
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_split_with_new_leaf() {
        let mut tree = Tree::new();
        tree.insert("romane", 1);
        tree.insert("romulus", 2);

        let split = tree.root.edges.get(b'r').unwrap();
        assert_eq!(split.prefix, b"rom".to_vec());
        assert!(split.value.is_none());
        assert_eq!(split.edges.len(), 2);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_shorter_key_first() {
        let mut tree = Tree::new();

        // First insert the shorter key
        tree.insert("alpha", 1);

        // Then insert the longer one
        tree.insert("alphabet", 2);

        assert_eq!(tree.get("alpha"), Some(&1));
        assert_eq!(tree.get("alphabet"), Some(&2));
        assert_eq!(tree.root.edges.len(), 1);
    }

    #[test]
    fn test_delete_existing() {
        let mut tree = Tree::from_entries(vec![("hello", 42), ("world", 100)]);

        assert_eq!(tree.delete("hello"), Some(42));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("hello"), None);
        assert_eq!(tree.get("world"), Some(&100));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_delete_nonexistent() {
        let mut tree = Tree::from_entries(vec![("hello", 42)]);

        assert_eq!(tree.delete("world"), None);
        assert_eq!(tree.delete("hell"), None);
        assert_eq!(tree.delete("hello world"), None);
        assert_eq!(tree.len(), 1);

        // Removing from an empty tree
        let mut empty: Tree<u32> = Tree::new();
        assert_eq!(empty.delete("anything"), None);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_delete_inner_key_merges_child() {
        let mut tree = Tree::from_entries(vec![("abc", 1), ("abcde", 2)]);

        assert_eq!(tree.delete("abc"), Some(1));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("abcde"), Some(&2));

        let merged = tree.root.edges.get(b'a').unwrap();
        assert_eq!(merged.prefix, b"abcde".to_vec());
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_delete_leaf_merges_parent() {
        let mut tree = latin();

        // "ruber" and "rubens" share the valueless "e" node under "rub"
        assert_eq!(tree.delete("ruber"), Some(5));
        assert_eq!(tree.get("rubens"), Some(&4));
        assert!(tree.check_invariants().is_ok());

        let rub = tree.root.edges.get(b'r').unwrap().edges.get(b'u').unwrap();
        assert_eq!(rub.edges.get(b'e').unwrap().prefix, b"ens".to_vec());
    }

    #[test]
    fn test_delete_all() {
        let mut tree = latin();
        for key in &[
            "rubicon", "romane", "rubens", "romulus", "rubicundus", "ruber", "romanus",
        ] {
            assert!(tree.delete(key).is_some());
            assert!(tree.check_invariants().is_ok());
        }
        assert!(tree.is_empty());
        assert!(tree.root.edges.is_empty());
    }

    #[test]
    fn test_delete_prefix() {
        let mut tree = latin();

        assert_eq!(tree.delete_prefix("rom"), 3);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get("romane"), None);
        assert_eq!(tree.get("rubens"), Some(&4));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_delete_prefix_inside_segment() {
        let mut tree = latin();

        // "rubi" ends inside the "ic" node shared by "rubicon" and "rubicundus"
        assert_eq!(tree.delete_prefix("rubi"), 2);
        assert_eq!(tree.len(), 5);
        assert!(tree.check_invariants().is_ok());

        assert_eq!(tree.delete_prefix("rubensx"), 0);
        assert_eq!(tree.delete_prefix("rubens"), 1);
        assert_eq!(tree.get("ruber"), Some(&5));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_delete_prefix_no_match() {
        let mut tree = latin();
        assert_eq!(tree.delete_prefix("x"), 0);
        assert_eq!(tree.delete_prefix("rox"), 0);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_delete_prefix_empty_clears() {
        let mut tree = latin();
        tree.insert("", 0);
        assert_eq!(tree.delete_prefix(""), 8);
        assert!(tree.is_empty());
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_get_mut() {
        let mut tree = latin();
        if let Some(value) = tree.get_mut("romulus") {
            *value += 10;
        }
        assert_eq!(tree.get("romulus"), Some(&13));
        assert!(tree.get_mut("romul").is_none());
    }

    #[test]
    fn test_approximate_floor() {
        let tree = Tree::from_entries(vec![("79", 1), ("7951", 2), ("81", 3)]);

        // Exact hits behave like get
        assert_eq!(tree.get_approximate_floor("7951"), Some(&2));

        // No edge for '0' after "79"
        assert_eq!(tree.get_approximate_floor("790"), Some(&1));

        // Mismatch inside "51" is not a floor match
        assert_eq!(tree.get_approximate_floor("7955"), None);

        // Descent stops at the root
        assert_eq!(tree.get_approximate_floor("5"), None);

        // Only the halting node counts, not earlier ancestors
        assert_eq!(tree.get_approximate_floor("79512"), Some(&2));
    }

    #[test]
    fn test_longest_prefix() {
        let tree = latin();

        let (key, value) = tree.longest_prefix("rubicundusXYZ").unwrap();
        assert_eq!(key, b"rubicundus".to_vec());
        assert_eq!(value, &7);

        assert!(tree.longest_prefix("rom").is_none());
        assert!(tree.longest_prefix("").is_none());
    }

    #[test]
    fn test_longest_prefix_reports_matched_key() {
        let tree = Tree::from_entries(vec![("ab", 1), ("abcd", 2), ("abce", 3)]);

        // Descent continues into "c" but the answer is still "ab"
        let (key, value) = tree.longest_prefix("abcz").unwrap();
        assert_eq!(key, b"ab".to_vec());
        assert_eq!(value, &1);
    }

    #[test]
    fn test_minimum_maximum() {
        let tree = latin();

        let (min, value) = tree.minimum().unwrap();
        assert_eq!(min, b"romane".to_vec());
        assert_eq!(value, &1);

        let (max, value) = tree.maximum().unwrap();
        assert_eq!(max, b"rubicundus".to_vec());
        assert_eq!(value, &7);

        let empty: Tree<u32> = Tree::new();
        assert!(empty.minimum().is_none());
        assert!(empty.maximum().is_none());
    }

    #[test]
    fn test_minimum_maximum_with_prefix_keys() {
        let tree = Tree::from_entries(vec![("", 0), ("a", 1), ("ab", 2)]);

        assert_eq!(tree.minimum().map(|(k, _)| k), Some(Vec::new()));
        assert_eq!(tree.maximum().map(|(k, _)| k), Some(b"ab".to_vec()));
    }

    #[test]
    fn test_to_map() {
        let tree = latin();
        let map = tree.to_map();

        assert_eq!(map.len(), tree.len());
        assert_eq!(map.get(&b"ruber".to_vec()), Some(&5));
    }

    #[test]
    fn test_equality() {
        let a = latin();
        let mut b: Tree<u32> = latin().to_map().into_iter().rev().collect();
        assert_eq!(a, b);

        b.insert("x", 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_check_invariants_detects_corruption() {
        let mut tree = latin();
        tree.size += 1;
        assert_eq!(
            tree.check_invariants(),
            Err(Error::SizeMismatch {
                expected: 8,
                found: 7
            })
        );

        let mut tree = latin();
        tree.root
            .edges
            .get_mut(b'r')
            .unwrap()
            .edges
            .remove(b'u');
        assert!(matches!(
            tree.check_invariants(),
            Err(Error::Uncompressed { .. })
        ));
    }
}
