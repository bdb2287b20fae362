//! Callback-driven traversals.
//!
//! Every walk hands its callback the accumulated key and returns as soon as
//! the callback answers `true`. Read-only walks recurse over borrowed nodes.
//! The `_mut` variants give the callback the live tree instead and re-seek
//! from the root after each visit, so the callback may delete the key in view
//! (or any other key) without invalidating the walk.

use crate::node::Node;
use crate::tree::Tree;
use crate::util::prefix_match;

impl<V> Tree<V> {
    /// Visits every entry in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let tree = Tree::from_entries(vec![("b", 2), ("a", 1), ("ab", 3)]);
    ///
    /// let mut seen = Vec::new();
    /// tree.walk(|key, value| {
    ///     seen.push((key.to_vec(), *value));
    ///     false
    /// });
    /// assert_eq!(seen, vec![(b"a".to_vec(), 1), (b"ab".to_vec(), 3), (b"b".to_vec(), 2)]);
    /// ```
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&[u8], &V) -> bool,
    {
        let mut key = Vec::new();
        walk_node(&self.root, &mut key, &mut f);
    }

    /// Visits every entry whose key starts with `prefix`, in ascending order.
    pub fn walk_prefix<K, F>(&self, prefix: K, mut f: F)
    where
        K: AsRef<[u8]>,
        F: FnMut(&[u8], &V) -> bool,
    {
        let mut node = &self.root;
        let mut search = prefix.as_ref();
        let mut key = Vec::new();

        loop {
            let label = match search.first() {
                Some(&label) => label,
                None => {
                    walk_node(node, &mut key, &mut f);
                    return;
                }
            };

            node = match node.edges.get(label) {
                Some(child) => child,
                None => return,
            };
            key.extend_from_slice(&node.prefix);

            if let Some(rest) = search.strip_prefix(node.prefix.as_slice()) {
                search = rest;
                continue;
            }
            // The prefix ends inside this segment: everything below matches
            if node.prefix.starts_with(search) {
                walk_node(node, &mut key, &mut f);
            }
            return;
        }
    }

    /// Visits the stored keys that are prefixes of `path`, shortest first.
    ///
    /// Where [`Tree::walk_prefix`] walks the entries *under* a prefix, this
    /// walks the entries *above* a path, including `path` itself if stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let tree = Tree::from_entries(vec![("/", 0), ("/api", 1), ("/api/v2", 2), ("/apiary", 3)]);
    ///
    /// let mut seen = Vec::new();
    /// tree.walk_path("/api/v2/users", |key, _| {
    ///     seen.push(String::from_utf8_lossy(key).into_owned());
    ///     false
    /// });
    /// assert_eq!(seen, vec!["/", "/api", "/api/v2"]);
    /// ```
    pub fn walk_path<K, F>(&self, path: K, mut f: F)
    where
        K: AsRef<[u8]>,
        F: FnMut(&[u8], &V) -> bool,
    {
        let path = path.as_ref();
        let mut node = &self.root;
        let mut consumed = 0;

        loop {
            if let Some(value) = &node.value {
                if f(&path[..consumed], value) {
                    return;
                }
            }

            let search = &path[consumed..];
            let label = match search.first() {
                Some(&label) => label,
                None => return,
            };
            node = match node.edges.get(label) {
                Some(child) => child,
                None => return,
            };
            if !search.starts_with(&node.prefix) {
                return;
            }
            consumed += node.prefix.len();
        }
    }

    /// Visits every key in ascending order, handing the callback the live tree.
    ///
    /// The callback may delete the key it is visiting, or any other key; the
    /// walk then continues with the smallest live key greater than the one just
    /// visited. Keys removed before the walk reaches them are skipped, keys
    /// inserted ahead of the walk are visited, and no key is visited twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let mut tree = Tree::from_entries(vec![("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// // Drop every even value while walking
    /// tree.walk_mut(|tree, key| {
    ///     if tree.get(key).map_or(false, |v| v % 2 == 0) {
    ///         tree.delete(key);
    ///     }
    ///     false
    /// });
    /// assert_eq!(tree.len(), 2);
    /// assert!(!tree.contains_key("b"));
    /// ```
    pub fn walk_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut Tree<V>, &[u8]) -> bool,
    {
        self.walk_prefix_mut(b"", f);
    }

    /// Like [`Tree::walk_mut`], restricted to keys starting with `prefix`.
    pub fn walk_prefix_mut<K, F>(&mut self, prefix: K, mut f: F)
    where
        K: AsRef<[u8]>,
        F: FnMut(&mut Tree<V>, &[u8]) -> bool,
    {
        let prefix = prefix.as_ref();
        let mut next = self.lower_bound(prefix, true);

        while let Some(key) = next {
            if !key.starts_with(prefix) {
                break;
            }
            if f(&mut *self, key.as_slice()) {
                return;
            }
            next = self.lower_bound(&key, false);
        }
    }

    /// Returns the smallest stored key `>= bound` (or `> bound` when not `inclusive`).
    pub(crate) fn lower_bound(&self, bound: &[u8], inclusive: bool) -> Option<Vec<u8>> {
        let mut key = Vec::new();
        if seek_node(&self.root, bound, inclusive, &mut key) {
            Some(key)
        } else {
            None
        }
    }
}

/// Pre-order walk of `node`, whose full key is already in `key`.
///
/// Returns `true` if the callback asked to stop.
fn walk_node<V, F>(node: &Node<V>, key: &mut Vec<u8>, f: &mut F) -> bool
where
    F: FnMut(&[u8], &V) -> bool,
{
    if let Some(value) = &node.value {
        if f(key.as_slice(), value) {
            return true;
        }
    }

    for edge in node.edges.iter() {
        let len = key.len();
        key.extend_from_slice(&edge.node.prefix);
        let stop = walk_node(&edge.node, key, f);
        key.truncate(len);
        if stop {
            return true;
        }
    }
    false
}

// `key` holds the path to `node`, which equals the part of the bound already
// consumed. On success `key` is left holding the key that was found.
fn seek_node<V>(node: &Node<V>, rest: &[u8], inclusive: bool, key: &mut Vec<u8>) -> bool {
    let label = match rest.first() {
        Some(&label) => label,
        None => {
            if inclusive && node.value.is_some() {
                return true;
            }
            // Everything below this node sorts after the bound
            return node
                .edges
                .iter()
                .any(|edge| enter_leftmost(&edge.node, key));
        }
    };

    for edge in node.edges.iter_from(node.edges.lower_bound(label)) {
        let child = &edge.node;
        let len = key.len();
        key.extend_from_slice(&child.prefix);

        let found = if edge.label > label {
            leftmost(child, key)
        } else {
            let common = prefix_match(rest, &child.prefix);
            if common == child.prefix.len() {
                seek_node(child, &rest[common..], inclusive, key)
            } else if common == rest.len() || child.prefix[common] > rest[common] {
                leftmost(child, key)
            } else {
                false
            }
        };

        if found {
            return true;
        }
        key.truncate(len);
    }
    false
}

fn enter_leftmost<V>(node: &Node<V>, key: &mut Vec<u8>) -> bool {
    let len = key.len();
    key.extend_from_slice(&node.prefix);
    if leftmost(node, key) {
        return true;
    }
    key.truncate(len);
    false
}

// Smallest key in the subtree of `node`, whose own path is already in `key`
fn leftmost<V>(node: &Node<V>, key: &mut Vec<u8>) -> bool {
    node.value.is_some()
        || node
            .edges
            .iter()
            .any(|edge| enter_leftmost(&edge.node, key))
}
