//! # Radix Tree
//!
//! A mutable radix tree (compressed trie) keyed by byte strings.
//!
//! Chains of single-child nodes are collapsed into multi-byte segments, so
//! lookups and splits cost roughly the length of the key. Keys stay in
//! lexicographic byte order, which gives prefix queries and ordered walks for
//! free. Typical uses are routing tables, autocomplete and phone-number
//! prefix matching.
//!
//! ## Features
//!
//! - **Exact and prefix queries**: `get`, `longest_prefix`, `get_approximate_floor`,
//!   `minimum`, `maximum`
//! - **Bulk deletion**: `delete_prefix` drops a whole subtree in one call
//! - **Ordered walks**: `walk`, `walk_prefix`, `walk_path` and borrowing iterators
//! - **Mutation during walks**: `walk_mut` hands the callback the live tree so it
//!   can delete the key it is looking at
//! - **Capacity compaction**: `optimize` trims allocation slack for trees that are
//!   built once and then read
//!
//! ## Example
//!
//! ```rust
//! use radix_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert("romane", 1);
//! tree.insert("romanus", 2);
//! tree.insert("romulus", 3);
//!
//! assert_eq!(tree.get("romulus"), Some(&3));
//!
//! let mut keys = Vec::new();
//! tree.walk_prefix("roman", |key, _| {
//!     keys.push(String::from_utf8_lossy(key).into_owned());
//!     false
//! });
//! assert_eq!(keys, vec!["romane", "romanus"]);
//! ```
//!
//! The tree is single-threaded: callers that share it across threads must
//! serialize access themselves.

mod edges;
mod iter;
mod node;
mod optimize;
mod tree;
mod util;
mod walk;

// Re-export public types
pub use crate::iter::Iter;
pub use crate::tree::Tree;

/// Structural problems reported by [`Tree::check_invariants`].
///
/// Paths are the raw key bytes accumulated from the root down to the
/// offending node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The root node carries a non-empty prefix
    #[error("root node has a non-empty prefix")]
    RootPrefix,
    /// A non-root node has an empty prefix
    #[error("node below {path:?} has an empty prefix")]
    EmptyPrefix { path: Vec<u8> },
    /// Edge labels are out of order or repeated
    #[error("edges of node {path:?} are not strictly ascending")]
    UnsortedEdges { path: Vec<u8> },
    /// An edge label differs from its child's first prefix byte
    #[error("edge {label:#04x} does not lead to node {path:?}")]
    LabelMismatch { path: Vec<u8>, label: u8 },
    /// A non-root node has no value and fewer than two children
    #[error("node {path:?} should have been merged or removed")]
    Uncompressed { path: Vec<u8> },
    /// The cached length disagrees with the stored values
    #[error("tree reports {expected} values but holds {found}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Result type for tree verification.
pub type Result<T> = std::result::Result<T, Error>;
