//! Capacity compaction for trees that are built once and then mostly read.

use std::mem;

use crate::tree::Tree;

impl<V> Tree<V> {
    /// Trims allocation slack from every node and records a memory estimate.
    ///
    /// Each edge collection is shrunk to its length, removing the growth
    /// headroom left by incremental inserts. With `reclaim` set, prefix buffers
    /// are shrunk as well, which releases the slack left behind by splits and
    /// merges at the cost of more reallocations.
    ///
    /// The returned byte count is approximate: it sums the node structs, their
    /// prefix buffers and edge arrays but ignores allocator overhead and any
    /// heap memory owned by the values themselves. It is also cached and
    /// available through [`Tree::memory_estimate`] until the next call.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_tree::Tree;
    ///
    /// let mut tree = Tree::from_entries(vec![("romane", 1), ("romanus", 2)]);
    /// assert_eq!(tree.memory_estimate(), None);
    ///
    /// let bytes = tree.optimize(false);
    /// assert_eq!(tree.memory_estimate(), Some(bytes));
    /// ```
    pub fn optimize(&mut self, reclaim: bool) -> usize {
        let bytes = mem::size_of::<Self>() + self.root.compact(reclaim);

        log::debug!(
            "optimized tree of {} keys, estimated footprint {} bytes (reclaim: {})",
            self.size,
            bytes,
            reclaim
        );

        self.memory_estimate.take();
        let _ = self.memory_estimate.set(bytes);
        bytes
    }

    /// Returns the footprint computed by the most recent [`Tree::optimize`].
    ///
    /// `None` until `optimize` has run. The value is a snapshot and is not
    /// refreshed by later inserts or deletes.
    pub fn memory_estimate(&self) -> Option<usize> {
        self.memory_estimate.get().copied()
    }
}
