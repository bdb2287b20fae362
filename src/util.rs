/// Finds the length of the common prefix between a search key and a node's prefix.
///
/// Returns the number of leading bytes the two slices share.
pub(crate) fn prefix_match(key: &[u8], node_prefix: &[u8]) -> usize {
    let mut i = 0;

    while i < node_prefix.len() && i < key.len() && key[i] == node_prefix[i] {
        i += 1;
    }

    i
}
