//! Examples of using the radix tree
use radix_tree::Tree;

fn main() {
    // Create a new tree with string keys
    let mut tree = Tree::new();

    // Insert some values
    tree.insert("hello", 1);
    tree.insert("help", 2);
    tree.insert("world", 3);

    // Check values
    assert_eq!(tree.get("hello"), Some(&1));
    assert_eq!(tree.get("world"), Some(&3));
    assert_eq!(tree.get("missing"), None);

    // Overwriting hands back the old value
    assert_eq!(tree.insert("hello", 10), Some(1));

    // Everything under "hel", in order
    tree.walk_prefix("hel", |key, value| {
        println!("{} -> {}", String::from_utf8_lossy(key), value);
        false
    });

    // Drop a whole branch at once
    let removed = tree.delete_prefix("hel");
    println!("removed {} keys, {} left", removed, tree.len());

    // Byte keys work just as well
    let mut bytes = Tree::new();
    bytes.insert(vec![0x7fu8, 0x00, 0x00, 0x01], "loopback");
    bytes.insert(vec![0x0au8], "private");
    if let Some((prefix, name)) = bytes.longest_prefix([0x0au8, 0x01, 0x02, 0x03]) {
        println!("{:?} matched {}", prefix, name);
    }

    let estimate = bytes.optimize(true);
    println!("compacted byte tree to roughly {} bytes", estimate);
}
