//! Structural invariants of namespaces under bulk insertion and leaf deletion

use treefs::error::NamespaceError;
use treefs::namespace::{insert_entry, create_file, Entry, Namespace};

use crate::integration::{assert_btree_invariants, assert_btree_shape};

fn filled(order: usize, count: usize) -> Namespace {
    let mut namespace = Namespace::with_order(order).unwrap();
    for i in 0..count {
        // interleave so inserts land across the whole key range
        let key = (i * 37) % count;
        insert_entry(&mut namespace, create_file(&format!("f{:03}", key), "")).unwrap();
    }
    namespace
}

fn leaf_names(namespace: &Namespace) -> Vec<String> {
    let leaf_depth = namespace.height() - 1;
    namespace
        .traverse()
        .iter()
        .filter(|item| item.depth == leaf_depth)
        .map(|item| item.entry.name().to_string())
        .collect()
}

fn internal_names(namespace: &Namespace) -> Vec<String> {
    let leaf_depth = namespace.height() - 1;
    namespace
        .traverse()
        .iter()
        .filter(|item| item.depth < leaf_depth)
        .map(|item| item.entry.name().to_string())
        .collect()
}

#[test]
fn test_bulk_insert_keeps_invariants_for_several_orders() {
    for order in [2, 3, 4, 7] {
        let namespace = filled(order, 200);
        assert_eq!(namespace.len(), 200);
        assert!(namespace.height() > 1);
        assert_btree_invariants(&namespace);
    }
}

#[test]
fn test_ascending_and_descending_inserts() {
    let mut ascending = Namespace::with_order(2).unwrap();
    let mut descending = Namespace::with_order(2).unwrap();
    for i in 0..64 {
        ascending.insert(Entry::file(format!("k{:02}", i), ""));
        descending.insert(Entry::file(format!("k{:02}", 63 - i), ""));
    }
    assert_btree_invariants(&ascending);
    assert_btree_invariants(&descending);

    let a: Vec<&str> = ascending.entries().map(Entry::name).collect();
    let d: Vec<&str> = descending.entries().map(Entry::name).collect();
    assert_eq!(a, d);
}

#[test]
fn test_internal_key_deletion_is_rejected_without_change() {
    let mut namespace = filled(2, 30);
    let internal = internal_names(&namespace);
    assert!(!internal.is_empty());

    for name in &internal {
        let before = namespace.len();
        let err = namespace.delete(name).unwrap_err();
        assert!(matches!(err, NamespaceError::Unsupported(_)));
        assert_eq!(namespace.len(), before);
        assert!(namespace.contains(name));
    }
    assert_btree_invariants(&namespace);
}

#[test]
fn test_leaf_deletion_removes_exactly_one() {
    let mut namespace = filled(3, 60);
    for name in leaf_names(&namespace) {
        let before = namespace.len();
        let removed = namespace.delete(&name).unwrap();
        assert_eq!(removed.name(), name);
        assert_eq!(namespace.len(), before - 1);
        assert!(!namespace.contains(&name));
        assert_btree_shape(&namespace);
    }
}

#[test]
fn test_emptied_leaves_keep_root_key() {
    let mut namespace = Namespace::with_order(2).unwrap();
    for name in ["a", "b", "c", "d"] {
        namespace.insert(Entry::file(name, ""));
    }
    // root holds "b"; leaves hold ["a"] and ["c", "d"]
    assert_eq!(namespace.height(), 2);

    for name in ["a", "c", "d"] {
        namespace.delete(name).unwrap();
    }
    assert_eq!(namespace.height(), 2);
    assert!(matches!(
        namespace.delete("b"),
        Err(NamespaceError::Unsupported(_))
    ));
    assert_eq!(namespace.len(), 1);
    assert!(namespace.search("a").is_none());
    assert_eq!(namespace.search("b").map(Entry::name), Some("b"));
}

#[test]
fn test_missing_delete_leaves_namespace_unchanged() {
    let mut namespace = filled(2, 25);
    let before: Vec<String> = namespace.entries().map(|e| e.name().to_string()).collect();

    assert_eq!(
        namespace.delete("nope").unwrap_err(),
        NamespaceError::NotFound("nope".to_string())
    );
    let after: Vec<String> = namespace.entries().map(|e| e.name().to_string()).collect();
    assert_eq!(before, after);
    assert_btree_invariants(&namespace);
}

#[test]
fn test_names_compare_bytewise() {
    let mut namespace = Namespace::new();
    for name in ["b", "B", "a", "_", "Z", "é"] {
        insert_entry(&mut namespace, create_file(name, "")).unwrap();
    }
    let order: Vec<&str> = namespace.entries().map(Entry::name).collect();
    assert_eq!(order, vec!["B", "Z", "_", "a", "b", "é"]);
}
