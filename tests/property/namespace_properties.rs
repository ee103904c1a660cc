//! Properties of insertion, lookup and leaf deletion over random name sets

use proptest::collection::btree_set;
use proptest::prelude::*;
use std::collections::BTreeSet;
use treefs::error::NamespaceError;
use treefs::namespace::{Entry, Namespace, NamespaceNode};

fn build(order: usize, names: &[String]) -> Namespace {
    let mut namespace = Namespace::with_order(order).unwrap();
    for name in names {
        namespace.insert(Entry::file(name.clone(), name.as_bytes()));
    }
    namespace
}

/// Max key count over every node, and min key count over non-root nodes
fn occupancy(node: &NamespaceNode, is_root: bool, acc: &mut (usize, usize)) {
    acc.0 = acc.0.max(node.key_count());
    if !is_root {
        acc.1 = acc.1.min(node.key_count());
    }
    for child in node.children() {
        occupancy(child, false, acc);
    }
}

fn name_sets() -> impl Strategy<Value = Vec<String>> {
    btree_set("[a-z]{1,6}", 1..120)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn search_finds_every_inserted_name(order in 2usize..6, names in name_sets(), probe in "[A-Z]{1,3}") {
        let namespace = build(order, &names);

        for name in &names {
            let found = namespace.search(name);
            prop_assert!(found.is_some());
            prop_assert_eq!(found.unwrap().as_file().unwrap().content(), name.as_bytes());
        }
        // probes use a disjoint alphabet
        prop_assert!(namespace.search(&probe).is_none());
        prop_assert_eq!(namespace.len(), names.len());
    }

    #[test]
    fn node_capacity_holds_after_inserts(order in 2usize..6, names in name_sets()) {
        let namespace = build(order, &names);
        let mut acc = (0, usize::MAX);
        occupancy(namespace.root(), true, &mut acc);

        prop_assert!(acc.0 <= 2 * order - 1);
        if namespace.height() > 1 {
            prop_assert!(acc.1 >= order - 1);
        }
    }

    #[test]
    fn traversal_is_sorted_and_complete(order in 2usize..6, names in name_sets()) {
        let namespace = build(order, &names);
        let walked: Vec<String> = namespace.entries().map(|e| e.name().to_string()).collect();
        let expected: Vec<String> = names.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn delete_removes_one_or_changes_nothing(order in 2usize..6, names in name_sets(), pick in any::<prop::sample::Index>()) {
        let mut namespace = build(order, &names);
        let target = pick.get(&names).clone();
        let before = namespace.len();

        match namespace.delete(&target) {
            Ok(removed) => {
                prop_assert_eq!(removed.name(), target.as_str());
                prop_assert_eq!(namespace.len(), before - 1);
                prop_assert!(!namespace.contains(&target));
            }
            Err(NamespaceError::Unsupported(_)) => {
                prop_assert_eq!(namespace.len(), before);
                prop_assert!(namespace.contains(&target));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn delete_missing_reports_not_found(order in 2usize..6, names in name_sets(), probe in "[0-9]{1,4}") {
        let mut namespace = build(order, &names);
        let before: Vec<String> = namespace.entries().map(|e| e.name().to_string()).collect();

        prop_assert_eq!(namespace.delete(&probe).unwrap_err(), NamespaceError::NotFound(probe.clone()));
        let after: Vec<String> = namespace.entries().map(|e| e.name().to_string()).collect();
        prop_assert_eq!(before, after);
    }
}
