//! B-tree node and balancing algorithms
//!
//! A node holds at most `2·order − 1` entries sorted by name. Internal nodes
//! hold exactly one more child than keys. Nodes split on the way down during
//! insertion, so the tree only grows in height at the root. Deletion is
//! limited to keys that live in leaves; there is no borrowing or merging
//! between siblings.

use crate::error::NamespaceError;
use crate::namespace::entry::Entry;
use tracing::{debug, trace, warn};

/// An entry together with the depth of the node holding it
#[derive(Debug, Clone, Copy)]
pub struct TraversalItem<'a> {
    pub depth: usize,
    pub entry: &'a Entry,
}

/// B-tree node of a namespace
#[derive(Debug)]
pub struct NamespaceNode {
    keys: Vec<Entry>,
    children: Vec<NamespaceNode>,
    leaf: bool,
}

/// Maximum number of keys a node of the given order may hold
pub fn max_keys(order: usize) -> usize {
    2 * order - 1
}

impl NamespaceNode {
    pub(crate) fn new(leaf: bool) -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            leaf,
        }
    }

    /// Entries of this node, sorted by name
    pub fn keys(&self) -> &[Entry] {
        &self.keys
    }

    /// Child nodes (empty for leaves)
    pub fn children(&self) -> &[NamespaceNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_full(&self, order: usize) -> bool {
        self.keys.len() == max_keys(order)
    }

    /// Wrap `child` in a fresh internal node, used when the root overflows
    pub(crate) fn with_single_child(child: NamespaceNode) -> Self {
        Self {
            keys: Vec::new(),
            children: vec![child],
            leaf: false,
        }
    }

    /// Give up the only child of an empty internal node
    pub(crate) fn take_single_child(&mut self) -> Option<NamespaceNode> {
        if self.keys.is_empty() && !self.leaf && self.children.len() == 1 {
            self.children.pop()
        } else {
            None
        }
    }

    /// Index of the first key whose name is `>= name`
    pub fn find_key_position(&self, name: &str) -> usize {
        self.keys.partition_point(|entry| entry.name() < name)
    }

    /// Split the full child at `index`, promoting its median into this node
    ///
    /// The child keeps its lower `order − 1` keys (and `order` children when
    /// internal); a new right sibling takes the upper `order − 1` keys (and
    /// `order` children). The median lands at `keys[index]` and the sibling
    /// at `children[index + 1]`.
    pub(crate) fn split_child(&mut self, index: usize, order: usize) {
        let child = &mut self.children[index];
        debug_assert_eq!(child.keys.len(), max_keys(order));

        let upper_keys = child.keys.split_off(order);
        let median = match child.keys.pop() {
            Some(median) => median,
            None => return,
        };
        let upper_children = if child.leaf {
            Vec::new()
        } else {
            child.children.split_off(order)
        };
        let sibling = NamespaceNode {
            keys: upper_keys,
            children: upper_children,
            leaf: child.leaf,
        };

        debug!(
            median = median.name(),
            child_index = index,
            "Split full namespace node"
        );

        self.keys.insert(index, median);
        self.children.insert(index + 1, sibling);
    }

    /// Insert into a node that is known to have room
    ///
    /// Full children met on the way down are split before descending.
    pub(crate) fn insert_non_full(&mut self, entry: Entry, order: usize) {
        let mut index = self.keys.len();
        while index > 0 && entry.name() < self.keys[index - 1].name() {
            index -= 1;
        }

        if self.leaf {
            trace!(name = entry.name(), position = index, "Insert into leaf");
            self.keys.insert(index, entry);
            return;
        }

        if self.children[index].is_full(order) {
            self.split_child(index, order);
            if entry.name() > self.keys[index].name() {
                index += 1;
            }
        }
        self.children[index].insert_non_full(entry, order);
    }

    pub fn search(&self, name: &str) -> Option<&Entry> {
        let index = self.find_key_position(name);
        if let Some(entry) = self.keys.get(index) {
            if entry.name() == name {
                return Some(entry);
            }
        }
        if self.leaf {
            None
        } else {
            self.children[index].search(name)
        }
    }

    pub fn search_mut(&mut self, name: &str) -> Option<&mut Entry> {
        let index = self.find_key_position(name);
        if index < self.keys.len() && self.keys[index].name() == name {
            return Some(&mut self.keys[index]);
        }
        if self.leaf {
            None
        } else {
            self.children[index].search_mut(name)
        }
    }

    /// Remove the key at `index` from a leaf, shifting later keys left
    pub(crate) fn delete_from_leaf(&mut self, index: usize) -> Entry {
        debug_assert!(self.leaf);
        self.keys.remove(index)
    }

    /// Remove `name` from the subtree rooted here
    ///
    /// Keys held by internal nodes are rejected with `Unsupported` and nothing
    /// changes.
    pub(crate) fn delete(&mut self, name: &str) -> Result<Entry, NamespaceError> {
        let index = self.find_key_position(name);
        let hit = self
            .keys
            .get(index)
            .map(|entry| entry.name() == name)
            .unwrap_or(false);

        match (hit, self.leaf) {
            (true, true) => Ok(self.delete_from_leaf(index)),
            (true, false) => {
                warn!(
                    name,
                    "Refusing to remove key held by an internal namespace node"
                );
                Err(NamespaceError::Unsupported(format!(
                    "'{}' is held by an internal node; only leaf entries can be removed",
                    name
                )))
            }
            (false, true) => Err(NamespaceError::NotFound(name.to_string())),
            (false, false) => self.children[index].delete(name),
        }
    }

    /// In-order walk appending every entry with its node depth
    pub(crate) fn traverse_into<'a>(&'a self, depth: usize, out: &mut Vec<TraversalItem<'a>>) {
        for (index, entry) in self.keys.iter().enumerate() {
            if !self.leaf {
                self.children[index].traverse_into(depth + 1, out);
            }
            out.push(TraversalItem { depth, entry });
        }
        if !self.leaf {
            if let Some(last) = self.children.get(self.keys.len()) {
                last.traverse_into(depth + 1, out);
            }
        }
    }

    /// Number of entries in the subtree rooted here
    pub fn entry_count(&self) -> usize {
        self.keys.len()
            + self
                .children
                .iter()
                .map(NamespaceNode::entry_count)
                .sum::<usize>()
    }

    /// Height of the subtree rooted here (a lone leaf has height 1)
    pub fn height(&self) -> usize {
        1 + self.children.first().map(NamespaceNode::height).unwrap_or(0)
    }
}
