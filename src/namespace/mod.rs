//! In-memory namespace
//!
//! Each directory owns one `Namespace`: a B-tree of entries keyed by name.
//! A namespace never refers back to its parent, so ownership is a strict
//! tree from the root namespace down.

pub mod cursor;
pub mod directory;
pub mod entry;
pub mod node;

pub use cursor::{navigate, DirectoryCursor};
pub use directory::{
    create_directory, create_file, delete_directory, delete_file, get_root_directory,
    insert_entry, list,
};
pub use entry::{Directory, Entry, EntryKind, File};
pub use node::{NamespaceNode, TraversalItem};

use crate::error::NamespaceError;
use tracing::debug;

/// Minimum degree used when none is configured
pub const DEFAULT_ORDER: usize = 3;

/// Smallest minimum degree that yields a valid B-tree
pub const MIN_ORDER: usize = 2;

/// Largest accepted minimum degree; keeps `2·order − 1` well inside `usize`
pub const MAX_ORDER: usize = 1 << 16;

/// B-tree of entries representing one directory's immediate children
#[derive(Debug)]
pub struct Namespace {
    root: NamespaceNode,
    order: usize,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create an empty namespace with [`DEFAULT_ORDER`]
    pub fn new() -> Self {
        Self {
            root: NamespaceNode::new(true),
            order: DEFAULT_ORDER,
        }
    }

    /// Create an empty namespace with the given minimum degree
    pub fn with_order(order: usize) -> Result<Self, NamespaceError> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
            return Err(NamespaceError::InvalidArgument(format!(
                "namespace order must be between {} and {}, got {}",
                MIN_ORDER, MAX_ORDER, order
            )));
        }
        Ok(Self {
            root: NamespaceNode::new(true),
            order,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn root(&self) -> &NamespaceNode {
        &self.root
    }

    /// True when the root holds no keys
    pub fn is_empty(&self) -> bool {
        self.root.key_count() == 0
    }

    /// Number of reachable entries (immediate children only)
    pub fn len(&self) -> usize {
        self.root.entry_count()
    }

    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Insert an entry without checking for an existing name
    ///
    /// Use [`insert_entry`] for the checked variant.
    pub fn insert(&mut self, entry: Entry) {
        debug!(name = entry.name(), kind = %entry.kind(), "Insert entry");

        if self.root.is_full(self.order) {
            let old_root = std::mem::replace(&mut self.root, NamespaceNode::new(false));
            self.root = NamespaceNode::with_single_child(old_root);
            self.root.split_child(0, self.order);
            debug!(height = self.root.height(), "Namespace grew at the root");
        }
        self.root.insert_non_full(entry, self.order);
    }

    pub fn search(&self, name: &str) -> Option<&Entry> {
        self.root.search(name)
    }

    pub fn search_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.root.search_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.search(name).is_some()
    }

    /// Remove the entry named `name` and hand it back to the caller
    ///
    /// Only entries held by leaf nodes can be removed; an entry held by an
    /// internal node yields `Unsupported` and nothing changes. An empty
    /// internal root collapses into its only child afterwards.
    pub fn delete(&mut self, name: &str) -> Result<Entry, NamespaceError> {
        let removed = self.root.delete(name)?;
        debug!(name, "Deleted entry");

        if let Some(child) = self.root.take_single_child() {
            self.root = child;
            debug!(height = self.root.height(), "Namespace shrank at the root");
        }
        Ok(removed)
    }

    /// In-order walk of the entries with the depth of the node holding each
    ///
    /// Directory contents are not descended into.
    pub fn traverse(&self) -> Vec<TraversalItem<'_>> {
        let mut items = Vec::with_capacity(self.root.key_count());
        self.root.traverse_into(0, &mut items);
        items
    }

    /// Entries in name order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.traverse().into_iter().map(|item| item.entry)
    }
}
