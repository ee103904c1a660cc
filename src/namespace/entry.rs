//! Entry types stored as keys in a namespace

use crate::namespace::Namespace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an entry, used for type checks and error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}

/// File entry: a name and its byte content
#[derive(Debug)]
pub struct File {
    name: String,
    content: Vec<u8>,
}

impl File {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Byte length of the content
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Directory entry: a name and the namespace holding its immediate children
#[derive(Debug)]
pub struct Directory {
    name: String,
    namespace: Namespace,
}

impl Directory {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn namespace_mut(&mut self) -> &mut Namespace {
        &mut self.namespace
    }

    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty()
    }
}

/// A value stored in a namespace, ordered by name
///
/// Dropping a `Directory` entry drops its namespace and every descendant.
#[derive(Debug)]
pub enum Entry {
    File(File),
    Directory(Directory),
}

impl Entry {
    /// Create a file entry; its size is the length of `content`
    pub fn file(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Entry::File(File {
            name: name.into(),
            content: content.into(),
        })
    }

    /// Create a directory entry owning a fresh, empty namespace of the default order
    pub fn directory(name: impl Into<String>) -> Self {
        Entry::Directory(Directory {
            name: name.into(),
            namespace: Namespace::new(),
        })
    }

    /// Create a directory entry whose namespace uses the given minimum degree
    pub fn directory_with_order(
        name: impl Into<String>,
        order: usize,
    ) -> Result<Self, crate::error::NamespaceError> {
        Ok(Entry::Directory(Directory {
            name: name.into(),
            namespace: Namespace::with_order(order)?,
        }))
    }

    /// Ordering and lookup key
    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => &file.name,
            Entry::Directory(dir) => &dir.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File(_) => EntryKind::File,
            Entry::Directory(_) => EntryKind::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Entry::File(file) => Some(file),
            Entry::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }
}
