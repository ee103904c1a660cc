//! Directory-level operations built on top of the namespace B-tree

use crate::error::NamespaceError;
use crate::namespace::entry::{Entry, EntryKind};
use crate::namespace::node::TraversalItem;
use crate::namespace::Namespace;
use tracing::{debug, info};

/// Create the root namespace handed to the shell at startup
pub fn get_root_directory(order: usize) -> Result<Namespace, NamespaceError> {
    let root = Namespace::with_order(order)?;
    info!(order, "Root directory created");
    Ok(root)
}

/// New file entry; `size` equals the content length
pub fn create_file(name: &str, content: impl Into<Vec<u8>>) -> Entry {
    Entry::file(name, content)
}

/// New directory entry with an empty namespace of the given order
pub fn create_directory(name: &str, order: usize) -> Result<Entry, NamespaceError> {
    Entry::directory_with_order(name, order)
}

fn validate_name(name: &str) -> Result<(), NamespaceError> {
    if name.is_empty() {
        return Err(NamespaceError::InvalidArgument(
            "name must not be empty".to_string(),
        ));
    }
    if name == "." || name == ".." {
        return Err(NamespaceError::InvalidArgument(format!(
            "'{}' is reserved for navigation",
            name
        )));
    }
    if name.contains('/') {
        return Err(NamespaceError::InvalidArgument(format!(
            "'{}' must not contain '/'",
            name
        )));
    }
    Ok(())
}

/// Insert `entry` unless its name is invalid or already taken
pub fn insert_entry(namespace: &mut Namespace, entry: Entry) -> Result<(), NamespaceError> {
    validate_name(entry.name())?;
    if namespace.contains(entry.name()) {
        return Err(NamespaceError::AlreadyExists(entry.name().to_string()));
    }
    namespace.insert(entry);
    Ok(())
}

fn expect_kind(entry: &Entry, expected: EntryKind) -> Result<(), NamespaceError> {
    if entry.kind() == expected {
        Ok(())
    } else {
        Err(NamespaceError::TypeMismatch {
            name: entry.name().to_string(),
            expected,
            found: entry.kind(),
        })
    }
}

/// Remove the file `name`, releasing its content
pub fn delete_file(namespace: &mut Namespace, name: &str) -> Result<(), NamespaceError> {
    let target = namespace
        .search(name)
        .ok_or_else(|| NamespaceError::NotFound(name.to_string()))?;
    expect_kind(target, EntryKind::File)?;

    let removed = namespace.delete(name)?;
    debug!(name, size = ?removed.as_file().map(|f| f.size()), "File removed");
    Ok(())
}

/// Remove the directory `name`, which must be empty
pub fn delete_directory(namespace: &mut Namespace, name: &str) -> Result<(), NamespaceError> {
    let target = namespace
        .search(name)
        .ok_or_else(|| NamespaceError::NotFound(name.to_string()))?;
    expect_kind(target, EntryKind::Directory)?;
    if let Entry::Directory(dir) = target {
        if !dir.is_empty() {
            return Err(NamespaceError::NotEmpty(name.to_string()));
        }
    }

    namespace.delete(name)?;
    debug!(name, "Directory removed");
    Ok(())
}

/// Entries of `namespace` in name order, annotated with node depth
pub fn list(namespace: &Namespace) -> Vec<TraversalItem<'_>> {
    namespace.traverse()
}
