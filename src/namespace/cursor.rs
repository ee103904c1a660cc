//! Directory cursor and navigation
//!
//! The cursor stores the names leading from the root namespace to the current
//! directory and re-resolves them on demand, so it never holds a borrow into
//! the tree. There is no parent link: moving back up is left to the caller's
//! own history.

use crate::error::NamespaceError;
use crate::namespace::entry::Entry;
use crate::namespace::Namespace;
use tracing::debug;

/// Caller-held position inside the directory hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryCursor {
    segments: Vec<String>,
    path: String,
}

impl Default for DirectoryCursor {
    fn default() -> Self {
        Self::at_root()
    }
}

impl DirectoryCursor {
    /// Cursor positioned at the root namespace
    pub fn at_root() -> Self {
        Self {
            segments: Vec::new(),
            path: "/".to_string(),
        }
    }

    /// Human-readable absolute path of the current directory
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Directory names from the root to the current directory
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_at_root(&self) -> bool {
        self.segments.is_empty()
    }

    fn descend(&mut self, name: &str) {
        if self.path != "/" {
            self.path.push('/');
        }
        self.path.push_str(name);
        self.segments.push(name.to_string());
    }

    /// Resolve the current namespace starting from `root`
    pub fn resolve<'a>(&self, root: &'a Namespace) -> Result<&'a Namespace, NamespaceError> {
        let mut namespace = root;
        for segment in &self.segments {
            namespace = match namespace.search(segment) {
                Some(Entry::Directory(dir)) => dir.namespace(),
                Some(other) => return Err(directory_expected(segment, other)),
                None => return Err(NamespaceError::NotFound(segment.clone())),
            };
        }
        Ok(namespace)
    }

    /// Mutable variant of [`DirectoryCursor::resolve`]
    pub fn resolve_mut<'a>(
        &self,
        root: &'a mut Namespace,
    ) -> Result<&'a mut Namespace, NamespaceError> {
        let mut namespace = root;
        for segment in &self.segments {
            namespace = match namespace.search_mut(segment) {
                Some(Entry::Directory(dir)) => dir.namespace_mut(),
                Some(other) => return Err(directory_expected(segment, other)),
                None => return Err(NamespaceError::NotFound(segment.clone())),
            };
        }
        Ok(namespace)
    }
}

fn directory_expected(name: &str, found: &Entry) -> NamespaceError {
    NamespaceError::TypeMismatch {
        name: name.to_string(),
        expected: crate::namespace::EntryKind::Directory,
        found: found.kind(),
    }
}

/// Move `cursor` into the directory `name` of its current namespace
///
/// `"."` is a no-op. `".."` is `Unsupported` because namespaces keep no
/// parent reference. On any failure the cursor is left untouched.
pub fn navigate(
    cursor: &mut DirectoryCursor,
    root: &Namespace,
    name: &str,
) -> Result<(), NamespaceError> {
    match name {
        "" => {
            return Err(NamespaceError::InvalidArgument(
                "directory name must not be empty".to_string(),
            ))
        }
        "." => return Ok(()),
        ".." => {
            return Err(NamespaceError::Unsupported(
                "'..' requires navigation history; namespaces keep no parent link".to_string(),
            ))
        }
        _ => {}
    }

    let current = cursor.resolve(root)?;
    match current.search(name) {
        Some(Entry::Directory(_)) => {
            cursor.descend(name);
            debug!(path = cursor.path(), "Navigated");
            Ok(())
        }
        Some(other) => Err(directory_expected(name, other)),
        None => Err(NamespaceError::NotFound(name.to_string())),
    }
}
