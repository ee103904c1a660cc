//! Error types for the treefs namespace and its shell.

use crate::namespace::EntryKind;
use thiserror::Error;

/// Namespace-level errors
///
/// Every variant leaves the namespace in the state it had before the failed
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Type mismatch for '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: EntryKind,
        found: EntryKind,
    },

    #[error("Entry already exists: {0}")]
    AlreadyExists(String),

    #[error("Directory not empty: {0} (remove its contents first)")]
    NotEmpty(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors surfaced by the shell, configuration and report layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Unknown command '{0}'. Type 'help' to see the available commands.")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
