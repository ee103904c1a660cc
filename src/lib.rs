//! Treefs: In-Memory Hierarchical Namespace
//!
//! A virtual filesystem held entirely in memory. Every directory owns a
//! B-tree of its immediate children, keyed by name; an interactive shell
//! drives the tree and can dump it to a report file.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod report;
pub mod shell;
