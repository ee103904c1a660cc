//! Property-based tests for namespace B-tree behavior

mod namespace_properties;
