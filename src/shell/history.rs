//! Navigation history backing `cd ..`
//!
//! Namespaces have no parent link, so the shell remembers where each `cd`
//! came from and walks back by popping.

use crate::namespace::DirectoryCursor;

#[derive(Debug, Default)]
pub struct NavigationHistory {
    stack: Vec<DirectoryCursor>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `cursor` before moving away from it
    pub fn push(&mut self, cursor: DirectoryCursor) {
        self.stack.push(cursor);
    }

    /// Most recently left position, if any
    pub fn pop(&mut self) -> Option<DirectoryCursor> {
        self.stack.pop()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
