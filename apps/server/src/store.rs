//! Stack storage collaborator.
//!
//! The import engine hands a finished stack to the store exactly once per
//! successful import and has no further interaction with it.

use focusaurus_core::Stack;

/// Storage interface for completed stacks.
pub trait StackStore {
    fn insert(&mut self, stack: Stack);
    fn list(&self) -> Vec<Stack>;
    fn get(&self, id: &str) -> Option<&Stack>;
    fn get_mut(&mut self, id: &str) -> Option<&mut Stack>;
    fn delete(&mut self, id: &str) -> bool;
}

/// In-memory store, insertion-ordered.
#[derive(Debug, Default)]
pub struct InMemoryStackStore {
    stacks: Vec<Stack>,
}

impl InMemoryStackStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StackStore for InMemoryStackStore {
    fn insert(&mut self, stack: Stack) {
        self.stacks.push(stack);
    }

    fn list(&self) -> Vec<Stack> {
        self.stacks.clone()
    }

    fn get(&self, id: &str) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Stack> {
        self.stacks.iter_mut().find(|s| s.id == id)
    }

    fn delete(&mut self, id: &str) -> bool {
        let before = self.stacks.len();
        self.stacks.retain(|s| s.id != id);
        self.stacks.len() < before
    }
}
