//! Repository Layer - Core Traits
//!
//! Implementations can use browser local storage, memory, etc.

use crate::domain::{StoreResult, Todo};

/// A single named slot holding text
pub trait TextSlot {
    /// Current value, `None` if the slot was never written
    fn load(&self) -> StoreResult<Option<String>>;

    /// Replace the value
    fn store(&self, value: &str) -> StoreResult<()>;
}

/// Read/write access to the persisted todo sequence
///
/// The sequence is always replaced wholesale, never patched.
pub trait TodoRepository {
    /// Previously written sequence, or empty when absent or unreadable
    fn read(&self) -> Vec<Todo>;

    /// Persist the full sequence, replacing any prior value
    fn write(&self, todos: &[Todo]) -> StoreResult<()>;
}
