//! Repository Layer
//!
//! The Local Store Adapter: a JSON-serialized todo sequence kept in one
//! named text slot.

mod memory;
mod slot_repo;
mod traits;

pub use memory::MemorySlot;
pub use slot_repo::JsonSlotRepository;
pub use traits::{TextSlot, TodoRepository};
