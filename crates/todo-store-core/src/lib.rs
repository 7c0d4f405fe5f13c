//! Todo Store Core
//!
//! Layered like the frontend expects:
//! - domain: todo records and errors
//! - repository: persistent slot abstractions
//! - merge / seed: combining the remote seed list with local items
//! - board: view state and user operations

pub mod board;
pub mod config;
pub mod domain;
pub mod merge;
pub mod repository;
pub mod seed;

#[cfg(test)]
mod tests;

pub use board::{LoadPhase, TodoBoard};
pub use config::StoreConfig;
pub use domain::{RemoteTodo, StoreError, StoreResult, Todo};
pub use merge::merge_by_title;
pub use repository::{JsonSlotRepository, MemorySlot, TextSlot, TodoRepository};
pub use seed::{decode_response, load_seed, transport_error, SeedSource};
