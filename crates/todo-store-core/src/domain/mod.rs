//! Domain Layer
//!
//! Todo records and the errors raised around them.
//! Only serde is used here.

mod error;
mod todo;

pub use error::{StoreError, StoreResult};
pub use todo::{RemoteTodo, Todo};
