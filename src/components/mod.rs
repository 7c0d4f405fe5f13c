//! UI Components
//!
//! Leptos components for the todo grid.

mod delete_confirm_button;
mod edit_form;
mod error_banner;
mod new_todo_form;
mod todo_card;
mod todo_grid;

pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_form::EditForm;
pub use error_banner::ErrorBanner;
pub use new_todo_form::NewTodoForm;
pub use todo_card::TodoCard;
pub use todo_grid::TodoGrid;
