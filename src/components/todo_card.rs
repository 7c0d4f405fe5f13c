//! Todo Card Component
//!
//! A single todo in the grid, either viewing or editing.

use leptos::prelude::*;
use todo_store_core::Todo;

use crate::components::{DeleteConfirmButton, EditForm};
use crate::context::use_todo_context;

#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let ctx = use_todo_context();

    let id = todo.id.clone();
    let completed = todo.completed;
    let title = todo.title.clone();
    let editing = move || ctx.board.with(|board| board.is_editing(&id));

    view! {
        <div class=if completed { "todo-card completed" } else { "todo-card" }>
            <h3 class="todo-title">{title}</h3>
            <p class="todo-status">{if completed { "Completed" } else { "Pending" }}</p>
            {move || if editing() {
                view! { <EditForm /> }.into_any()
            } else {
                view! { <RowActions todo=todo.clone() /> }.into_any()
            }}
        </div>
    }
}

/// Edit / toggle / delete buttons of a card in view mode
#[component]
fn RowActions(todo: Todo) -> impl IntoView {
    let ctx = use_todo_context();

    let completed = todo.completed;
    let toggle_id = todo.id.clone();
    let delete_id = todo.id.clone();

    view! {
        <div class="row-actions">
            <button class="edit-btn" on:click=move |_| ctx.start_edit(todo.clone())>
                "Edit"
            </button>
            <button
                class=if completed { "toggle-btn done" } else { "toggle-btn" }
                on:click=move |_| ctx.toggle(&toggle_id)
            >
                {if completed { "Mark as Incomplete" } else { "Mark as Completed" }}
            </button>
            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=Callback::new(move |_| ctx.delete(&delete_id))
            />
        </div>
    }
}
