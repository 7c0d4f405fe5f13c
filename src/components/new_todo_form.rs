//! New Todo Form
//!
//! Quick-add input above the grid.

use leptos::prelude::*;
use todo_store_core::LoadPhase;

use crate::context::use_todo_context;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();
    let (new_title, set_new_title) = signal(String::new());
    let loading = move || ctx.board.with(|board| board.phase() != LoadPhase::Loaded);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&new_title.get()) {
            set_new_title.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Add new todo..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit" disabled=loading>"Add"</button>
        </form>
    }
}
