//! Todo Grid
//!
//! One card per todo, in sequence order.

use leptos::prelude::*;
use todo_store_core::{LoadPhase, Todo};

use crate::components::TodoCard;
use crate::context::use_todo_context;

#[component]
pub fn TodoGrid() -> impl IntoView {
    let ctx = use_todo_context();
    let phase = move || ctx.board.with(|board| board.phase());
    let is_empty = move || ctx.board.with(|board| board.items().is_empty());

    view! {
        <Show when=move || phase() == LoadPhase::Loading>
            <p class="list-status">"Loading todos..."</p>
        </Show>
        <Show when=move || phase() == LoadPhase::Loaded && is_empty()>
            <p class="list-status">"No todos yet."</p>
        </Show>

        <div class="todo-grid">
            // Keyed on content so a toggled or renamed card is rebuilt
            <For
                each=move || ctx.board.with(|board| board.items().to_vec())
                key=|todo: &Todo| (todo.id.clone(), todo.title.clone(), todo.completed)
                children=move |todo: Todo| view! { <TodoCard todo=todo /> }
            />
        </div>
    }
}
