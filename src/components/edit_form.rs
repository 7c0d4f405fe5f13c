//! Edit Form
//!
//! Title input with save/cancel for the row being edited.

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn EditForm() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <div class="edit-form">
            <input
                type="text"
                class="edit-input"
                prop:value=move || ctx.board.with(|board| board.draft_title().to_string())
                on:input=move |ev| ctx.set_draft(event_target_value(&ev))
            />
            <div class="edit-buttons">
                <button class="save-btn" on:click=move |_| ctx.save_edit()>"Save"</button>
                <button class="cancel-btn" on:click=move |_| ctx.cancel_edit()>"Cancel"</button>
            </div>
        </div>
    }
}
