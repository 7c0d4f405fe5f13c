//! Error Banner
//!
//! Single user-visible error line with a dismiss button.

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_todo_context();
    let message = move || ctx.board.with(|board| board.error().map(str::to_string));

    view! {
        {move || message().map(|msg| view! {
            <p class="error-banner">
                "Error: " {msg}
                <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>"×"</button>
            </p>
        })}
    }
}
