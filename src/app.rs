//! Todo Store App
//!
//! Loads the seed list once, merges it with local storage and renders
//! the todo grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_store_core::{load_seed, StoreConfig};

use crate::components::{ErrorBanner, NewTodoForm, TodoGrid};
use crate::context::TodoContext;
use crate::remote::HttpSeedSource;

/// Creation view this page links back to
const BACK_HREF: &str = "./";

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::default();
    let ctx = TodoContext::new(&config);
    provide_context(ctx);

    // Initial load, guarded so it never runs twice
    Effect::new(move |_| {
        if !ctx.begin_load() {
            return;
        }
        let config = config.clone();
        spawn_local(async move {
            let source = HttpSeedSource::new(config.seed_request_url());
            let seed = load_seed(&source, &config).await;
            ctx.apply_seed(seed);
        });
    });

    view! {
        <div class="container">
            <h1 class="page-title">"Todo Store"</h1>
            <div class="nav-row">
                <a href=BACK_HREF class="back-link">"Go Back to Add Todo"</a>
            </div>

            <ErrorBanner />

            <NewTodoForm />

            <TodoGrid />

            <p class="item-count">
                {move || ctx.board.with(|board| {
                    format!("{} todos, {} completed", board.items().len(), board.completed_count())
                })}
            </p>
        </div>
    }
}
