//! Application Context
//!
//! Board state and repository shared with every component.

use leptos::prelude::*;
use todo_store_core::{StoreConfig, StoreResult, Todo, TodoBoard};

use crate::storage::{BrowserSlot, LocalStorageRepository};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// View state: items, error, edit state
    pub board: RwSignal<TodoBoard>,
    repo: StoredValue<LocalStorageRepository>,
}

impl TodoContext {
    pub fn new(config: &StoreConfig) -> Self {
        let repo = LocalStorageRepository::new(BrowserSlot::new(&config.storage_key));
        Self {
            board: RwSignal::new(TodoBoard::new(config)),
            repo: StoredValue::new(repo),
        }
    }

    /// Claim the one-shot initial load
    pub fn begin_load(&self) -> bool {
        self.board.try_update(|board| board.begin_load()).unwrap_or(false)
    }

    pub fn apply_seed(&self, seed: StoreResult<Vec<Todo>>) {
        self.repo.with_value(|repo| self.board.update(|board| board.apply_seed(repo, seed)));
    }

    pub fn start_edit(&self, todo: Todo) {
        self.board.update(|board| board.start_edit(todo));
    }

    pub fn set_draft(&self, title: String) {
        self.board.update(|board| board.set_draft_title(title));
    }

    pub fn save_edit(&self) {
        self.repo.with_value(|repo| self.board.update(|board| board.save_edit(repo)));
    }

    pub fn cancel_edit(&self) {
        self.board.update(|board| board.cancel_edit());
    }

    pub fn toggle(&self, id: &str) {
        self.repo.with_value(|repo| self.board.update(|board| board.toggle_completed(repo, id)));
    }

    pub fn delete(&self, id: &str) {
        self.repo.with_value(|repo| self.board.update(|board| board.delete(repo, id)));
    }

    /// Add a todo, returns whether one was created
    pub fn add(&self, title: &str) -> bool {
        self.repo
            .with_value(|repo| self.board.try_update(|board| board.add_todo(repo, title).is_some()))
            .unwrap_or(false)
    }

    pub fn dismiss_error(&self) {
        self.board.update(|board| board.dismiss_error());
    }
}

/// Get the todo context provided by `App`
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
