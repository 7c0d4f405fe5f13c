//! Todo Board
//!
//! State behind the merge-and-render view: the current sequence, the
//! user-visible error, and the single row being edited. Every mutation
//! persists the whole sequence through the repository it is given.

use chrono::Utc;

use crate::config::StoreConfig;
use crate::domain::{StoreResult, Todo};
use crate::merge::merge_by_title;
use crate::repository::TodoRepository;

/// Progress of the one-shot initial load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    /// Seed fetch in flight
    Loading,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoBoard {
    items: Vec<Todo>,
    error: Option<String>,
    /// Row in edit mode, with its title as it was when editing started
    editing: Option<Todo>,
    draft_title: String,
    phase: LoadPhase,
    local_id_prefix: String,
    local_fallback: bool,
    /// `items` holds what the slot holds; false after a failed load
    /// without fallback
    synced: bool,
}

impl TodoBoard {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            local_id_prefix: config.local_id_prefix.clone(),
            local_fallback: config.local_fallback_on_seed_error,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing(&self) -> Option<&Todo> {
        self.editing.as_ref()
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|todo| todo.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.completed).count()
    }

    // ========================
    // Initial load
    // ========================

    /// Claim the initial load. Returns `true` exactly once per board.
    pub fn begin_load(&mut self) -> bool {
        if self.phase != LoadPhase::Idle {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Finish the initial load with the result of the seed fetch
    ///
    /// On success the local items are read, merged with the seed and the
    /// merged list is persisted. On failure only the error is recorded;
    /// local items are shown only when local fallback is enabled.
    pub fn apply_seed<R>(&mut self, repo: &R, seed: StoreResult<Vec<Todo>>)
    where
        R: TodoRepository + ?Sized,
    {
        self.phase = LoadPhase::Loaded;
        match seed {
            Ok(remote) => {
                let local = repo.read();
                let local_count = local.len();
                self.items = merge_by_title(local, remote);
                self.synced = true;
                log::info!(
                    "[BOARD] Merged {} local + {} remote todos",
                    local_count,
                    self.items.len() - local_count
                );
                self.persist(repo);
            }
            Err(e) => {
                log::error!("[BOARD] Seed fetch failed: {}", e);
                self.error = Some(e.to_string());
                if self.local_fallback {
                    self.items = repo.read();
                    self.synced = true;
                }
            }
        }
    }

    // ========================
    // Editing
    // ========================

    pub fn start_edit(&mut self, todo: Todo) {
        self.draft_title = todo.title.clone();
        self.editing = Some(todo);
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft_title = title.into();
    }

    /// Write the draft title into the edited row. No-op when not editing.
    pub fn save_edit<R>(&mut self, repo: &R)
    where
        R: TodoRepository + ?Sized,
    {
        let Some(editing) = self.editing.take() else {
            return;
        };
        let title = std::mem::take(&mut self.draft_title);

        if let Some(todo) = self.find_mut(&editing.id) {
            todo.title = title;
            self.persist(repo);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft_title.clear();
    }

    // ========================
    // Row actions
    // ========================

    pub fn toggle_completed<R>(&mut self, repo: &R, id: &str)
    where
        R: TodoRepository + ?Sized,
    {
        if let Some(todo) = self.find_mut(id) {
            todo.completed = !todo.completed;
            self.persist(repo);
        }
    }

    pub fn delete<R>(&mut self, repo: &R, id: &str)
    where
        R: TodoRepository + ?Sized,
    {
        let before = self.items.len();
        self.items.retain(|todo| todo.id != id);
        if self.items.len() == before {
            return;
        }
        if self.is_editing(id) {
            self.cancel_edit();
        }
        self.persist(repo);
    }

    /// Append a new local todo. Blank titles are rejected, as is any add
    /// before the initial load has finished.
    ///
    /// After a failed load the persisted items are read back first so the
    /// write never drops them.
    pub fn add_todo<R>(&mut self, repo: &R, title: &str) -> Option<String>
    where
        R: TodoRepository + ?Sized,
    {
        let title = title.trim();
        if title.is_empty() || self.phase != LoadPhase::Loaded {
            return None;
        }
        if !self.synced {
            self.items = repo.read();
            self.synced = true;
        }
        let id = self.next_local_id(Utc::now().timestamp_millis());
        self.items.push(Todo::new(id.clone(), title));
        self.persist(repo);
        Some(id)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ========================
    // Helpers
    // ========================

    fn find_mut(&mut self, id: &str) -> Option<&mut Todo> {
        self.items.iter_mut().find(|todo| todo.id == id)
    }

    fn next_local_id(&self, millis: i64) -> String {
        let base = format!("{}{}", self.local_id_prefix, millis);
        let taken = |id: &str| self.items.iter().any(|todo| todo.id == id);
        if !taken(&base) {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn persist<R>(&mut self, repo: &R)
    where
        R: TodoRepository + ?Sized,
    {
        if let Err(e) = repo.write(&self.items) {
            log::error!("[BOARD] Failed to persist todos: {}", e);
            self.error = Some(e.to_string());
        }
    }
}
