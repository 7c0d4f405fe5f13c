//! JSON Slot Repository
//!
//! `TodoRepository` on top of any `TextSlot`.

use crate::domain::{StoreResult, Todo};
use super::traits::{TextSlot, TodoRepository};

#[derive(Debug, Clone)]
pub struct JsonSlotRepository<S> {
    slot: S,
}

impl<S: TextSlot> JsonSlotRepository<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    #[cfg(test)]
    pub fn slot(&self) -> &S {
        &self.slot
    }
}

impl<S: TextSlot> TodoRepository for JsonSlotRepository<S> {
    fn read(&self) -> Vec<Todo> {
        let text = match self.slot.load() {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("[STORE] Slot unreadable, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Todo>>(&text) {
            Ok(todos) => todos,
            Err(e) => {
                log::warn!("[STORE] Ignoring unparseable todos: {}", e);
                Vec::new()
            }
        }
    }

    fn write(&self, todos: &[Todo]) -> StoreResult<()> {
        let text = serde_json::to_string(todos)?;
        self.slot.store(&text)?;
        log::debug!("[STORE] Wrote {} todos", todos.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreError;
    use crate::repository::MemorySlot;

    fn repo_with(text: Option<&str>) -> JsonSlotRepository<MemorySlot> {
        let slot = MemorySlot::new();
        if let Some(text) = text {
            slot.store(text).unwrap();
        }
        JsonSlotRepository::new(slot)
    }

    #[test]
    fn test_read_missing_slot_is_empty() {
        assert!(repo_with(None).read().is_empty());
    }

    #[test]
    fn test_read_garbage_is_empty() {
        assert!(repo_with(Some("not json")).read().is_empty());
        assert!(repo_with(Some("null")).read().is_empty());
        assert!(repo_with(Some(r#"{"id":"x"}"#)).read().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let repo = repo_with(None);
        let todos = vec![
            Todo::new("local-1", "First"),
            Todo::new("external-2", "Second").with_completed(true),
        ];
        repo.write(&todos).unwrap();
        assert_eq!(repo.read(), todos);

        repo.write(&todos[..1]).unwrap();
        assert_eq!(repo.read(), vec![Todo::new("local-1", "First")]);
    }

    #[test]
    fn test_unavailable_storage_reads_empty_and_fails_writes() {
        let repo = repo_with(Some(r#"[{"id":"x","title":"A","completed":false}]"#));
        repo.slot().set_unavailable(true);

        assert!(repo.read().is_empty());
        let err = repo.write(&[Todo::new("a", "A")]).unwrap_err();
        assert_eq!(err, StoreError::Storage("local storage unavailable".to_string()));

        repo.slot().set_unavailable(false);
        assert_eq!(repo.read(), vec![Todo::new("x", "A")]);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let repo = repo_with(None);
        repo.slot().set_fail_writes(true);
        let err = repo.write(&[Todo::new("a", "A")]).unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
        assert!(repo.read().is_empty());
    }
}
