//! Todo Entity
//!
//! The persisted record plus the shape returned by the seed endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// A single todo record as stored in the persistent slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within a sequence. Either `external-<n>` or locally generated.
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    /// Free text, also the merge key
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Item returned by the remote todo endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteTodo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl RemoteTodo {
    /// Namespace the remote id so it cannot be confused with local ids
    pub fn into_todo(self, prefix: &str) -> Todo {
        Todo {
            id: format!("{}{}", prefix, self.id),
            title: self.title,
            completed: self.completed,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

// Creation views have stored numeric timestamps as ids.
fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_reads_as_text() {
        let json = r#"{"id":1700000000000,"title":"Buy milk","completed":true}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, "1700000000000");
        assert_eq!(todo.title, "Buy milk");
        assert!(todo.completed);
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let todo: Todo = serde_json::from_str(r#"{"id":"x","title":"A"}"#).unwrap();
        assert!(!todo.completed);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Todo::new("local-1", "Write report")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "local-1", "title": "Write report", "completed": false})
        );
    }

    #[test]
    fn test_remote_todo_is_namespaced() {
        let remote: RemoteTodo = serde_json::from_str(
            r#"{"userId":1,"id":7,"title":"delectus aut autem","completed":false}"#,
        )
        .unwrap();
        let todo = remote.into_todo("external-");
        assert_eq!(todo, Todo::new("external-7", "delectus aut autem"));
    }
}
