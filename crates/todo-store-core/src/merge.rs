//! Merge Utilities
//!
//! Combine locally persisted todos with the remote seed list.

use std::collections::HashSet;

use crate::domain::Todo;

/// Local items first, in order, then remote items whose title is not
/// already used by a local item (case-sensitive exact match).
///
/// A remote item whose id is already present is skipped as well, so ids
/// stay unique when a previously merged item was renamed locally.
pub fn merge_by_title(local: Vec<Todo>, remote: Vec<Todo>) -> Vec<Todo> {
    let local_titles: HashSet<String> = local.iter().map(|todo| todo.title.clone()).collect();
    let mut ids: HashSet<String> = local.iter().map(|todo| todo.id.clone()).collect();

    let mut merged = local;
    for todo in remote {
        if local_titles.contains(&todo.title) || ids.contains(&todo.id) {
            continue;
        }
        ids.insert(todo.id.clone());
        merged.push(todo);
    }
    merged
}
