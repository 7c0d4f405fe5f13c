//! Seed Source
//!
//! The fixed-size remote list merged in on first load.

use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::domain::{RemoteTodo, StoreError, StoreResult, Todo};

/// Remote provider of the seed list
///
/// Not `Send`: the browser fetch future lives on the single UI thread.
#[async_trait(?Send)]
pub trait SeedSource {
    async fn fetch(&self) -> StoreResult<Vec<RemoteTodo>>;
}

/// Fetch the seed list and map it into namespaced todos
///
/// The list is capped at `seed_limit` even if the endpoint ignores the
/// limit parameter.
pub async fn load_seed<S>(source: &S, config: &StoreConfig) -> StoreResult<Vec<Todo>>
where
    S: SeedSource + ?Sized,
{
    let remote = source.fetch().await?;
    log::info!("[SEED] Fetched {} remote todos", remote.len());
    Ok(remote
        .into_iter()
        .take(config.seed_limit)
        .map(|todo| todo.into_todo(&config.external_id_prefix))
        .collect())
}

/// A request that never produced a response (DNS, CORS, offline)
pub fn transport_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::Network(err.to_string())
}

/// Turn the seed endpoint's status and body into the remote list
pub fn decode_response(status: u16, body: &str) -> StoreResult<Vec<RemoteTodo>> {
    if !(200..300).contains(&status) {
        return Err(StoreError::Network(format!(
            "Network response was not ok ({})",
            status
        )));
    }
    Ok(serde_json::from_str(body)?)
}
