//! Remote Seed Source
//!
//! Fetches the seed list from the public todo endpoint.

use async_trait::async_trait;
use todo_store_core::{decode_response, transport_error, RemoteTodo, SeedSource, StoreResult};

#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait(?Send)]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> StoreResult<Vec<RemoteTodo>> {
        log::info!("[SEED] GET {}", self.url);
        let response = self.client.get(&self.url).send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        decode_response(status, &body)
    }
}
