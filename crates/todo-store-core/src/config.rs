//! Store Configuration
//!
//! Defaults match the public seed endpoint and the `todos` storage slot.

/// Name of the persistent slot holding the serialized sequence
pub const DEFAULT_STORAGE_KEY: &str = "todos";
pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/todos";
pub const DEFAULT_SEED_LIMIT: usize = 10;
pub const DEFAULT_EXTERNAL_ID_PREFIX: &str = "external-";
pub const DEFAULT_LOCAL_ID_PREFIX: &str = "local-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    pub seed_url: String,
    pub seed_limit: usize,
    pub external_id_prefix: String,
    pub local_id_prefix: String,
    /// Show persisted items when the seed fetch fails instead of an empty list
    pub local_fallback_on_seed_error: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_url: DEFAULT_SEED_URL.to_string(),
            seed_limit: DEFAULT_SEED_LIMIT,
            external_id_prefix: DEFAULT_EXTERNAL_ID_PREFIX.to_string(),
            local_id_prefix: DEFAULT_LOCAL_ID_PREFIX.to_string(),
            local_fallback_on_seed_error: false,
        }
    }
}

impl StoreConfig {
    /// Seed URL with the result limit applied as a query parameter
    pub fn seed_request_url(&self) -> String {
        format!("{}?_limit={}", self.seed_url, self.seed_limit)
    }

    pub fn with_seed_limit(mut self, limit: usize) -> Self {
        self.seed_limit = limit;
        self
    }

    pub fn with_local_fallback(mut self, enabled: bool) -> Self {
        self.local_fallback_on_seed_error = enabled;
        self
    }
}
