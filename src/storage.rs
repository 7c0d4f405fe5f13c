//! Browser Storage Slot
//!
//! `window.localStorage` behind the core `TextSlot` trait.

use todo_store_core::{JsonSlotRepository, StoreError, StoreResult, TextSlot};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Repository persisting the todo sequence to local storage
pub type LocalStorageRepository = JsonSlotRepository<BrowserSlot>;

/// One key in `window.localStorage`
#[derive(Debug, Clone)]
pub struct BrowserSlot {
    key: String,
}

impl BrowserSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> StoreResult<Storage> {
        web_sys::window()
            .ok_or_else(|| StoreError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("local storage unavailable".to_string()))
    }
}

impl TextSlot for BrowserSlot {
    fn load(&self) -> StoreResult<Option<String>> {
        Self::storage()?.get_item(&self.key).map_err(js_error)
    }

    fn store(&self, value: &str) -> StoreResult<()> {
        Self::storage()?.set_item(&self.key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
