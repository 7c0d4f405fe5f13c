//! In-memory slot
//!
//! Clones share the same value, so a test can keep a handle to inspect
//! what a repository persisted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::{StoreError, StoreResult};
use super::traits::TextSlot;

#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<AtomicBool>,
    unavailable: Arc<AtomicBool>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `store` calls fail, like a full browser quota
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every access fail, like a browser without local storage
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Storage("local storage unavailable".to_string()));
        }
        Ok(())
    }
}

impl TextSlot for MemorySlot {
    fn load(&self) -> StoreResult<Option<String>> {
        self.check_available()?;
        let value = self
            .value
            .lock()
            .map_err(|_| StoreError::Storage("memory slot poisoned".to_string()))?;
        Ok(value.clone())
    }

    fn store(&self, text: &str) -> StoreResult<()> {
        self.check_available()?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Storage("write rejected".to_string()));
        }
        let mut value = self
            .value
            .lock()
            .map_err(|_| StoreError::Storage("memory slot poisoned".to_string()))?;
        *value = Some(text.to_string());
        Ok(())
    }
}
