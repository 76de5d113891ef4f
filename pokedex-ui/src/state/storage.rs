//! `localStorage` key-value store

use pokedex::favorites::{KeyValueStore, StoreError, StoreResult};

/// Browser local storage; missing when storage is disabled
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }

    fn storage(&self) -> StoreResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
