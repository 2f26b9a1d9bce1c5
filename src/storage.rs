//! Browser Storage
//!
//! `window.localStorage` behind the core `KeyValueStore` trait.

use nursery_core::storage::KeyValueStore;
use nursery_core::{Error, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| Error::Storage("localStorage is not available".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
