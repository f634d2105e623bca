//! Browser `localStorage` KeyValueStore.
//!
//! Storage can be missing (private browsing, sandboxed iframes) or throw on
//! write (quota). Both degrade to "nothing remembered".

use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorageKv;

impl LocalStorageKv {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageKv {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("localStorage rejected write of {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
