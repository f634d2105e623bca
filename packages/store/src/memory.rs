use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for tests and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryKv {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let kv = MemoryKv::new();
        let other = kv.clone();
        kv.set("mychoice_token", "abc");
        assert_eq!(other.get("mychoice_token").as_deref(), Some("abc"));
        other.remove("mychoice_token");
        assert!(kv.get("mychoice_token").is_none());
    }
}
