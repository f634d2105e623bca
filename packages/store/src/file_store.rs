//! # Filesystem-backed session store
//!
//! [`FileKv`] keeps the session keys in one JSON object on disk so a native
//! build remembers who was signed in across restarts.
//!
//! ## Location
//!
//! [`FileKv::default_path`] uses [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/mychoice/session.json` |
//! | Linux | `~/.local/share/mychoice/session.json` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\mychoice\session.json` |

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;

/// JSON file KeyValueStore for native targets.
#[derive(Clone, Debug)]
pub struct FileKv {
    path: PathBuf,
}

impl FileKv {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<data_dir>/mychoice/session.json`, or `None` when the platform has no data dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("mychoice").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("ignoring corrupt session file {}: {e}", self.path.display());
            BTreeMap::new()
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let result = serde_json::to_string_pretty(entries)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(&self.path, json));
        if let Err(e) = result {
            tracing::error!("failed to write session file {}: {e}", self.path.display());
        }
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_kv_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("mychoice_kv_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("session.json");

        let kv = FileKv::new(path.clone());
        assert!(kv.get("mychoice_token").is_none());
        kv.set("mychoice_token", "jwt");
        kv.set("mychoice_demo_mode", "false");

        // Re-open from the same file
        let reopened = FileKv::new(path);
        assert_eq!(reopened.get("mychoice_token").as_deref(), Some("jwt"));
        reopened.remove("mychoice_token");
        assert!(kv.get("mychoice_token").is_none());
        assert_eq!(kv.get("mychoice_demo_mode").as_deref(), Some("false"));

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
