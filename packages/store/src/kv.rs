//! # Session persistence: small string key/value stores
//!
//! The dashboard remembers three things between page loads:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] | Bearer token of the live session |
//! | [`AUTH_KEY`] | JSON [`AuthRecord`]: the signed-in admin and, in live mode, the token |
//! | [`DEMO_MODE_KEY`] | `"true"` or `"false"` |
//!
//! [`KeyValueStore`] abstracts where they live. Implementations:
//! [`MemoryKv`](crate::MemoryKv) for tests, [`FileKv`](crate::FileKv) on
//! native targets and `LocalStorageKv` in the browser.

use api::Admin;
use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "mychoice_token";
pub const AUTH_KEY: &str = "mychoice_auth";
pub const DEMO_MODE_KEY: &str = "mychoice_demo_mode";

/// Synchronous string storage. Failures are logged and swallowed: losing a
/// remembered session only means signing in again.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// What is stored under [`AUTH_KEY`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthRecord {
    pub user: Admin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

pub fn read_auth(kv: &impl KeyValueStore) -> Option<AuthRecord> {
    let raw = kv.get(AUTH_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("discarding unreadable {AUTH_KEY}: {e}");
            None
        }
    }
}

pub fn write_auth(kv: &impl KeyValueStore, record: &AuthRecord) {
    match serde_json::to_string(record) {
        Ok(json) => kv.set(AUTH_KEY, &json),
        Err(e) => tracing::error!("failed to encode {AUTH_KEY}: {e}"),
    }
}

pub fn read_demo_mode(kv: &impl KeyValueStore) -> bool {
    kv.get(DEMO_MODE_KEY).as_deref() == Some("true")
}

pub fn write_demo_mode(kv: &impl KeyValueStore, on: bool) {
    kv.set(DEMO_MODE_KEY, if on { "true" } else { "false" });
}

/// Forget the signed-in user and token. The demo flag survives.
pub fn clear_auth(kv: &impl KeyValueStore) {
    kv.remove(TOKEN_KEY);
    kv.remove(AUTH_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryKv;

    #[test]
    fn auth_record_omits_token_in_demo_mode() {
        let kv = MemoryKv::new();
        let record = AuthRecord {
            user: Admin {
                id: "demo-user-id".into(),
                full_name: "Demo Admin User".into(),
                email: "admin@mychoice.com".into(),
                role: "admin".into(),
                is_active: true,
                created_at: String::new(),
                updated_at: None,
            },
            token: None,
        };
        write_auth(&kv, &record);
        let raw = kv.get(AUTH_KEY).unwrap();
        assert!(raw.starts_with(r#"{"user":{"_id":"demo-user-id""#));
        assert!(!raw.contains("token"));
        assert_eq!(read_auth(&kv), Some(record));
    }

    #[test]
    fn garbage_auth_is_ignored() {
        let kv = MemoryKv::new();
        kv.set(AUTH_KEY, "{not json");
        assert!(read_auth(&kv).is_none());
    }

    #[test]
    fn demo_flag_and_clear() {
        let kv = MemoryKv::new();
        assert!(!read_demo_mode(&kv));
        write_demo_mode(&kv, true);
        kv.set(TOKEN_KEY, "t");
        clear_auth(&kv);
        assert!(read_demo_mode(&kv));
        assert!(kv.get(TOKEN_KEY).is_none());
        assert_eq!(kv.get(DEMO_MODE_KEY).as_deref(), Some("true"));
    }
}
