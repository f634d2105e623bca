pub mod demo;
pub mod gateway;
pub mod kv;
pub mod session;

mod fixtures;

mod memory;
pub use memory::MemoryKv;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileKv;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageKv;

pub use demo::DemoBackend;
pub use fixtures::{DEMO_EMAIL, DEMO_PASSWORD};
pub use gateway::Gateway;
pub use kv::{AuthRecord, KeyValueStore};
pub use session::SessionManager;

/// Session storage for the platform being built.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformKv = LocalStorageKv;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformKv = FileKv;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformKv = MemoryKv;

/// Open the platform session storage.
pub fn platform_kv() -> PlatformKv {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        LocalStorageKv
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = FileKv::default_path()
            .unwrap_or_else(|| std::env::temp_dir().join("mychoice").join("session.json"));
        FileKv::new(path)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        MemoryKv::new()
    }
}
