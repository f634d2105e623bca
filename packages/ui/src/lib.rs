//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;
pub mod format;
pub mod messages;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState, Session};

pub mod toast;
pub use toast::{use_toasts, ToastLevel, ToastProvider, Toasts};

mod files;
pub use files::{picked_upload, picked_uploads, preview_url, save_download};

mod sidebar;
pub use sidebar::{NavItem, Sidebar};

mod demo_toggle;
pub use demo_toggle::DemoModeToggle;

/// Wait without blocking the UI thread.
pub(crate) async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
