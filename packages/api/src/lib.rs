//! # API crate: wire contract of the MyChoice admin backend
//!
//! Everything the dashboard knows about its REST backend lives here: the
//! records it exchanges, the [`Backend`] trait the views are written against,
//! and [`ApiClient`], the reqwest implementation of that trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `mychoice.toml` client configuration with defaults |
//! | [`error`] | [`ApiError`], the single error type of every operation |
//! | [`models`] | Records (`Admin`, `Department`, `IdCard`, ...) and request drafts |
//! | [`backend`] | The [`Backend`] trait, one async method per endpoint |
//! | [`client`] | [`ApiClient`]: envelope decoding, multipart bodies, bearer auth |
//! | [`validation`] | Form checks run before a request is sent |
//! | [`media`] | Upload URL resolution and picture file naming |
//!
//! The demo-mode implementation of [`Backend`] lives in the `store` crate.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod media;
pub mod models;
pub mod validation;

pub use backend::{ApiResult, Backend};
pub use client::ApiClient;
pub use config::DashboardConfig;
pub use error::ApiError;
pub use models::*;
