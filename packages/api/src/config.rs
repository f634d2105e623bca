//! # Client configuration: `mychoice.toml`
//!
//! The dashboard is a pure client: everything it needs to know about its
//! surroundings (where the REST backend lives, where uploaded images are served
//! from, what goes on a printed ID card) is captured in [`DashboardConfig`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3100/api"
//! asset_origin = "http://localhost:3100"
//!
//! [paging]
//! departments = 10
//! designations = 10
//! id_cards = 10
//! products = 10
//! leads = 12
//!
//! [card]
//! company = "MyChoice"
//! helpline = "+91-03345013784"
//! portal_url = "https://employes.my-choice.co.in"
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`DashboardConfig::default`].
//!
//! ## Loading
//!
//! [`DashboardConfig::load`] runs in the browser, where there is no filesystem
//! or process environment. Overrides are therefore baked in at build time:
//! `MYCHOICE_CONFIG` may point the build at a TOML body, and `MYCHOICE_API_URL`
//! replaces just the API base URL.

use serde::{Deserialize, Serialize};

/// Top-level dashboard configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub paging: PagingSection,
    #[serde(default)]
    pub card: CardSection,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// REST root, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Origin that serves `/uploads/...` paths.
    #[serde(default = "default_asset_origin")]
    pub asset_origin: String,
}

/// Page sizes per list view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagingSection {
    #[serde(default = "default_page_size")]
    pub departments: u32,
    #[serde(default = "default_page_size")]
    pub designations: u32,
    #[serde(default = "default_page_size")]
    pub id_cards: u32,
    #[serde(default = "default_page_size")]
    pub products: u32,
    #[serde(default = "default_leads_page_size")]
    pub leads: u32,
}

/// Branding printed on ID cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSection {
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(default = "default_helpline")]
    pub helpline: String,
    /// Employee portal the QR code points at.
    #[serde(default = "default_portal_url")]
    pub portal_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3100/api".to_string()
}

fn default_asset_origin() -> String {
    "http://localhost:3100".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_leads_page_size() -> u32 {
    12
}

fn default_company() -> String {
    "MyChoice".to_string()
}

fn default_helpline() -> String {
    "+91-03345013784".to_string()
}

fn default_portal_url() -> String {
    "https://employes.my-choice.co.in".to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            asset_origin: default_asset_origin(),
        }
    }
}

impl Default for PagingSection {
    fn default() -> Self {
        Self {
            departments: default_page_size(),
            designations: default_page_size(),
            id_cards: default_page_size(),
            products: default_page_size(),
            leads: default_leads_page_size(),
        }
    }
}

impl Default for CardSection {
    fn default() -> Self {
        Self {
            company: default_company(),
            helpline: default_helpline(),
            portal_url: default_portal_url(),
        }
    }
}

impl DashboardConfig {
    /// The conventional filename for the config file.
    pub fn filename() -> &'static str {
        "mychoice.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolve the configuration baked in at build time.
    pub fn load() -> Self {
        let config = match option_env!("MYCHOICE_CONFIG") {
            Some(body) => Self::from_toml(body).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid MYCHOICE_CONFIG: {}", e);
                Self::default()
            }),
            None => Self::default(),
        };
        match option_env!("MYCHOICE_API_URL") {
            Some(url) if !url.is_empty() => config.with_base_url(url),
            _ => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3100/api");
        assert_eq!(config.paging.leads, 12);
        assert_eq!(config.card.company, "MyChoice");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            [api]
            base_url = "https://admin.example.com/api"

            [paging]
            products = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://admin.example.com/api");
        assert_eq!(config.api.asset_origin, "http://localhost:3100");
        assert_eq!(config.paging.products, 25);
        assert_eq!(config.paging.departments, 10);
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let config = DashboardConfig::default().with_base_url("http://10.0.0.5:3100/api/");
        assert_eq!(config.api.base_url, "http://10.0.0.5:3100/api");
    }

    #[test]
    fn toml_roundtrip_preserves_card_branding() {
        let mut config = DashboardConfig::default();
        config.card.helpline = "+1-555-0100".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(DashboardConfig::from_toml(&text).unwrap(), config);
    }
}
