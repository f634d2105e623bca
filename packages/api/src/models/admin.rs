//! # Admin accounts
//!
//! [`Admin`] is the signed-in operator of the dashboard as the backend reports
//! it from `/admin/login`, `/admin/signup` and `/admin/profile`. The request
//! bodies for those endpoints live here too.
//!
//! The helper [`Admin::display_name`] returns the full name or falls back to the
//! email address, and [`Admin::initial`] gives the single letter shown in the
//! sidebar avatar.

use serde::{Deserialize, Serialize};

/// Admin account information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_role() -> String {
    "admin".to_string()
}

fn default_true() -> bool {
    true
}

impl Admin {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }

    /// First letter of the display name, upper-cased. `A` when empty.
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('A')
    }

    /// Apply a profile update locally.
    pub fn merged(&self, update: &ProfileUpdate) -> Self {
        let mut admin = self.clone();
        if let Some(name) = &update.full_name {
            admin.full_name = name.clone();
        }
        if let Some(email) = &update.email {
            admin.email = email.clone();
        }
        admin
    }
}

/// `data` of a successful login or signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthPayload {
    pub admin: Admin,
    pub token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl SignupRequest {
    pub fn admin(full_name: &str, email: &str, password: &str) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            role: default_role(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(name: &str) -> Admin {
        Admin {
            id: "a1".into(),
            full_name: name.into(),
            email: "ops@mychoice.com".into(),
            role: "admin".into(),
            is_active: true,
            created_at: String::new(),
            updated_at: None,
        }
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(admin("Priya Sen").display_name(), "Priya Sen");
        assert_eq!(admin("  ").display_name(), "ops@mychoice.com");
        assert_eq!(admin("priya").initial(), 'P');
    }

    #[test]
    fn decodes_backend_admin() {
        let json = r#"{"_id":"66a","fullName":"Demo Admin User","email":"admin@mychoice.com",
            "role":"admin","isActive":true,"createdAt":"2024-01-15T10:00:00.000Z"}"#;
        let admin: Admin = serde_json::from_str(json).unwrap();
        assert_eq!(admin.id, "66a");
        assert_eq!(admin.full_name, "Demo Admin User");
        assert!(admin.updated_at.is_none());
    }

    #[test]
    fn profile_update_skips_missing_fields() {
        let update = ProfileUpdate {
            full_name: Some("New Name".into()),
            email: None,
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"fullName":"New Name"}"#
        );
        let merged = admin("Old").merged(&update);
        assert_eq!(merged.full_name, "New Name");
        assert_eq!(merged.email, "ops@mychoice.com");
    }

    #[test]
    fn signup_defaults_role_to_admin() {
        let req = SignupRequest::admin(" Asha ", " asha@mychoice.com", "secret1");
        assert_eq!(req.role, "admin");
        assert_eq!(req.full_name, "Asha");
        assert_eq!(req.email, "asha@mychoice.com");
    }
}
