//! # Session: sign-in state and the live/demo switch
//!
//! [`SessionManager`] owns everything about "who is signed in, and against
//! what": it reads and writes the persisted keys from [`crate::kv`], builds
//! the [`Gateway`] for the current mode and runs the auth flows through it.
//!
//! | Flow | Live mode | Demo mode |
//! |------|-----------|-----------|
//! | [`restore`](SessionManager::restore) | Validate the stored token with `profile`; clear it on failure | Trust the stored user |
//! | [`login`](SessionManager::login) / [`signup`](SessionManager::signup) | Persist user and token | Persist user only |
//! | [`logout`](SessionManager::logout) | Tell the backend (errors ignored), then clear | Clear |
//! | [`refresh_profile`](SessionManager::refresh_profile) | Re-fetch and persist the admin | No-op |
//! | [`toggle_demo_mode`](SessionManager::toggle_demo_mode) | Flip the flag and sign out | same, and the fixtures are reseeded |
//!
//! Messages shown to the user go through [`announce`](SessionManager::announce),
//! which marks them with ` (Demo Mode)` while the demo backend is answering.

use api::*;

use crate::demo::DemoBackend;
use crate::gateway::Gateway;
use crate::kv::{
    clear_auth, read_auth, read_demo_mode, write_auth, write_demo_mode, AuthRecord,
    KeyValueStore, TOKEN_KEY,
};

pub const DEMO_SUFFIX: &str = " (Demo Mode)";

#[derive(Clone, Debug)]
pub struct SessionManager<K: KeyValueStore> {
    kv: K,
    config: DashboardConfig,
    demo: DemoBackend,
}

impl<K: KeyValueStore> SessionManager<K> {
    pub fn new(kv: K, config: DashboardConfig) -> Self {
        Self {
            kv,
            config,
            demo: DemoBackend::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn demo_mode(&self) -> bool {
        read_demo_mode(&self.kv)
    }

    pub fn token(&self) -> Option<String> {
        self.kv.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The backend for the current mode and token.
    pub fn gateway(&self) -> Gateway {
        Gateway::for_mode(self.demo_mode(), &self.config, self.token(), &self.demo)
    }

    /// Suffix `message` with ` (Demo Mode)` when demo mode is on.
    pub fn announce(&self, message: &str) -> String {
        if self.demo_mode() {
            format!("{message}{DEMO_SUFFIX}")
        } else {
            message.to_string()
        }
    }

    /// The admin remembered from a previous visit, if still valid.
    pub async fn restore(&self) -> Option<Admin> {
        if self.demo_mode() {
            return read_auth(&self.kv).map(|record| record.user);
        }
        self.token()?;
        match self.gateway().profile().await {
            Ok(admin) => {
                self.remember(&admin);
                Some(admin)
            }
            Err(e) => {
                tracing::warn!("stored session rejected: {e}");
                clear_auth(&self.kv);
                None
            }
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Admin> {
        let payload = self.gateway().login(credentials).await?;
        Ok(self.establish(payload))
    }

    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<Admin> {
        let payload = self.gateway().signup(request).await?;
        Ok(self.establish(payload))
    }

    /// Always ends signed out, whatever the backend says.
    pub async fn logout(&self) {
        if !self.demo_mode() && self.token().is_some() {
            if let Err(e) = self.gateway().logout().await {
                tracing::warn!("logout request failed: {e}");
            }
        }
        clear_auth(&self.kv);
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Admin> {
        let admin = self.gateway().update_profile(update).await?;
        self.remember(&admin);
        Ok(admin)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> ApiResult<()> {
        self.gateway().change_password(change).await
    }

    /// Re-read the admin from the backend. `Ok(None)` in demo mode.
    pub async fn refresh_profile(&self) -> ApiResult<Option<Admin>> {
        if self.demo_mode() {
            return Ok(None);
        }
        let admin = self.gateway().profile().await?;
        self.remember(&admin);
        Ok(Some(admin))
    }

    /// Flip between live and demo. Signs out, drops demo edits; returns the new mode.
    pub fn toggle_demo_mode(&self) -> bool {
        let demo = !self.demo_mode();
        write_demo_mode(&self.kv, demo);
        clear_auth(&self.kv);
        self.demo.reset();
        demo
    }

    /// Drop the stored session after the backend answered 401.
    pub fn expire(&self) {
        clear_auth(&self.kv);
    }

    pub fn current_user(&self) -> Option<Admin> {
        read_auth(&self.kv).map(|record| record.user)
    }

    fn establish(&self, payload: AuthPayload) -> Admin {
        let admin = payload.admin.clone();
        let token = if self.demo_mode() || payload.token.is_empty() {
            None
        } else {
            self.kv.set(TOKEN_KEY, &payload.token);
            Some(payload.token)
        };
        write_auth(
            &self.kv,
            &AuthRecord {
                user: payload.admin,
                token,
            },
        );
        admin
    }

    /// Replace the stored user, keeping whatever token was stored with it.
    fn remember(&self, admin: &Admin) {
        let token = read_auth(&self.kv)
            .and_then(|record| record.token)
            .or_else(|| if self.demo_mode() { None } else { self.token() });
        write_auth(
            &self.kv,
            &AuthRecord {
                user: admin.clone(),
                token,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{AUTH_KEY, DEMO_MODE_KEY};
    use crate::MemoryKv;

    fn demo_session() -> (SessionManager<MemoryKv>, MemoryKv) {
        let kv = MemoryKv::new();
        kv.set(DEMO_MODE_KEY, "true");
        (SessionManager::new(kv.clone(), DashboardConfig::default()), kv)
    }

    fn demo_credentials() -> Credentials {
        Credentials {
            email: "admin@mychoice.com".into(),
            password: "demo123".into(),
        }
    }

    #[tokio::test]
    async fn demo_login_persists_user_without_token() {
        let (session, kv) = demo_session();
        let admin = session.login(&demo_credentials()).await.unwrap();
        assert_eq!(admin.email, "admin@mychoice.com");
        assert!(kv.get(TOKEN_KEY).is_none());
        assert!(kv.get(AUTH_KEY).is_some());
        assert_eq!(
            session.announce("Login successful! Welcome back."),
            "Login successful! Welcome back. (Demo Mode)"
        );

        // A fresh manager over the same storage restores the user.
        let again = SessionManager::new(kv, DashboardConfig::default());
        assert_eq!(again.restore().await.map(|a| a.id), Some("demo-user-id".into()));
    }

    #[tokio::test]
    async fn wrong_demo_password_leaves_no_session() {
        let (session, kv) = demo_session();
        let err = session
            .login(&Credentials {
                email: "admin@mychoice.com".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        assert!(err.user_message("").starts_with("Invalid credentials"));
        assert!(kv.get(AUTH_KEY).is_none());
        assert!(session.restore().await.is_none());
    }

    #[tokio::test]
    async fn logout_clears_but_keeps_mode() {
        let (session, kv) = demo_session();
        session.login(&demo_credentials()).await.unwrap();
        session.logout().await;
        assert!(kv.get(AUTH_KEY).is_none());
        assert!(session.demo_mode());
    }

    #[tokio::test]
    async fn profile_update_is_remembered() {
        let (session, _kv) = demo_session();
        session.login(&demo_credentials()).await.unwrap();
        session
            .update_profile(&ProfileUpdate {
                full_name: Some("Site Admin".into()),
                email: None,
            })
            .await
            .unwrap();
        assert_eq!(session.current_user().unwrap().full_name, "Site Admin");
        assert_eq!(session.refresh_profile().await, Ok(None));
        session
            .change_password(&PasswordChange {
                current_password: "demo123".into(),
                new_password: "demo456".into(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn demo_signup_signs_in_new_admin() {
        let (session, _kv) = demo_session();
        let admin = session
            .signup(&SignupRequest::admin("Asha Roy", "asha@mychoice.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(session.current_user(), Some(admin));
    }

    #[tokio::test]
    async fn toggle_signs_out_and_flips_gateway() {
        let (session, kv) = demo_session();
        session.login(&demo_credentials()).await.unwrap();
        assert!(session.gateway().is_demo());

        assert!(!session.toggle_demo_mode());
        assert_eq!(kv.get(DEMO_MODE_KEY).as_deref(), Some("false"));
        assert!(session.current_user().is_none());
        assert!(!session.gateway().is_demo());
        assert_eq!(session.announce("Saved"), "Saved");

        assert!(session.toggle_demo_mode());
    }

    #[tokio::test]
    async fn toggling_out_and_back_reseeds_demo_data() {
        let (session, _kv) = demo_session();
        session.login(&demo_credentials()).await.unwrap();
        session.gateway().delete_department("dept-3").await.unwrap();
        assert_eq!(session.gateway().active_departments().await.unwrap().len(), 2);

        session.toggle_demo_mode();
        session.toggle_demo_mode();
        assert_eq!(session.gateway().active_departments().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn demo_login_after_signup_and_logout_is_demo_admin() {
        let (session, _kv) = demo_session();
        session
            .signup(&SignupRequest::admin("Asha Roy", "asha@x.com", "secret1"))
            .await
            .unwrap();
        session.logout().await;
        let admin = session.login(&demo_credentials()).await.unwrap();
        assert_eq!(admin.email, "admin@mychoice.com");
        assert_eq!(session.current_user().map(|a| a.email), Some(admin.email));
    }

    #[tokio::test]
    async fn live_restore_without_token_skips_network() {
        let session = SessionManager::new(MemoryKv::new(), DashboardConfig::default());
        assert!(!session.demo_mode());
        assert!(session.restore().await.is_none());
    }

    #[test]
    fn expire_drops_token_and_user() {
        let kv = MemoryKv::new();
        kv.set(TOKEN_KEY, "jwt");
        kv.set(AUTH_KEY, "{}");
        let session = SessionManager::new(kv.clone(), DashboardConfig::default());
        assert_eq!(session.token().as_deref(), Some("jwt"));
        session.expire();
        assert!(session.token().is_none());
        assert!(kv.get(AUTH_KEY).is_none());
    }
}
