//! Authentication context and hooks for the UI.

use api::{
    Admin, ApiError, ApiResult, Credentials, DashboardConfig, PasswordChange, ProfileUpdate,
    SignupRequest,
};
use dioxus::prelude::*;
use store::{Gateway, PlatformKv, SessionManager};

use crate::messages;
use crate::toast::Toasts;

pub type Session = SessionManager<PlatformKv>;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Admin>,
    pub loading: bool,
    pub demo_mode: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            demo_mode: false,
        }
    }
}

/// Handle to the signed-in session. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Auth {
    state: Signal<AuthState>,
    session: Signal<Session>,
}

impl Auth {
    /// Subscribes the calling component.
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<Admin> {
        self.state.read().user.clone()
    }

    pub fn is_demo(&self) -> bool {
        self.state.read().demo_mode
    }

    pub fn config(&self) -> DashboardConfig {
        self.session.peek().config().clone()
    }

    /// Backend for the current mode and token.
    pub fn gateway(&self) -> Gateway {
        self.session.peek().gateway()
    }

    /// `message`, marked ` (Demo Mode)` while demo mode is on.
    pub fn announce(&self, message: &str) -> String {
        self.session.peek().announce(message)
    }

    fn session(&self) -> Session {
        self.session.peek().clone()
    }

    fn set_user(&self, user: Option<Admin>) {
        let mut state = self.state;
        let demo_mode = self.session.peek().demo_mode();
        state.set(AuthState {
            user,
            loading: false,
            demo_mode,
        });
    }

    pub async fn login(self, credentials: Credentials) -> ApiResult<Admin> {
        let admin = self.session().login(&credentials).await?;
        tracing::info!("signed in as {}", admin.email);
        self.set_user(Some(admin.clone()));
        Ok(admin)
    }

    pub async fn signup(self, request: SignupRequest) -> ApiResult<Admin> {
        let admin = self.session().signup(&request).await?;
        tracing::info!("registered {}", admin.email);
        self.set_user(Some(admin.clone()));
        Ok(admin)
    }

    pub async fn logout(self) {
        self.session().logout().await;
        self.set_user(None);
    }

    pub async fn update_profile(self, update: ProfileUpdate) -> ApiResult<Admin> {
        let admin = self.session().update_profile(&update).await?;
        self.set_user(Some(admin.clone()));
        Ok(admin)
    }

    pub async fn change_password(self, change: PasswordChange) -> ApiResult<()> {
        self.session().change_password(&change).await
    }

    /// Re-read the profile from the backend; a no-op in demo mode.
    pub async fn refresh_profile(self) -> ApiResult<()> {
        if let Some(admin) = self.session().refresh_profile().await? {
            self.set_user(Some(admin));
        }
        Ok(())
    }

    /// Switch between live and demo backends. Always signs out.
    pub fn toggle_demo_mode(self) -> bool {
        let demo = self.session.peek().toggle_demo_mode();
        tracing::info!("demo mode {}", if demo { "on" } else { "off" });
        self.set_user(None);
        demo
    }

    /// Toast `err` and sign out if the backend rejected the token.
    pub fn report(self, toasts: Toasts, err: &ApiError, fallback: &str) {
        if err.is_unauthorized() {
            tracing::warn!("session rejected: {err}");
            self.session.peek().expire();
            self.set_user(None);
            toasts.error(messages::SESSION_EXPIRED);
        } else {
            tracing::error!("{fallback} {err}");
            toasts.error(err.user_message(fallback));
        }
    }
}

/// Get the authentication handle provided by [`AuthProvider`].
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that restores the stored session on mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(|| SessionManager::new(store::platform_kv(), DashboardConfig::load()));
    let state = use_signal(|| AuthState {
        demo_mode: session.peek().demo_mode(),
        ..AuthState::default()
    });
    let auth = use_context_provider(|| Auth { state, session });

    let _ = use_resource(move || async move {
        let user = auth.session().restore().await;
        auth.set_user(user);
    });

    rsx! {
        {children}
    }
}
