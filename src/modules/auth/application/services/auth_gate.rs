use crate::auth::application::domain::entities::{AuthState, AuthUser};
use crate::portfolio::application::ports::outgoing::{KeyValueError, KeyValueStore};
use crate::portfolio::application::services::{DataAccessError, PortfolioProvider};
use crate::portfolio::domain::entities::AdminCredentials;
use crate::portfolio::domain::section::Section;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Key of the session flag in the local key-value store.
pub const SESSION_KEY: &str = "auth_state";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Session store error: {0}")]
    Session(#[from] KeyValueError),

    #[error(transparent)]
    Store(#[from] DataAccessError),

    #[error("Username and password must not be empty")]
    EmptyCredentials,
}

/// Decides whether the admin dashboard is unlocked.
///
/// This is a routing convenience, not a security boundary: the session flag is
/// one process-wide record, credentials live in plain text inside the
/// document's settings, and the data service underneath accepts writes from
/// any caller.
///
/// The fallback pair always logs in, whatever the stored credentials say.
/// It exists so that losing or corrupting the stored pair cannot lock the
/// owner out, and anyone who knows it has admin access.
pub struct AuthGate {
    provider: Arc<PortfolioProvider>,
    session: Arc<dyn KeyValueStore>,
    fallback: AdminCredentials,
}

impl AuthGate {
    pub fn new(
        provider: Arc<PortfolioProvider>,
        session: Arc<dyn KeyValueStore>,
        fallback: AdminCredentials,
    ) -> Self {
        Self {
            provider,
            session,
            fallback,
        }
    }

    async fn read_state(&self) -> Option<AuthState> {
        match self.session.get(SESSION_KEY).await {
            Ok(Some(text)) => serde_json::from_str(&text).ok(),
            Ok(None) => None,
            Err(e) => {
                warn!("Session flag unreadable: {}", e);
                None
            }
        }
    }

    async fn write_state(&self, state: &AuthState) -> Result<(), AuthError> {
        // AuthState always serializes.
        let text = serde_json::to_string(state).unwrap_or_default();
        self.session.set(SESSION_KEY, &text).await?;
        Ok(())
    }

    /// `false` when the flag is absent or unreadable.
    pub async fn is_authenticated(&self) -> bool {
        self.read_state()
            .await
            .map(|state| state.is_authenticated)
            .unwrap_or(false)
    }

    pub async fn current_user(&self) -> Option<AuthUser> {
        self.read_state().await.and_then(|state| state.user)
    }

    pub async fn session(&self) -> AuthState {
        self.read_state().await.unwrap_or_default()
    }

    /// Checks the stored credentials, then the fallback pair. A match that
    /// cannot be recorded in the session store counts as a failed login.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        let stored = self
            .provider
            .current()
            .await
            .settings
            .admin_credentials
            .clone();

        let matched = if stored.matches(username, password) {
            true
        } else if self.fallback.matches(username, password) {
            warn!("Logged in with fallback credentials");
            true
        } else {
            false
        };

        if !matched {
            info!("Rejected login for {}", username);
            return false;
        }

        match self.write_state(&AuthState::signed_in(username)).await {
            Ok(()) => true,
            Err(e) => {
                error!("Login error: {}", e);
                false
            }
        }
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        self.session.remove(SESSION_KEY).await?;
        Ok(())
    }

    /// Stores a new credential pair in the settings section and moves the
    /// session to the new username.
    pub async fn update_credentials(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }

        let mut settings = self.provider.refresh().await.settings.clone();
        settings.admin_credentials = AdminCredentials::new(username, password);
        self.provider
            .update_section(Section::Settings(settings))
            .await?;

        self.write_state(&AuthState::signed_in(username)).await?;
        info!("Admin credentials updated");
        Ok(())
    }
}
