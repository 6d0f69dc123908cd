//! Service configuration and the shared handler state.

use std::sync::Arc;

use super::session_store::SessionStore;
use super::storage::UserStore;

const DEFAULT_SESSION_TTL_SECONDS: u64 = 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    origin: String,
    session_ttl_seconds: u64,
}

impl AuthConfig {
    #[must_use]
    pub fn new(origin: String) -> Self {
        Self {
            origin,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
        }
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: u64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The TTL is unsigned by construction, so the session store and the
    /// cookie `Max-Age` always see the same value.
    #[must_use]
    pub fn session_ttl_seconds(&self) -> u64 {
        self.session_ttl_seconds
    }

    /// Cookies carry `Secure` only when the frontend is served over HTTPS.
    pub(super) fn session_cookie_secure(&self) -> bool {
        self.origin.starts_with("https://")
    }
}

pub struct AuthState {
    config: AuthConfig,
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthState {
    #[must_use]
    pub fn new(
        config: AuthConfig,
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            config,
            users,
            sessions,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub(super) fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    pub(super) fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }
}
