//! Server-side session storage keyed by opaque tokens.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::types::SessionUser;

/// Key-value session backing. Handlers never care whether sessions live in
/// process memory or an external cache.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn set(&self, token: &str, user: SessionUser);
    async fn get(&self, token: &str) -> Option<SessionUser>;
    /// Destroying an absent session is not an error.
    async fn destroy(&self, token: &str);
}

struct SessionEntry {
    user: SessionUser,
    created_at: Instant,
}

/// In-memory store with TTL eviction: stale entries are swept on insert and
/// filtered on read.
pub struct MemorySessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn set(&self, token: &str, user: SessionUser) {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, entry| entry.created_at.elapsed() < self.ttl);
        sessions.insert(
            token.to_string(),
            SessionEntry {
                user,
                created_at: Instant::now(),
            },
        );
    }

    async fn get(&self, token: &str) -> Option<SessionUser> {
        let mut sessions = self.sessions.lock().await;
        if let Some(entry) = sessions.get(token) {
            if entry.created_at.elapsed() < self.ttl {
                return Some(entry.user.clone());
            }
            sessions.remove(token);
        }
        None
    }

    async fn destroy(&self, token: &str) {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(token);
    }
}
