use crate::model::user::User;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Name of the cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "canteen_session";

pub trait SessionStore: Send + Sync {
    /// Creates a session for an authenticated user and returns the opaque
    /// token handed to the client.
    fn create(&self, user: &User) -> String;
    /// Resolves a token to its user. A missing or expired token yields
    /// None (anonymous), never an error. Expiry is absolute from creation;
    /// there is no renewal on access.
    fn get(&self, token: &str) -> Option<User>;
    fn destroy(&self, token: &str);
}

struct SessionEntry {
    user: User,
    created_at: DateTime<Utc>,
}

pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        InMemorySessionStore {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self, user: &User) -> String {
        let token = Uuid::new_v4().to_string();
        let entry = SessionEntry { user: user.clone(), created_at: Utc::now() };
        if let Ok(mut sessions) = self.sessions.write() {
            debug!(username = %user.username, "Session created");
            sessions.insert(token.clone(), entry);
        }
        token
    }

    fn get(&self, token: &str) -> Option<User> {
        let expired = {
            let sessions = self.sessions.read().ok()?;
            let entry = sessions.get(token)?;
            if Utc::now() - entry.created_at < self.ttl {
                return Some(entry.user.clone());
            }
            true
        };
        if expired {
            if let Ok(mut sessions) = self.sessions.write() {
                debug!("Dropping expired session");
                sessions.remove(token);
            }
        }
        None
    }

    fn destroy(&self, token: &str) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.remove(token);
        }
    }
}
