use std::env;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Absolute session lifetime, also the cookie max age.
    pub ttl_hours: i64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let ttl_hours = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(24);
        SessionConfig { ttl_hours }
    }
}
