//! Application Configuration
//!
//! Configuration for the Auth application layer.
//!
//! There is deliberately no `Default` implementation and no fallback
//! signing secret: release startup must fail when `AUTH_SESSION_SECRET` is
//! absent. The development constructor generates a random secret and is the
//! only place the built-in test accounts can be switched on.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use platform::cookie::CookieConfig;

/// Fixed session validity window (30 days). No refresh, rotation, or
/// revocation exists; a token is valid until this window closes.
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session token signing secret (HMAC-SHA256)
    pub session_secret: Vec<u8>,
    /// Session TTL
    pub session_ttl: Duration,
    /// Session cookie name
    pub session_cookie_name: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Allow the built-in test accounts (dev only, never in release)
    pub allow_test_accounts: bool,
}

impl AuthConfig {
    /// Create config with an explicit signing secret (production path)
    pub fn new(session_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            session_secret: session_secret.into(),
            session_ttl: SESSION_TTL,
            session_cookie_name: "session_token".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            allow_test_accounts: false,
        }
    }

    /// Create config for development: random secret, insecure cookie,
    /// test accounts enabled
    pub fn development() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);

        Self {
            cookie_secure: false,
            allow_test_accounts: true,
            ..Self::new(secret.to_vec())
        }
    }

    /// Get session TTL in whole seconds
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }

    /// Cookie configuration for the session token
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl_secs()),
        }
    }
}
