//! Check Session Use Case
//!
//! Resolves the current session from a token. Every read re-normalizes the
//! role claim (trim + uppercase) so case drift in stored data cannot
//! silently deny or grant access; a claim outside the enumerated role set
//! rejects the session outright.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::cookie::{extract_bearer, extract_cookie};

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// The session view handlers work with
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
    /// Role after normalization, the only valid authorization input
    pub role: UserRole,
    pub is_active: bool,
    /// Expiry (Unix seconds)
    pub expires_at: i64,
}

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<AuthConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Verify a token and build the normalized session view
    pub fn resolve(&self, token: &str) -> AuthResult<SessionUser> {
        let claims = TokenIssuer::new(&self.config).verify(token)?;

        let role = UserRole::from_claim(&claims.role).ok_or_else(|| {
            tracing::warn!(role = %claims.role, "Session carries unknown role claim");
            AuthError::SessionInvalid
        })?;

        Ok(SessionUser {
            user_id: claims.sub,
            name: claims.name,
            email: claims.email,
            role,
            is_active: claims.is_active,
            expires_at: claims.exp as i64,
        })
    }

    /// Resolve the session from request headers (cookie or bearer token)
    pub fn resolve_from_headers(&self, headers: &HeaderMap) -> AuthResult<SessionUser> {
        let token = extract_cookie(headers, &self.config.session_cookie_name)
            .or_else(|| extract_bearer(headers))
            .ok_or(AuthError::SessionInvalid)?;

        self.resolve(&token)
    }
}
