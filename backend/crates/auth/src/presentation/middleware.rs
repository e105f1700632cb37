//! Auth Middleware
//!
//! The authorization gate. Every mutating route group is protected by one
//! reusable middleware parameterized by the required role, instead of
//! re-implementing the check per route.
//!
//! An absent/invalid session and an insufficient role produce the same
//! 401 rejection on the wire.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::CheckSessionUseCase;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

pub use crate::application::session::SessionUser;

/// Gate state: which role a route group requires
#[derive(Clone)]
pub struct RoleGate {
    pub config: Arc<AuthConfig>,
    pub required: UserRole,
}

impl RoleGate {
    pub fn new(config: Arc<AuthConfig>, required: UserRole) -> Self {
        Self { config, required }
    }

    /// Gate for admin-only route groups
    pub fn admin(config: Arc<AuthConfig>) -> Self {
        Self::new(config, UserRole::Admin)
    }

    /// Resolve the session and check it against the required role
    pub fn check(&self, headers: &HeaderMap) -> AuthResult<SessionUser> {
        let session = CheckSessionUseCase::new(self.config.clone()).resolve_from_headers(headers)?;

        if session.role != self.required {
            tracing::warn!(
                user_id = %session.user_id,
                role = %session.role,
                required = %self.required,
                "Rejected by authorization gate"
            );
            return Err(AuthError::RoleForbidden);
        }

        Ok(session)
    }
}

/// Middleware that rejects requests lacking the required role
///
/// On success the normalized [`SessionUser`] is inserted into request
/// extensions for downstream handlers.
pub async fn require_role(
    State(gate): State<RoleGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    match gate.check(req.headers()) {
        Ok(session) => {
            req.extensions_mut().insert(session);
            Ok(next.run(req).await)
        }
        Err(e) => Err(e.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::token::TokenIssuer;
    use crate::domain::provider::AuthIdentity;
    use axum::http::{HeaderValue, header};

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::new(b"gate-test-secret".to_vec()))
    }

    fn headers_with_role(config: &AuthConfig, role: &str) -> HeaderMap {
        let identity = AuthIdentity {
            user_id: "user-1".to_string(),
            email: "admin@blocal.bt".to_string(),
            name: "Admin User".to_string(),
            role: role.to_string(),
            is_active: true,
        };
        let token = TokenIssuer::new(config).sign(&identity).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_missing_session_rejected() {
        let gate = RoleGate::admin(config());
        assert!(matches!(
            gate.check(&HeaderMap::new()),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_wrong_role_rejected_identically() {
        let config = config();
        let gate = RoleGate::admin(config.clone());

        let err = gate
            .check(&headers_with_role(&config, "BUYER"))
            .unwrap_err();
        assert!(matches!(err, AuthError::RoleForbidden));

        // Same status and message as a missing session
        assert_eq!(err.status_code(), AuthError::SessionInvalid.status_code());
        assert_eq!(err.to_string(), AuthError::SessionInvalid.to_string());
    }

    #[test]
    fn test_admin_passes_regardless_of_claim_case() {
        let config = config();
        let gate = RoleGate::admin(config.clone());

        for raw in ["ADMIN", "admin", " Admin "] {
            let session = gate
                .check(&headers_with_role(&config, raw))
                .unwrap_or_else(|_| panic!("claim {raw:?} should pass"));
            assert_eq!(session.role, UserRole::Admin);
        }
    }

    #[test]
    fn test_unknown_role_claim_rejected() {
        let config = config();
        let gate = RoleGate::admin(config.clone());

        assert!(gate.check(&headers_with_role(&config, "USER")).is_err());
    }
}
