//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::session::SessionUser;

// ============================================================================
// Register
// ============================================================================

/// Registration request
///
/// Fields default to empty strings so that an absent field and an empty one
/// take the same validation path (400, "Missing required fields").
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Registration response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    /// Signed session token (also set as a cookie)
    pub token: String,
    pub user: SessionView,
}

// ============================================================================
// Session
// ============================================================================

/// Session view exposed to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub user_id: String,
    pub name: String,
    pub email: String,
    /// Normalized role (always upper-case)
    pub role: String,
    pub is_active: bool,
}

impl From<&SessionUser> for SessionView {
    fn from(session: &SessionUser) -> Self {
        Self {
            user_id: session.user_id.clone(),
            name: session.name.clone(),
            email: session.email.clone(),
            role: session.role.as_str().to_string(),
            is_active: session.is_active,
        }
    }
}

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user: Option<SessionView>,
    /// Expiry (Unix seconds)
    pub expires_at: Option<i64>,
}
