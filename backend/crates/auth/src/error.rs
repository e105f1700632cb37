//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration request with a missing or empty field
    #[error("Missing required fields")]
    MissingFields,

    /// Registration input failed validation (e.g. malformed email)
    #[error("{0}")]
    Validation(String),

    /// Email is already registered
    #[error("User already exists")]
    UserExists,

    /// Sign-in rejected (unknown user, wrong password, or lookup failure)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session token missing, malformed, expired, or carrying an unknown role
    #[error("Unauthorized access")]
    SessionInvalid,

    /// Session is valid but the role does not meet the route requirement.
    /// Deliberately indistinguishable from `SessionInvalid` on the wire.
    #[error("Unauthorized access")]
    RoleForbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingFields | AuthError::Validation(_) | AuthError::UserExists => {
                StatusCode::BAD_REQUEST
            }
            AuthError::InvalidCredentials
            | AuthError::SessionInvalid
            | AuthError::RoleForbidden => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields | AuthError::Validation(_) | AuthError::UserExists => {
                ErrorKind::BadRequest
            }
            AuthError::InvalidCredentials
            | AuthError::SessionInvalid
            | AuthError::RoleForbidden => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::RoleForbidden => {
                tracing::warn!("Session role does not meet route requirement");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::UserExists.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::SessionInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_gate_rejections_are_identical_on_the_wire() {
        // Missing session and wrong role must produce the same rejection.
        let missing = AuthError::SessionInvalid;
        let wrong_role = AuthError::RoleForbidden;

        assert_eq!(missing.status_code(), wrong_role.status_code());
        assert_eq!(missing.kind(), wrong_role.kind());
        assert_eq!(missing.to_string(), wrong_role.to_string());
    }

    #[test]
    fn test_duplicate_email_is_bad_request() {
        // The registration endpoint reports duplicates as 400, not 409.
        let err = AuthError::UserExists;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "User already exists");
    }
}
