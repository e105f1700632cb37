//! Marketplace Error Types
//!
//! Marketplace-specific error variants integrating with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Marketplace-specific result type alias
pub type MarketResult<T> = Result<T, MarketError>;

/// Marketplace-specific error variants
#[derive(Debug, Error)]
pub enum MarketError {
    /// Status overwrite without a status value
    #[error("Blog ID and status are required")]
    MissingStatus,

    /// No blog with the given identifier
    #[error("Blog not found")]
    BlogNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarketError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MarketError::MissingStatus => StatusCode::BAD_REQUEST,
            MarketError::BlogNotFound => StatusCode::NOT_FOUND,
            MarketError::Database(_) | MarketError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketError::MissingStatus => ErrorKind::BadRequest,
            MarketError::BlogNotFound => ErrorKind::NotFound,
            MarketError::Database(_) | MarketError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MarketError::Database(e) => {
                tracing::error!(error = %e, "Marketplace database error");
            }
            MarketError::Internal(msg) => {
                tracing::error!(message = %msg, "Marketplace internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Marketplace error");
            }
        }
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
