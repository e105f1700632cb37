//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credentials::CredentialsProvider;
use crate::application::session::CheckSessionUseCase;
use crate::application::{RegisterInput, RegisterUseCase, SignInInput, SignInUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    RegisterRequest, RegisterResponse, SessionStatusResponse, SessionView, SignInRequest,
    SignInResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let provider = Arc::new(CredentialsProvider::new(
        state.repo.clone(),
        state.config.clone(),
    ));
    let use_case = SignInUseCase::new(provider, state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = state.config.cookie_config().build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            token: output.token,
            user: SessionView::from(&output.session),
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
///
/// Tokens are stateless, so signing out is purely clearing the cookie.
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie_config().build_delete_cookie();

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/session
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CheckSessionUseCase::new(state.config.clone());

    match use_case.resolve_from_headers(&headers) {
        Ok(session) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            user: Some(SessionView::from(&session)),
            expires_at: Some(session.expires_at),
        })),
        Err(_) => Ok(Json(SessionStatusResponse {
            authenticated: false,
            user: None,
            expires_at: None,
        })),
    }
}
