//! Admin Router
//!
//! The moderation routes, uniformly protected by the centralized
//! authorization gate; no per-route role checks.

use axum::middleware::from_fn_with_state;
use axum::{Router, routing::patch};
use std::sync::Arc;

use auth::middleware::{RoleGate, require_role};

use crate::domain::repository::BlogRepository;
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, MarketAppState};

/// Create the admin blog router with PostgreSQL repository
pub fn admin_blog_router(repo: PgBlogRepository, gate: RoleGate) -> Router {
    admin_blog_router_generic(repo, gate)
}

/// Create a generic admin blog router for any repository implementation
pub fn admin_blog_router_generic<R>(repo: R, gate: RoleGate) -> Router
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let state = MarketAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/blogs/{id}",
            patch(handlers::update_blog_status::<R>).delete(handlers::delete_blog::<R>),
        )
        .layer(from_fn_with_state(gate, require_role))
        .with_state(state)
}
