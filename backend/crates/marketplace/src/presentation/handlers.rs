//! HTTP Handlers
//!
//! These handlers run behind the admin authorization gate; the normalized
//! session arrives through request extensions.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::middleware::SessionUser;

use crate::application::{DeleteBlogUseCase, ModerateBlogUseCase};
use crate::domain::repository::BlogRepository;
use crate::domain::value_object::blog_id::BlogId;
use crate::error::MarketResult;
use crate::presentation::dto::{BlogResponse, DeleteBlogResponse, UpdateBlogStatusRequest};

/// Shared state for marketplace handlers
#[derive(Clone)]
pub struct MarketAppState<R>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Blog Moderation
// ============================================================================

/// PATCH /api/admin/blogs/{id}
pub async fn update_blog_status<R>(
    State(state): State<MarketAppState<R>>,
    Extension(session): Extension<SessionUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBlogStatusRequest>,
) -> MarketResult<Json<BlogResponse>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let use_case = ModerateBlogUseCase::new(state.repo.clone());

    let updated = use_case.execute(BlogId::from_uuid(id), &req.status).await?;

    tracing::debug!(
        blog_id = %id,
        moderator = %session.user_id,
        "Blog moderated"
    );

    Ok(Json(BlogResponse::from(updated)))
}

/// DELETE /api/admin/blogs/{id}
pub async fn delete_blog<R>(
    State(state): State<MarketAppState<R>>,
    Extension(session): Extension<SessionUser>,
    Path(id): Path<Uuid>,
) -> MarketResult<Json<DeleteBlogResponse>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteBlogUseCase::new(state.repo.clone());

    use_case.execute(BlogId::from_uuid(id)).await?;

    tracing::debug!(
        blog_id = %id,
        moderator = %session.user_id,
        "Blog deleted by moderator"
    );

    Ok(Json(DeleteBlogResponse {
        message: "Blog deleted successfully".to_string(),
    }))
}
