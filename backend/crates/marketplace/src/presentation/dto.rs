//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::blog::BlogWithAuthor;

// ============================================================================
// Blog Moderation
// ============================================================================

/// Status overwrite request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogStatusRequest {
    #[serde(default)]
    pub status: String,
}

/// Author populated into the moderated blog view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub name: String,
    pub email: String,
}

/// Moderated blog response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub status: String,
    pub author: AuthorView,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogWithAuthor> for BlogResponse {
    fn from(value: BlogWithAuthor) -> Self {
        Self {
            id: value.blog.blog_id.to_string(),
            title: value.blog.title,
            status: value.blog.status.as_str().to_string(),
            author: AuthorView {
                name: value.author_name,
                email: value.author_email,
            },
            created_at: value.blog.created_at,
            updated_at: value.blog.updated_at,
        }
    }
}

/// Deletion confirmation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBlogResponse {
    pub message: String,
}
