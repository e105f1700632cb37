//! PostgreSQL Repository Implementation

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::blog::{Blog, BlogWithAuthor};
use crate::domain::repository::BlogRepository;
use crate::domain::value_object::{blog_id::BlogId, blog_status::BlogStatus};
use crate::error::MarketResult;

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BlogRepository for PgBlogRepository {
    async fn update_status(
        &self,
        blog_id: BlogId,
        status: &BlogStatus,
    ) -> MarketResult<Option<BlogWithAuthor>> {
        let row = sqlx::query_as::<_, BlogWithAuthorRow>(
            r#"
            UPDATE blogs b SET
                status = $2,
                updated_at = $3
            FROM users u
            WHERE b.blog_id = $1 AND u.user_id = b.author_id
            RETURNING
                b.blog_id,
                b.title,
                b.status,
                b.author_id,
                b.created_at,
                b.updated_at,
                u.name AS author_name,
                u.email AS author_email
            "#,
        )
        .bind(blog_id.as_uuid())
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogWithAuthorRow::into_blog_with_author))
    }

    async fn delete(&self, blog_id: BlogId) -> MarketResult<bool> {
        let deleted = sqlx::query("DELETE FROM blogs WHERE blog_id = $1")
            .bind(blog_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct BlogWithAuthorRow {
    blog_id: Uuid,
    title: String,
    status: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
    author_email: String,
}

impl BlogWithAuthorRow {
    fn into_blog_with_author(self) -> BlogWithAuthor {
        BlogWithAuthor {
            blog: Blog {
                blog_id: BlogId::from_uuid(self.blog_id),
                title: self.title,
                status: BlogStatus::from_db(self.status),
                author_id: UserId::from_uuid(self.author_id),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_name: self.author_name,
            author_email: self.author_email,
        }
    }
}
