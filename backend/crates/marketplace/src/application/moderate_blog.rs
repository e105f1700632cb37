//! Moderate Blog Use Case
//!
//! Direct status overwrite by an admin session. The gate has already run;
//! this only validates the status and performs the write.

use std::sync::Arc;

use crate::domain::entity::blog::BlogWithAuthor;
use crate::domain::repository::BlogRepository;
use crate::domain::value_object::{blog_id::BlogId, blog_status::BlogStatus};
use crate::error::{MarketError, MarketResult};

/// Moderate blog use case
pub struct ModerateBlogUseCase<R>
where
    R: BlogRepository,
{
    repo: Arc<R>,
}

impl<R> ModerateBlogUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, blog_id: BlogId, raw_status: &str) -> MarketResult<BlogWithAuthor> {
        let status = BlogStatus::new(raw_status).ok_or(MarketError::MissingStatus)?;

        let updated = self
            .repo
            .update_status(blog_id, &status)
            .await?
            .ok_or(MarketError::BlogNotFound)?;

        tracing::info!(
            blog_id = %blog_id,
            status = %status,
            "Blog status updated"
        );

        Ok(updated)
    }
}
