//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::blog::BlogWithAuthor;
use crate::domain::value_object::{blog_id::BlogId, blog_status::BlogStatus};
use crate::error::MarketResult;

/// Blog repository trait (moderation surface only)
#[trait_variant::make(BlogRepository: Send)]
pub trait LocalBlogRepository {
    /// Overwrite a blog's status; returns the updated blog with its author
    /// populated, or `None` if the id is unknown
    async fn update_status(
        &self,
        blog_id: BlogId,
        status: &BlogStatus,
    ) -> MarketResult<Option<BlogWithAuthor>>;

    /// Delete a blog; returns whether it existed
    async fn delete(&self, blog_id: BlogId) -> MarketResult<bool>;
}
