//! Delete Blog Use Case

use std::sync::Arc;

use crate::domain::repository::BlogRepository;
use crate::domain::value_object::blog_id::BlogId;
use crate::error::{MarketError, MarketResult};

/// Delete blog use case
pub struct DeleteBlogUseCase<R>
where
    R: BlogRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteBlogUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, blog_id: BlogId) -> MarketResult<()> {
        let deleted = self.repo.delete(blog_id).await?;

        if !deleted {
            return Err(MarketError::BlogNotFound);
        }

        tracing::info!(blog_id = %blog_id, "Blog deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryBlogRepository;

    #[tokio::test]
    async fn test_delete_existing_blog() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let blog_id = repo.seed("Winter markets of Thimphu", "PUBLISHED");
        let use_case = DeleteBlogUseCase::new(repo.clone());

        use_case.execute(blog_id).await.unwrap();
        assert!(repo.status_of(blog_id).is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_blog_is_not_found() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let use_case = DeleteBlogUseCase::new(repo);

        let err = use_case.execute(BlogId::new()).await.unwrap_err();
        assert!(matches!(err, MarketError::BlogNotFound));
    }
}
