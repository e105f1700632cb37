//! In-memory blog repository for unit tests.

use std::sync::Mutex;

use auth::domain::value_object::user_id::UserId;
use chrono::Utc;

use crate::domain::entity::blog::{Blog, BlogWithAuthor};
use crate::domain::repository::BlogRepository;
use crate::domain::value_object::{blog_id::BlogId, blog_status::BlogStatus};
use crate::error::MarketResult;

pub(crate) struct MemoryBlogRepository {
    blogs: Mutex<Vec<Blog>>,
}

impl MemoryBlogRepository {
    pub(crate) fn new() -> Self {
        Self {
            blogs: Mutex::new(Vec::new()),
        }
    }

    /// Insert a blog and return its id. Every seeded blog gets the same
    /// fixed author, which `update_status` populates into the view.
    pub(crate) fn seed(&self, title: &str, status: &str) -> BlogId {
        let now = Utc::now();
        let blog = Blog {
            blog_id: BlogId::new(),
            title: title.to_string(),
            status: BlogStatus::from_db(status),
            author_id: UserId::new(),
            created_at: now,
            updated_at: now,
        };
        let blog_id = blog.blog_id;
        self.blogs.lock().unwrap().push(blog);
        blog_id
    }

    pub(crate) fn status_of(&self, blog_id: BlogId) -> Option<String> {
        self.blogs
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.blog_id == blog_id)
            .map(|b| b.status.as_str().to_string())
    }
}

impl BlogRepository for MemoryBlogRepository {
    async fn update_status(
        &self,
        blog_id: BlogId,
        status: &BlogStatus,
    ) -> MarketResult<Option<BlogWithAuthor>> {
        let mut blogs = self.blogs.lock().unwrap();

        Ok(blogs
            .iter_mut()
            .find(|b| b.blog_id == blog_id)
            .map(|blog| {
                blog.set_status(status.clone());
                BlogWithAuthor {
                    blog: blog.clone(),
                    author_name: "Karma Dorji".to_string(),
                    author_email: "karma@blocal.bt".to_string(),
                }
            }))
    }

    async fn delete(&self, blog_id: BlogId) -> MarketResult<bool> {
        let mut blogs = self.blogs.lock().unwrap();
        let before = blogs.len();
        blogs.retain(|b| b.blog_id != blog_id);
        Ok(blogs.len() != before)
    }
}
