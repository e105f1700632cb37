//! Blog Entity
//!
//! Blogs are authored elsewhere; this module only knows the shape admins
//! moderate: identifier, title, status, and the author reference.

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::{blog_id::BlogId, blog_status::BlogStatus};

/// Blog entity
#[derive(Debug, Clone)]
pub struct Blog {
    pub blog_id: BlogId,
    pub title: String,
    pub status: BlogStatus,
    /// References the authoring user
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Overwrite the status
    pub fn set_status(&mut self, status: BlogStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Moderated blog view with the author populated (name, email)
#[derive(Debug, Clone)]
pub struct BlogWithAuthor {
    pub blog: Blog,
    pub author_name: String,
    pub author_email: String,
}
