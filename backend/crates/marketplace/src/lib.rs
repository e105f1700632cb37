//! Marketplace Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Blog and cart entities, value objects, repository traits
//! - `application/` - Moderation use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Admin blog moderation (status overwrite, deletion)
//! - Client-held shopping cart aggregate (quantity change, remove, clear,
//!   derived total); not server-persisted, so no routes

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{MarketError, MarketResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::admin_blog_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
