//! Presentation Layer
//!
//! HTTP handlers, DTOs, and the admin router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::MarketAppState;
pub use router::{admin_blog_router, admin_blog_router_generic};
