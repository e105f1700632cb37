//! Value Objects

pub mod blog_id;
pub mod blog_status;
pub mod product_id;

pub use blog_id::BlogId;
pub use blog_status::BlogStatus;
pub use product_id::ProductId;
