//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::blog::{Blog, BlogWithAuthor};
pub use entity::cart::{Cart, CartItem};
pub use repository::BlogRepository;
