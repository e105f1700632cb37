//! Entities

pub mod blog;
pub mod cart;

pub use blog::{Blog, BlogWithAuthor};
pub use cart::{Cart, CartItem};
