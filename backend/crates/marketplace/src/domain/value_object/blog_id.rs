//! Blog ID
//!
//! Typed UUID wrapper over the kernel `Id` type.

use kernel::id::Id;

pub struct BlogMarker;
pub type BlogId = Id<BlogMarker>;
