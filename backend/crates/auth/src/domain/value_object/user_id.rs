//! User ID
//!
//! Typed UUID wrapper over the kernel `Id` type.

use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;
