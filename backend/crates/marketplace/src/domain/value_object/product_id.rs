//! Product ID
//!
//! Typed UUID wrapper for product references held by cart items. Products
//! themselves live outside this module; the cart only points at them.

use kernel::id::Id;

pub struct ProductMarker;
pub type ProductId = Id<ProductMarker>;
