//! Session-related types.
//!
//! The only per-visitor state the storefront keeps is the cart, stored as a
//! list of [`CartLine`](moon_flowers_core::CartLine)s.

/// Session keys.
pub mod keys {
    /// Key for the visitor's cart lines.
    pub const CART: &str = "cart";
}
