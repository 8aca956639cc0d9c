//! MOON.FLOWERS Core - catalog and cart domain library.
//!
//! This crate holds everything the storefront knows about bouquets and
//! carts, independent of HTTP:
//! - [`types`] - Newtype IDs, prices, occasions and catalog records
//! - [`catalog`] - The constant product table and the occasion filter
//! - [`cart`] - The cart store: add, quantity updates, derived totals
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no sessions,
//! no HTTP. The storefront owns where a cart lives between requests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CartError, CartItem, CartLine};
pub use catalog::{Catalog, filter};
pub use types::*;
