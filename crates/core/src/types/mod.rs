//! Core types for the MOON.FLOWERS storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod occasion;
pub mod price;
pub mod product;

pub use id::*;
pub use occasion::{Occasion, OccasionFilter, UnknownOccasion};
pub use price::{CurrencyCode, Price};
pub use product::{Product, Review};
