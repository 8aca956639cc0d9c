//! Catalog records: bouquets and customer reviews.

use serde::Serialize;

use super::id::{ProductId, ReviewId};
use super::occasion::Occasion;
use super::price::Price;

/// A bouquet offered in the catalog.
///
/// Products are defined once in a constant table and never change, so they
/// borrow all their text for `'static` and are cheap to copy into a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub price: Price,
    /// Absolute URL of the product photo.
    pub image: &'static str,
    pub occasion: Occasion,
    pub description: &'static str,
}

/// A customer review shown in the reviews section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Review {
    pub id: ReviewId,
    pub author: &'static str,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: &'static str,
    /// Display date, already formatted.
    pub date: &'static str,
}
