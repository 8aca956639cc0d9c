//! The shopping cart store.
//!
//! A cart is an ordered list of entries, one per product, each with a
//! quantity of at least one. Entries keep the position they were first added
//! at; an entry whose quantity drops to zero is removed rather than kept.
//!
//! # Example
//!
//! ```rust
//! use moon_flowers_core::{Cart, Catalog, ProductId, Price};
//!
//! let catalog = Catalog::store();
//! let moon_garden = catalog.find(ProductId::new(1)).unwrap();
//! let stardust = catalog.find(ProductId::new(2)).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(moon_garden);
//! cart.add(moon_garden);
//! cart.add(stardust);
//! assert_eq!(cart.item_count(), 3);
//! assert_eq!(cart.total_amount(), Price::rub(14200));
//!
//! cart.update_quantity(ProductId::new(1), -2);
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_amount(), Price::rub(5200));
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::{CurrencyCode, Price, Product, ProductId};

/// Errors restoring a cart from its serialized lines.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A line refers to a product the catalog does not have.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
    /// A line has a quantity of zero.
    #[error("product {0} has zero quantity")]
    ZeroQuantity(ProductId),
    /// Two lines refer to the same product.
    #[error("product {0} appears more than once")]
    DuplicateProduct(ProductId),
}

/// A product in the cart together with how many units were ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub product: Product,
    /// Always at least one while the item is in a cart.
    pub quantity: u32,
}

impl CartItem {
    /// Price of this entry: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Serialized form of a cart entry: the product id and its quantity.
///
/// Products themselves are not serialized; they are looked up again in the
/// catalog when the cart is restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// An ordered collection of cart entries, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from serialized lines, resolving products in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if a line names an unknown product, has a zero
    /// quantity, or repeats a product already seen.
    pub fn restore(catalog: &Catalog, lines: &[CartLine]) -> Result<Self, CartError> {
        let mut items: Vec<CartItem> = Vec::with_capacity(lines.len());

        for line in lines {
            if line.quantity == 0 {
                return Err(CartError::ZeroQuantity(line.product_id));
            }
            if items.iter().any(|item| item.product.id == line.product_id) {
                return Err(CartError::DuplicateProduct(line.product_id));
            }
            let product = catalog
                .find(line.product_id)
                .ok_or(CartError::UnknownProduct(line.product_id))?;
            items.push(CartItem {
                product: *product,
                quantity: line.quantity,
            });
        }

        Ok(Self { items })
    }

    /// The serialized form of this cart, in entry order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.items
            .iter()
            .map(|item| CartLine {
                product_id: item.product.id,
                quantity: item.quantity,
            })
            .collect()
    }

    /// Add one unit of `product`.
    ///
    /// An existing entry is incremented in place; otherwise a new entry with
    /// quantity one is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.item_mut(product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }

        self.items.push(CartItem {
            product: *product,
            quantity: 1,
        });
    }

    /// Adjust the quantity of product `id` by `delta`.
    ///
    /// The new quantity is floored at zero, and an entry reaching zero is
    /// removed. An id that is not in the cart is ignored.
    pub fn update_quantity(&mut self, id: ProductId, delta: i32) {
        let Some(position) = self.items.iter().position(|item| item.product.id == id) else {
            return;
        };

        let Some(item) = self.items.get_mut(position) else {
            return;
        };
        let quantity = (i64::from(item.quantity) + i64::from(delta)).max(0);

        if quantity == 0 {
            self.items.remove(position);
        } else {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Sum of `price * quantity` over all entries.
    ///
    /// An empty cart totals zero in the default store currency.
    #[must_use]
    pub fn total_amount(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or_else(CurrencyCode::default, |item| item.product.price.currency_code);

        self.items
            .iter()
            .fold(Price::zero(currency), |total, item| total.plus(item.line_total()))
    }

    /// Sum of quantities over all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Entries in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether product `id` has an entry.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.product.id == id)
    }

    /// Quantity of product `id`, or zero when it has no entry.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.product.id == id)
            .map_or(0, |item| item.quantity)
    }

    fn item_mut(&mut self, id: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.product.id == id)
    }
}
