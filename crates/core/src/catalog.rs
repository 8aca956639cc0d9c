//! The bouquet catalog and occasion filtering.
//!
//! The product and review tables are compile-time constants: the storefront
//! has no inventory backend, and the catalog is seeded exactly once.

use crate::types::{Occasion, OccasionFilter, Price, Product, ProductId, Review, ReviewId};

macro_rules! image {
    ($file:literal) => {
        concat!(
            "https://cdn.poehali.dev/projects/bd72c75a-6e6d-4eec-9912-e40e229cc615/files/",
            $file
        )
    };
}

const PEONY_ROSES: &str = image!("e28d9424-c7b6-4e1a-8af8-fbfc75b8afa8.jpg");
const HYDRANGEA_MIX: &str = image!("be284340-fcdb-4a13-9957-caeef946b538.jpg");
const WHITE_CLASSIC: &str = image!("578bb172-b2f7-43f4-8750-504265310540.jpg");

/// Every bouquet the store sells, in display order.
pub static PRODUCTS: [Product; 8] = [
    Product {
        id: ProductId::new(1),
        name: "Лунный сад",
        price: Price::rub(4500),
        image: PEONY_ROSES,
        occasion: Occasion::Romantic,
        description: "Нежные пионовидные розы и эвкалипт",
    },
    Product {
        id: ProductId::new(2),
        name: "Звездная пыль",
        price: Price::rub(5200),
        image: HYDRANGEA_MIX,
        occasion: Occasion::Birthday,
        description: "Яркий микс из гортензий и роз",
    },
    Product {
        id: ProductId::new(3),
        name: "Млечный путь",
        price: Price::rub(6800),
        image: WHITE_CLASSIC,
        occasion: Occasion::Wedding,
        description: "Классический букет из белых роз и орхидей",
    },
    Product {
        id: ProductId::new(4),
        name: "Северное сияние",
        price: Price::rub(3900),
        image: PEONY_ROSES,
        occasion: Occasion::Anniversary,
        description: "Элегантные каллы и зелень",
    },
    Product {
        id: ProductId::new(5),
        name: "Комета",
        price: Price::rub(4200),
        image: PEONY_ROSES,
        occasion: Occasion::Romantic,
        description: "Романтичный букет из тюльпанов",
    },
    Product {
        id: ProductId::new(6),
        name: "Галактика",
        price: Price::rub(5500),
        image: HYDRANGEA_MIX,
        occasion: Occasion::Birthday,
        description: "Яркие герберы и хризантемы",
    },
    Product {
        id: ProductId::new(7),
        name: "Полярная звезда",
        price: Price::rub(3500),
        image: WHITE_CLASSIC,
        occasion: Occasion::Sympathy,
        description: "Спокойные белые лилии",
    },
    Product {
        id: ProductId::new(8),
        name: "Солнечный ветер",
        price: Price::rub(4800),
        image: HYDRANGEA_MIX,
        occasion: Occasion::Birthday,
        description: "Солнечные подсолнухи и розы",
    },
];

/// Customer reviews, newest first.
pub static REVIEWS: [Review; 3] = [
    Review {
        id: ReviewId::new(1),
        author: "Анна Петрова",
        rating: 5,
        text: "Восхитительные букеты! Заказывала на годовщину, цветы свежие и стояли две недели.",
        date: "15 ноября 2024",
    },
    Review {
        id: ReviewId::new(2),
        author: "Михаил Соколов",
        rating: 5,
        text: "Быстрая доставка и отличное качество. Рекомендую!",
        date: "10 ноября 2024",
    },
    Review {
        id: ReviewId::new(3),
        author: "Елена Смирнова",
        rating: 5,
        text: "Заказываю здесь постоянно. Букеты всегда превосходят ожидания!",
        date: "5 ноября 2024",
    },
];

/// Products passing the occasion filter, in their original relative order.
///
/// `OccasionFilter::All` returns the input unchanged.
#[must_use]
pub fn filter(products: &[Product], selected: OccasionFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| selected.matches(product.occasion))
        .copied()
        .collect()
}

/// Read-only view over a product and review table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
    reviews: &'static [Review],
}

impl Catalog {
    /// A catalog over arbitrary static tables.
    #[must_use]
    pub const fn new(products: &'static [Product], reviews: &'static [Review]) -> Self {
        Self { products, reviews }
    }

    /// The store's own catalog.
    #[must_use]
    pub fn store() -> Self {
        Self::new(&PRODUCTS, &REVIEWS)
    }

    /// All products in display order.
    #[must_use]
    pub const fn products(&self) -> &'static [Product] {
        self.products
    }

    /// All reviews in display order.
    #[must_use]
    pub const fn reviews(&self) -> &'static [Review] {
        self.reviews
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&'static Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products visible under the given occasion filter.
    #[must_use]
    pub fn filter(&self, selected: OccasionFilter) -> Vec<Product> {
        filter(self.products, selected)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::store()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_filter_all_is_identity() {
        let filtered = filter(&PRODUCTS, OccasionFilter::All);
        assert_eq!(filtered, PRODUCTS.to_vec());
    }

    #[test]
    fn test_filter_keeps_only_and_every_match() {
        for occasion in Occasion::ALL {
            let filtered = filter(&PRODUCTS, OccasionFilter::Only(occasion));
            assert!(filtered.iter().all(|p| p.occasion == occasion));

            let expected = PRODUCTS.iter().filter(|p| p.occasion == occasion).count();
            assert_eq!(filtered.len(), expected, "missing products for {occasion}");
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let birthday = filter(&PRODUCTS, OccasionFilter::Only(Occasion::Birthday));
        assert_eq!(ids(&birthday), [2, 6, 8]);

        let romantic = filter(&PRODUCTS, OccasionFilter::Only(Occasion::Romantic));
        assert_eq!(ids(&romantic), [1, 5]);
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter(&[], OccasionFilter::Only(Occasion::Wedding)).is_empty());
        assert!(filter(&[], OccasionFilter::All).is_empty());
    }

    #[test]
    fn test_filter_no_matches_is_empty() {
        let romantic_only = [PRODUCTS[0], PRODUCTS[4]];
        assert!(filter(&romantic_only, OccasionFilter::Only(Occasion::Sympathy)).is_empty());
    }

    #[test]
    fn test_product_ids_unique_and_positive() {
        let unique: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), PRODUCTS.len());
        assert!(PRODUCTS.iter().all(|p| p.id.as_i32() > 0));
    }

    #[test]
    fn test_catalog_single_currency() {
        let currency = PRODUCTS[0].price.currency_code;
        assert!(PRODUCTS.iter().all(|p| p.price.currency_code == currency));
    }

    #[test]
    fn test_product_images_served_from_cdn() {
        assert!(PRODUCTS.iter().all(|p| p.image.starts_with("https://cdn.poehali.dev/")));
    }

    #[test]
    fn test_catalog_find() {
        let catalog = Catalog::store();
        assert_eq!(catalog.find(ProductId::new(3)).map(|p| p.name), Some("Млечный путь"));
        assert!(catalog.find(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_reviews_rated_in_range() {
        assert!(Catalog::store().reviews().iter().all(|r| (1..=5).contains(&r.rating)));
    }
}
