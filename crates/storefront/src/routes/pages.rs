//! Informational section route handlers.
//!
//! About, delivery, reviews and contacts are fixed content. Only the reviews
//! page reads data, from the catalog's review list.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use moon_flowers_core::Review;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::layout::{Layout, Section};
use crate::state::AppState;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
}

/// A delivery feature card.
#[derive(Clone)]
pub struct DeliveryFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// A labelled delivery term, e.g. cost or working hours.
#[derive(Clone)]
pub struct DeliveryTerm {
    pub label: &'static str,
    pub value: &'static str,
}

const DELIVERY_FEATURES: [DeliveryFeature; 3] = [
    DeliveryFeature {
        icon: "clock",
        title: "Быстро",
        text: "Доставка в день заказа от 2 часов",
    },
    DeliveryFeature {
        icon: "map-pin",
        title: "Удобно",
        text: "Доставка по всему городу и области",
    },
    DeliveryFeature {
        icon: "package",
        title: "Аккуратно",
        text: "Бережная упаковка и транспортировка",
    },
];

const DELIVERY_TERMS: [DeliveryTerm; 3] = [
    DeliveryTerm {
        label: "Стоимость доставки",
        value: "от 500 ₽ в зависимости от района",
    },
    DeliveryTerm {
        label: "Бесплатная доставка",
        value: "при заказе от 5000 ₽",
    },
    DeliveryTerm {
        label: "Время работы",
        value: "ежедневно с 9:00 до 21:00",
    },
];

/// Delivery page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/delivery.html")]
pub struct DeliveryTemplate {
    pub layout: Layout,
    pub features: &'static [DeliveryFeature],
    pub terms: &'static [DeliveryTerm],
}

/// Highest star rating a review can show.
const MAX_RATING: u8 = 5;

/// Review display data for templates.
#[derive(Clone)]
pub struct ReviewView {
    pub author: &'static str,
    /// Rating clamped to `1..=5`.
    pub rating: u8,
    /// One star glyph per rating point.
    pub stars: String,
    pub text: &'static str,
    pub date: &'static str,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        let rating = review.rating.clamp(1, MAX_RATING);
        Self {
            author: review.author,
            rating,
            stars: "★".repeat(usize::from(rating)),
            text: review.text,
            date: review.date,
        }
    }
}

/// Reviews page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/reviews.html")]
pub struct ReviewsTemplate {
    pub layout: Layout,
    pub reviews: Vec<ReviewView>,
}

/// Store contact details.
#[derive(Clone)]
pub struct ContactDetails {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

const CONTACT_DETAILS: ContactDetails = ContactDetails {
    phone: "+7 (999) 123-45-67",
    email: "info@moon-flowers.ru",
    address: "г. Москва, ул. Цветочная, д. 15",
};

/// Contacts page template.
///
/// The "write to us" form is rendered but has no endpoint.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contacts.html")]
pub struct ContactsTemplate {
    pub layout: Layout,
    pub contact: ContactDetails,
}

/// Display the about page.
#[instrument(skip(state, session))]
pub async fn about(State(state): State<AppState>, session: Session) -> Result<AboutTemplate> {
    Ok(AboutTemplate {
        layout: Layout::load(Some(Section::About), &state, &session).await?,
    })
}

/// Display the delivery terms page.
#[instrument(skip(state, session))]
pub async fn delivery(State(state): State<AppState>, session: Session) -> Result<DeliveryTemplate> {
    Ok(DeliveryTemplate {
        layout: Layout::load(Some(Section::Delivery), &state, &session).await?,
        features: &DELIVERY_FEATURES,
        terms: &DELIVERY_TERMS,
    })
}

/// Display customer reviews.
#[instrument(skip(state, session))]
pub async fn reviews(State(state): State<AppState>, session: Session) -> Result<ReviewsTemplate> {
    Ok(ReviewsTemplate {
        layout: Layout::load(Some(Section::Reviews), &state, &session).await?,
        reviews: state
            .catalog()
            .reviews()
            .iter()
            .map(ReviewView::from)
            .collect(),
    })
}

/// Display the contacts page.
#[instrument(skip(state, session))]
pub async fn contacts(State(state): State<AppState>, session: Session) -> Result<ContactsTemplate> {
    Ok(ContactsTemplate {
        layout: Layout::load(Some(Section::Contacts), &state, &session).await?,
        contact: CONTACT_DETAILS,
    })
}

#[cfg(test)]
mod tests {
    use moon_flowers_core::{Catalog, ReviewId};

    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: ReviewId::new(1),
            author: "Анна",
            rating,
            text: "Прекрасный букет",
            date: "15 марта 2024",
        }
    }

    #[test]
    fn test_review_stars_match_rating() {
        let view = ReviewView::from(&review(4));
        assert_eq!(view.rating, 4);
        assert_eq!(view.stars, "★★★★");
    }

    #[test]
    fn test_review_rating_is_clamped() {
        assert_eq!(ReviewView::from(&review(9)).stars, "★★★★★");
        assert_eq!(ReviewView::from(&review(0)).stars, "★");
    }

    #[test]
    fn test_store_reviews_render_five_stars() {
        for review in Catalog::store().reviews() {
            assert_eq!(ReviewView::from(review).stars.chars().count(), 5);
        }
    }
}
