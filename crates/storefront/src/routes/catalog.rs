//! Catalog route handler with the occasion filter.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use moon_flowers_core::{OccasionFilter, Product};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::layout::{Layout, Section};
use crate::state::AppState;

/// Catalog query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Occasion slug, or `all`. Missing means `all`.
    pub occasion: Option<String>,
}

/// One occasion button in the filter bar.
#[derive(Clone)]
pub struct FilterView {
    pub slug: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub href: String,
    pub active: bool,
}

impl FilterView {
    fn new(option: OccasionFilter, selected: OccasionFilter) -> Self {
        Self {
            slug: option.slug(),
            label: option.label(),
            icon: option.icon(),
            href: format!("{}?occasion={option}", Section::Catalog.path()),
            active: option == selected,
        }
    }
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub price: String,
    pub occasion: &'static str,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name,
            description: product.description,
            image: product.image,
            price: product.price.to_string(),
            occasion: product.occasion.label(),
        }
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/catalog.html")]
pub struct CatalogTemplate {
    pub layout: Layout,
    pub occasions: Vec<FilterView>,
    /// Slug of the active filter, posted back with "add to cart".
    pub selected: &'static str,
    pub products: Vec<ProductView>,
}

/// Display the catalog, filtered by occasion.
///
/// # Errors
///
/// Returns 400 if `occasion` is not `all` or a known occasion slug.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CatalogQuery>,
) -> Result<CatalogTemplate> {
    let selected = match query.occasion.as_deref() {
        Some(slug) => slug.parse::<OccasionFilter>()?,
        None => OccasionFilter::default(),
    };

    let products: Vec<ProductView> = state
        .catalog()
        .filter(selected)
        .iter()
        .map(ProductView::from)
        .collect();

    tracing::debug!(occasion = %selected, count = products.len(), "Filtered catalog");

    Ok(CatalogTemplate {
        layout: Layout::load(Some(Section::Catalog), &state, &session).await?,
        occasions: OccasionFilter::options()
            .map(|option| FilterView::new(option, selected))
            .collect(),
        selected: selected.slug(),
        products,
    })
}

#[cfg(test)]
mod tests {
    use moon_flowers_core::Occasion;

    use super::*;

    #[test]
    fn test_filter_bar_marks_selected() {
        let selected = OccasionFilter::Only(Occasion::Sympathy);
        let bar: Vec<_> = OccasionFilter::options()
            .map(|option| FilterView::new(option, selected))
            .collect();

        assert_eq!(bar.len(), 6);
        assert_eq!(bar.first().map(|f| f.slug), Some("all"));
        let active: Vec<_> = bar.iter().filter(|f| f.active).map(|f| f.slug).collect();
        assert_eq!(active, ["sympathy"]);
        assert!(bar.iter().any(|f| f.href == "/catalog?occasion=sympathy"));
    }

    #[test]
    fn test_product_view_formats_price() {
        let catalog = moon_flowers_core::Catalog::store();
        let view = catalog.products().first().map(ProductView::from);
        assert_eq!(view.as_ref().map(|v| v.id), Some(1));
        assert_eq!(view.map(|v| v.price), Some("4 500 ₽".to_string()));
    }
}
