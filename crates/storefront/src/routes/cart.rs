//! Cart route handlers.
//!
//! The cart lives in the visitor's session as a list of cart lines. Each
//! mutating handler loads it, applies one cart operation, stores it back,
//! and redirects (303) so a browser refresh never repeats the action.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use moon_flowers_core::{Cart, CartItem, CartLine, Catalog, OccasionFilter, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session_keys;
use crate::routes::layout::Layout;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: &'static str,
    pub image: &'static str,
    pub price: String,
    pub line_total: String,
    pub quantity: u32,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.product.id.as_i32(),
            name: item.product.name,
            image: item.product.image,
            price: item.product.price.to_string(),
            line_total: item.line_total().to_string(),
            quantity: item.quantity,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: cart.total_amount().to_string(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the visitor's cart from the session.
///
/// A missing cart is an empty one. A stored cart that no longer matches the
/// catalog is discarded rather than failing every page the visitor opens.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_cart(session: &Session, catalog: &Catalog) -> Result<Cart> {
    let lines: Vec<CartLine> = session
        .get(session_keys::CART)
        .await?
        .unwrap_or_default();

    match Cart::restore(catalog, &lines) {
        Ok(cart) => Ok(cart),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding stale session cart");
            Ok(Cart::new())
        }
    }
}

/// Store the visitor's cart in the session.
async fn store_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart.lines()).await?;
    Ok(())
}

// =============================================================================
// Forms & Templates
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    /// Catalog filter to return to after adding.
    pub occasion: Option<String>,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub product_id: i32,
    pub delta: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: Layout,
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartShowTemplate> {
    let cart = load_cart(&session, state.catalog()).await?;

    Ok(CartShowTemplate {
        layout: Layout::new(None, cart.item_count()),
        cart: CartView::from(&cart),
    })
}

/// Cart count badge.
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<CartCountTemplate> {
    let cart = load_cart(&session, state.catalog()).await?;
    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}

/// Add one unit of a product, then return to the catalog.
///
/// # Errors
///
/// Returns 404 if the product is not in the catalog and 400 if the return
/// filter is not a known occasion.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<impl IntoResponse> {
    let filter = match form.occasion.as_deref() {
        Some(slug) => slug.parse::<OccasionFilter>()?,
        None => OccasionFilter::All,
    };

    let product_id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .find(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mut cart = load_cart(&session, state.catalog()).await?;
    cart.add(product);
    store_cart(&session, &cart).await?;

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", &product_id.to_string())]),
    );
    tracing::info!(
        product_id = %product_id,
        quantity = cart.quantity_of(product_id),
        item_count = cart.item_count(),
        "Added to cart"
    );

    Ok(Redirect::to(&catalog_return_url(filter, product_id)))
}

/// Adjust a cart entry's quantity by a delta, then show the cart.
///
/// Ids that are not in the cart are ignored.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateQuantityForm>,
) -> Result<impl IntoResponse> {
    let product_id = ProductId::new(form.product_id);

    let mut cart = load_cart(&session, state.catalog()).await?;
    if cart.contains(product_id) {
        cart.update_quantity(product_id, form.delta);
        store_cart(&session, &cart).await?;

        tracing::info!(
            product_id = %product_id,
            delta = form.delta,
            quantity = cart.quantity_of(product_id),
            "Updated cart quantity"
        );
    } else {
        tracing::debug!(product_id = %product_id, "Quantity update for product not in cart");
    }

    Ok(Redirect::to("/cart"))
}

/// "Place order" button.
///
/// Ordering is not connected to anything: the cart is left as it is and no
/// order is sent anywhere.
#[instrument(skip(state, session))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse> {
    let cart = load_cart(&session, state.catalog()).await?;

    add_breadcrumb("cart", "Place order pressed", None);
    tracing::info!(
        item_count = cart.item_count(),
        total = %cart.total_amount(),
        "Place order pressed; ordering is not enabled"
    );

    Ok(Redirect::to("/cart"))
}

/// Where to send the visitor after adding a product.
fn catalog_return_url(filter: OccasionFilter, product_id: ProductId) -> String {
    format!("/catalog?occasion={filter}#product-{product_id}")
}
