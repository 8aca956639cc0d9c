//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Sections
//! GET  /catalog?occasion=slug  - Catalog, filtered by occasion (default: all)
//! GET  /about                  - About the shop
//! GET  /delivery               - Delivery terms
//! GET  /reviews                - Customer reviews
//! GET  /contacts               - Contact details and message form
//!
//! # Cart
//! GET  /cart                   - Cart page
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/add               - Add one unit (303 back to the catalog)
//! POST /cart/update            - Change quantity by a delta (303 to /cart)
//! POST /cart/order             - Place order button; does nothing (303 to /cart)
//! ```

pub mod cart;
pub mod catalog;
pub mod home;
pub mod layout;
pub mod pages;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/order", post(cart::place_order))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/catalog", get(catalog::index))
        .route("/about", get(pages::about))
        .route("/delivery", get(pages::delivery))
        .route("/reviews", get(pages::reviews))
        .route("/contacts", get(pages::contacts))
        .nest("/cart", cart_routes())
}
