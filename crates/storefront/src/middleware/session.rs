//! Session middleware configuration.
//!
//! Sessions live in process memory only, in a bounded [`CartSessionStore`]:
//! a visitor's cart disappears after a week without visits, when the store
//! is full, or when the server restarts.

use tower_sessions::{Expiry, SessionManagerLayer};

use crate::config::StorefrontConfig;
use crate::middleware::session_store::CartSessionStore;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "mf_session";

/// Session expiry time in seconds (7 days of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Most sessions held at once.
const MAX_SESSIONS: u64 = 100_000;

/// Create the session layer with a bounded in-memory store.
///
/// The cookie is marked `Secure` when the storefront is served over HTTPS.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<CartSessionStore> {
    SessionManagerLayer::new(CartSessionStore::new(MAX_SESSIONS))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http, routing::get};
    use tower::ServiceExt;
    use tower_sessions::Session;

    use super::*;

    #[tokio::test]
    async fn test_session_cookie_expires_on_inactivity() {
        let config = StorefrontConfig::from_vars(|_| None).unwrap();
        let app = Router::new()
            .route(
                "/",
                get(|session: Session| async move {
                    session.insert("touched", true).await.unwrap();
                }),
            )
            .layer(create_session_layer(&config));

        let request = http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        let cookie = response.headers()[http::header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("mf_session="));
        assert!(cookie.contains(&format!("Max-Age={SESSION_EXPIRY_SECONDS}")));
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));
    }
}
