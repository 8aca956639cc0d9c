//! Integration tests for MOON.FLOWERS.
//!
//! Each test boots the full storefront router on an ephemeral local port and
//! talks to it over HTTP, so the middleware stack, the session cookie and the
//! templates are all exercised together.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p moon-flowers-integration-tests
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;

use moon_flowers_storefront::config::{ConfigError, StorefrontConfig};
use moon_flowers_storefront::state::AppState;
use tokio::net::TcpListener;

/// A storefront served on `127.0.0.1` for the lifetime of a test.
pub struct TestServer {
    addr: SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

/// Errors raised while starting a test server.
#[derive(Debug, thiserror::Error)]
pub enum TestServerError {
    #[error("Invalid test configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind test listener: {0}")]
    Io(#[from] std::io::Error),
}

impl TestServer {
    /// Start a storefront with default settings and the crate's static files.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is rejected or no port can be bound.
    pub async fn start() -> Result<Self, TestServerError> {
        let vars = HashMap::from([
            ("STOREFRONT_PORT", "0".to_string()),
            (
                "STOREFRONT_STATIC_DIR",
                concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static").to_string(),
            ),
        ]);
        let config = StorefrontConfig::from_vars(|key| vars.get(key).cloned())?;

        let listener = TcpListener::bind(config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        let app = moon_flowers_storefront::app(AppState::new(config));

        let handle = tokio::spawn(async move {
            // Only ends when the test drops the server.
            axum::serve(listener, app).await.ok();
        });

        Ok(Self { addr, handle })
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A visitor: a client that keeps its session cookie and does not follow
    /// redirects, so tests can assert on them.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn visitor(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
