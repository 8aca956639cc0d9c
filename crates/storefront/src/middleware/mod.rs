//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (record in span, echo in response)
//! 4. Security headers (CSP, frame and isolation policies)
//! 5. Session layer (tower-sessions with a bounded in-memory store)

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod session_store;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use session_store::CartSessionStore;
