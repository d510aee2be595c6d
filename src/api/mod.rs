//! # Relay HTTP surface
//!
//! The external API of the gateway. One invocation flows linearly through:
//! inbound decoding, history composition, one backend call, response
//! normalization — with the error classifier intercepting at any point.
//! Nothing is shared between invocations except the configuration and the
//! backend adapter held in [`AppState`].
//!
//! ## Endpoints
//!
//! - `POST /chat` - forward a message plus carried history to the backend
//! - `OPTIONS /chat` - CORS preflight
//! - `GET /health` - gateway liveness (configuration only, no backend probe)
//!
//! ## Response shape
//!
//! Success:
//! ```json
//! { "success": true, "response": "...", "conversationHistory": [...] }
//! ```
//!
//! Failure (any cause, one envelope):
//! ```json
//! { "success": false, "error": "..." }
//! ```
//!
//! Every response carries the same fixed CORS header set.

mod chat;
mod health;

pub mod error;
pub mod headers;
pub mod identity;
pub mod types;

pub use error::GatewayError;
pub use types::{ChatRequest, FailureEnvelope, SuccessEnvelope};

use crate::backend::{create_adapter, BackendAdapter};
use crate::config::RelayConfig;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (1 MB).
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Shared application state accessible to all handlers.
///
/// Constructed once at process start: the backend endpoint is resolved here,
/// never per request.
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub adapter: Arc<dyn BackendAdapter>,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(config: Arc<RelayConfig>) -> Self {
        let http_client = Arc::new(
            reqwest::Client::builder()
                .pool_max_idle_per_host(10)
                .build()
                .expect("Failed to create HTTP client"),
        );

        let adapter = create_adapter(&config.backend, config.generation, http_client);

        Self { config, adapter }
    }

    /// Create state with an explicit adapter (tests substitute mock backends).
    pub fn with_adapter(config: Arc<RelayConfig>, adapter: Arc<dyn BackendAdapter>) -> Self {
        Self { config, adapter }
    }
}

/// Create the API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(chat::handle).options(chat::preflight))
        .route("/health", get(health::handle))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
