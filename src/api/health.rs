//! Health endpoint handler.

use crate::api::headers::apply_response_headers;
use crate::api::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    backend_variant: String,
}

/// GET /health - Gateway liveness. Reports configuration only; the downstream
/// backend is never probed.
pub async fn handle(State(state): State<Arc<AppState>>) -> Response {
    let body = HealthResponse {
        status: "ok",
        backend_variant: state.config.backend.variant.to_string(),
    };
    let mut response = Json(body).into_response();
    apply_response_headers(response.headers_mut());
    response
}
