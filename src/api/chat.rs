//! Chat endpoint handler.

use crate::api::headers::apply_response_headers;
use crate::api::identity::CallerIdentity;
use crate::api::types::{ChatRequest, SuccessEnvelope};
use crate::api::{AppState, GatewayError};
use crate::conversation::Turn;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// POST /chat - Forward one chat message to the backend and return the reply
/// merged into the conversation history.
///
/// The body is decoded here rather than by an extractor so that malformed
/// input classifies through the same failure envelope as every other error.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<SuccessEnvelope, GatewayError> {
    let identity = CallerIdentity::from_headers(&headers);
    if let Some(caller) = identity.resolve() {
        info!(caller = %caller, "Authenticated caller");
    }

    let request: ChatRequest =
        serde_json::from_str(&body).map_err(|e| GatewayError::InvalidInput(e.to_string()))?;

    info!(
        backend = state.adapter.name(),
        prior_turns = request.conversation_history.len(),
        "Chat request"
    );

    let mut history = request.conversation_history;
    history.push(Turn::user(request.message));

    let reply = match state.adapter.generate(&history).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(backend = state.adapter.name(), error = %e, "Backend request failed");
            return Err(e.into());
        }
    };

    history.push(Turn::assistant(reply.clone()));

    info!(turns = history.len(), "Chat request succeeded");
    Ok(SuccessEnvelope::new(reply, history))
}

/// OPTIONS /chat - CORS preflight. Empty 200 with the fixed header set.
pub async fn preflight() -> Response {
    let mut response = StatusCode::OK.into_response();
    apply_response_headers(response.headers_mut());
    response
}
