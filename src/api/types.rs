//! Request and envelope types for the relay surface.

use crate::api::headers::apply_response_headers;
use crate::conversation::ConversationHistory;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Inbound chat request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The caller's new message (required).
    pub message: String,
    /// Prior turns carried forward by the caller. The gateway never persists
    /// history; resending it is the caller's responsibility.
    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: ConversationHistory,
}

/// Success half of the result envelope: the generated reply plus the full
/// history including the new user and assistant turns.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub success: bool,
    pub response: String,
    #[serde(rename = "conversationHistory")]
    pub conversation_history: ConversationHistory,
}

impl SuccessEnvelope {
    pub fn new(response: String, conversation_history: ConversationHistory) -> Self {
        Self {
            success: true,
            response,
            conversation_history,
        }
    }
}

impl IntoResponse for SuccessEnvelope {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::OK, Json(self)).into_response();
        apply_response_headers(response.headers_mut());
        response
    }
}

/// Failure half of the result envelope. Only a message string crosses the
/// boundary; no stack traces or typed error detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEnvelope {
    pub success: bool,
    pub error: String,
}

impl FailureEnvelope {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}
