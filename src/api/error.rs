//! Error classification for the relay surface.
//!
//! Every failure path terminates the invocation with one uniform failure
//! envelope. The classifier is a total mapping from "what went wrong" to
//! `(status, message)`:
//!
//! | Condition | Status | Message |
//! |---|---|---|
//! | Backend returned non-2xx | backend's status | backend's body |
//! | Transport failure (DNS, refused, timeout) | 500 | transport reason |
//! | Anything else (bad input, empty reply, bad JSON) | 500 | error string |

use crate::api::headers::apply_response_headers;
use crate::api::types::FailureEnvelope;
use crate::backend::BackendError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors that terminate a chat invocation.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Inbound body is not valid JSON or is missing `message`.
    #[error("Invalid request body: {0}")]
    InvalidInput(String),

    /// Any failure from the backend adapter.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl GatewayError {
    /// Map this error to the status code and message of its failure envelope.
    ///
    /// Input errors map to 500 rather than 4xx to stay compatible with the
    /// legacy gateway contract this surface replaces.
    pub fn classify(&self) -> (StatusCode, String) {
        match self {
            GatewayError::Backend(BackendError::Upstream { status, message }) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message.clone(),
            ),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();
        let mut response = (status, Json(FailureEnvelope::new(message))).into_response();
        apply_response_headers(response.headers_mut());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_upstream_uses_backend_status_and_body() {
        let err = GatewayError::Backend(BackendError::Upstream {
            status: 503,
            message: "overloaded".to_string(),
        });
        let (status, message) = err.classify();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(message, "overloaded");
    }

    #[test]
    fn test_classify_upstream_invalid_status_falls_back_to_500() {
        let err = GatewayError::Backend(BackendError::Upstream {
            status: 42,
            message: "weird".to_string(),
        });
        let (status, _) = err.classify();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_classify_network_is_500_with_transport_reason() {
        let err = GatewayError::Backend(BackendError::Network("connection refused".to_string()));
        let (status, message) = err.classify();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_classify_timeout_is_500() {
        let err = GatewayError::Backend(BackendError::Timeout(30));
        let (status, message) = err.classify();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("timeout"));
    }

    #[test]
    fn test_classify_invalid_input_is_500() {
        let err = GatewayError::InvalidInput("missing field `message`".to_string());
        let (status, message) = err.classify();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("missing field `message`"));
    }

    #[test]
    fn test_classify_empty_reply_is_500() {
        let err = GatewayError::Backend(BackendError::EmptyReply("response"));
        let (status, _) = err.classify();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_carries_cors_headers() {
        let err = GatewayError::InvalidInput("bad".to_string());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert_eq!(
            response.headers().get("access-control-allow-methods").unwrap(),
            "OPTIONS,POST"
        );
    }
}
