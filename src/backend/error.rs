//! Error types for backend adapter operations.

use thiserror::Error;

/// Errors that can occur while calling the downstream backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The single outbound call exceeded its bounded wait.
    #[error("Request timeout after {0}s")]
    Timeout(u64),

    /// Backend reachable but returned a non-2xx status. Carries the backend's
    /// own status code and response body.
    #[error("Backend error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Backend response body doesn't decode as the expected JSON shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend returned 2xx but the success field is missing or empty.
    #[error("No generated content in backend response (expected non-empty '{0}')")]
    EmptyReply(&'static str),
}
