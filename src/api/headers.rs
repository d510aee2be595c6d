//! Fixed response headers for the relay surface.
//!
//! Every response this gateway produces — success, failure, preflight, and
//! health — carries the same CORS header set, so browser callers behind an
//! API gateway see identical headers on every path.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

const ALLOWED_HEADERS: &str = "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
const ALLOWED_METHODS: &str = "OPTIONS,POST";

/// Inject the fixed header set into a response HeaderMap.
pub fn apply_response_headers(headers: &mut HeaderMap) {
    headers.insert(
        HeaderName::from_static("content-type"),
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-origin"),
        HeaderValue::from_static("*"),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-headers"),
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-methods"),
        HeaderValue::from_static(ALLOWED_METHODS),
    );
}
