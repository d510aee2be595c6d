//! Optional caller identity from authorizer claims.
//!
//! When the gateway sits behind an authorizing proxy, the proxy forwards the
//! verified claims object in the `x-authorizer-claims` header as JSON. The
//! identity is resolved once at the inbound boundary and used only for
//! logging; absence or malformed claims is never an error.

use axum::http::HeaderMap;

/// Header carrying the JSON claims object.
pub const CLAIMS_HEADER: &str = "x-authorizer-claims";

/// Caller identity resolved from authorizer claims.
///
/// Two named lookups are attempted: `email` first, then `cognito:username`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentity {
    pub email: Option<String>,
    pub username: Option<String>,
}

impl CallerIdentity {
    /// Extract identity from request headers. Always succeeds; missing or
    /// unparseable claims yield an anonymous identity.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let claims = headers
            .get(CLAIMS_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok());

        match claims {
            Some(claims) => Self {
                email: claims
                    .get("email")
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
                username: claims
                    .get("cognito:username")
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
            },
            None => Self::default(),
        }
    }

    /// Best identity string for logging: email, then username.
    pub fn resolve(&self) -> Option<&str> {
        self.email.as_deref().or(self.username.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_claims(claims: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CLAIMS_HEADER, HeaderValue::from_str(claims).unwrap());
        headers
    }

    #[test]
    fn test_identity_from_email_claim() {
        let headers = headers_with_claims(r#"{"email":"ada@example.com"}"#);
        let identity = CallerIdentity::from_headers(&headers);

        assert_eq!(identity.resolve(), Some("ada@example.com"));
    }

    #[test]
    fn test_identity_falls_back_to_username() {
        let headers = headers_with_claims(r#"{"cognito:username":"ada"}"#);
        let identity = CallerIdentity::from_headers(&headers);

        assert_eq!(identity.email, None);
        assert_eq!(identity.resolve(), Some("ada"));
    }

    #[test]
    fn test_identity_prefers_email() {
        let headers =
            headers_with_claims(r#"{"email":"ada@example.com","cognito:username":"ada"}"#);
        let identity = CallerIdentity::from_headers(&headers);

        assert_eq!(identity.resolve(), Some("ada@example.com"));
    }

    #[test]
    fn test_identity_absent_header() {
        let identity = CallerIdentity::from_headers(&HeaderMap::new());

        assert_eq!(identity, CallerIdentity::default());
        assert_eq!(identity.resolve(), None);
    }

    #[test]
    fn test_identity_malformed_claims_is_anonymous() {
        let headers = headers_with_claims("not json");
        let identity = CallerIdentity::from_headers(&headers);

        assert_eq!(identity.resolve(), None);
    }

    #[test]
    fn test_identity_non_string_claims_ignored() {
        let headers = headers_with_claims(r#"{"email":42}"#);
        let identity = CallerIdentity::from_headers(&headers);

        assert_eq!(identity.resolve(), None);
    }
}
