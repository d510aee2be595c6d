//! Downstream backend configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire contract spoken by the downstream text-generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackendVariant {
    /// Role-tagged message list plus generation parameters; the reply is
    /// expected at the `response` field.
    #[default]
    Structured,
    /// Single concatenated prompt string plus generation parameters; the
    /// reply is expected at the `generated_text` field.
    PromptText,
}

impl fmt::Display for BackendVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendVariant::Structured => write!(f, "structured"),
            BackendVariant::PromptText => write!(f, "prompt_text"),
        }
    }
}

/// Configuration for the single downstream backend.
///
/// The endpoint URL is a deployment-time constant: it is resolved once at
/// process start and handed to the handler through application state, never
/// per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Full endpoint URL the generation request is POSTed to.
    pub url: String,
    /// Which wire contract the backend speaks.
    pub variant: BackendVariant,
    /// Bounded wait on the single outbound call. Expiry is classified as a
    /// transport failure; there is no retry.
    pub request_timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            variant: BackendVariant::Structured,
            request_timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config_defaults() {
        let config = BackendConfig::default();
        assert!(config.url.is_empty());
        assert_eq!(config.variant, BackendVariant::Structured);
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn test_variant_parses_snake_case() {
        let config: BackendConfig =
            toml::from_str("url = \"http://x\"\nvariant = \"prompt_text\"").unwrap();
        assert_eq!(config.variant, BackendVariant::PromptText);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(BackendVariant::Structured.to_string(), "structured");
        assert_eq!(BackendVariant::PromptText.to_string(), "prompt_text");
    }
}
