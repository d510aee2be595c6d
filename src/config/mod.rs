//! Configuration module for the relay gateway
//!
//! Provides layered configuration loading from files, environment variables,
//! and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`RELAY_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use relay::config::RelayConfig;
//!
//! // Load defaults
//! let config = RelayConfig::default();
//! assert_eq!(config.server.port, 8000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [backend]
//! url = "http://localhost:9000/generate"
//! "#;
//! let config: RelayConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.backend.url, "http://localhost:9000/generate");
//! ```

pub mod backend;
pub mod error;
pub mod generation;
pub mod logging;
pub mod server;

pub use backend::{BackendConfig, BackendVariant};
pub use error::ConfigError;
pub use generation::GenerationConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the relay gateway.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Single downstream backend
    pub backend: BackendConfig,
    /// Fixed generation parameters
    pub generation: GenerationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl RelayConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports RELAY_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("RELAY_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("RELAY_HOST") {
            self.server.host = host;
        }
        if let Ok(url) = std::env::var("RELAY_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Ok(level) = std::env::var("RELAY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("RELAY_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.backend.url.is_empty() {
            return Err(ConfigError::Validation {
                field: "backend.url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }
        if self.backend.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "backend.request_timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::Validation {
                field: "generation.temperature".to_string(),
                message: "temperature must be between 0.0 and 2.0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.generation.top_p) {
            return Err(ConfigError::Validation {
                field: "generation.top_p".to_string(),
                message: "top_p must be between 0.0 and 1.0".to_string(),
            });
        }
        if self.generation.max_output_tokens == 0 {
            return Err(ConfigError::Validation {
                field: "generation.max_output_tokens".to_string(),
                message: "max_output_tokens must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn valid_config() -> RelayConfig {
        let mut config = RelayConfig::default();
        config.backend.url = "http://localhost:9000/generate".to_string();
        config
    }

    #[test]
    fn test_relay_config_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.backend.variant, BackendVariant::Structured);
        assert_eq!(config.generation.max_output_tokens, 512);
    }

    #[test]
    fn test_config_parse_minimal_toml() {
        let toml = r#"
        [backend]
        url = "http://10.0.0.5:9000/generate"
        "#;

        let config: RelayConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.url, "http://10.0.0.5:9000/generate");
        assert_eq!(config.server.port, 8000); // Default
    }

    #[test]
    fn test_config_parse_full_toml() {
        let toml = include_str!("../../relay.example.toml");
        let config: RelayConfig = toml::from_str(toml).unwrap();
        assert!(!config.backend.url.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let config = RelayConfig::load(Some(temp.path())).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_missing_file_error() {
        let result = RelayConfig::load(Some(Path::new("/nonexistent/relay.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_config_load_none_returns_defaults() {
        let config = RelayConfig::load(None).unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_config_env_override_port() {
        std::env::set_var("RELAY_PORT", "9999");
        let config = RelayConfig::default().with_env_overrides();
        std::env::remove_var("RELAY_PORT");

        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn test_config_env_override_backend_url() {
        std::env::set_var("RELAY_BACKEND_URL", "http://tunnel.example/generate");
        let config = RelayConfig::default().with_env_overrides();
        std::env::remove_var("RELAY_BACKEND_URL");

        assert_eq!(config.backend.url, "http://tunnel.example/generate");
    }

    #[test]
    fn test_config_env_invalid_value_ignored() {
        std::env::set_var("RELAY_PORT", "not-a-number");
        let config = RelayConfig::default().with_env_overrides();
        std::env::remove_var("RELAY_PORT");

        // Should keep default, not crash
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_config_validation_empty_url() {
        let config = RelayConfig::default();
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "backend.url"
        ));
    }

    #[test]
    fn test_config_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "server.port"
        ));
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let mut config = valid_config();
        config.backend.request_timeout_seconds = 0;

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field.contains("timeout")
        ));
    }

    #[test]
    fn test_config_validation_temperature_range() {
        let mut config = valid_config();
        config.generation.temperature = 3.5;

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field.contains("temperature")
        ));
    }

    #[test]
    fn test_config_validation_valid() {
        assert!(valid_config().validate().is_ok());
    }
}
