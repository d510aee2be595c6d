//! Adapter factory for creating BackendAdapter trait objects from configuration.

use super::{BackendAdapter, PromptTextAdapter, StructuredAdapter};
use crate::config::{BackendConfig, BackendVariant, GenerationConfig};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Create an adapter for the configured backend variant.
///
/// Resolved once at process start; the returned trait object is stored in
/// application state and shared across invocations.
///
/// # Examples
///
/// ```
/// use relay::backend::create_adapter;
/// use relay::config::{BackendConfig, BackendVariant, GenerationConfig};
/// use reqwest::Client;
/// use std::sync::Arc;
///
/// let config = BackendConfig {
///     url: "http://localhost:9000/generate".to_string(),
///     variant: BackendVariant::Structured,
///     request_timeout_seconds: 30,
/// };
/// let adapter = create_adapter(&config, GenerationConfig::default(), Arc::new(Client::new()));
/// assert_eq!(adapter.name(), "structured");
/// ```
pub fn create_adapter(
    config: &BackendConfig,
    generation: GenerationConfig,
    client: Arc<Client>,
) -> Arc<dyn BackendAdapter> {
    let timeout = Duration::from_secs(config.request_timeout_seconds);
    match config.variant {
        BackendVariant::Structured => Arc::new(StructuredAdapter::new(
            config.url.clone(),
            client,
            generation,
            timeout,
        )),
        BackendVariant::PromptText => Arc::new(PromptTextAdapter::new(
            config.url.clone(),
            client,
            generation,
            timeout,
        )),
    }
}
