//! Structured-variant backend adapter.

use super::{BackendAdapter, BackendError};
use crate::config::GenerationConfig;
use crate::conversation::{ConversationHistory, Turn};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Adapter for backends that accept a role-tagged message list.
///
/// Wire contract:
/// - Request: `{ "messages": [{"role","content"},...], "config": {"max_tokens","temperature","top_p"} }`
/// - Response: `{ "response": "<generated text>" }`
pub struct StructuredAdapter {
    /// Full endpoint URL the request is POSTed to
    url: String,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
    /// Fixed generation parameters for this deployment
    generation: GenerationConfig,
    /// Bounded wait on the single outbound call
    timeout: Duration,
}

impl StructuredAdapter {
    pub fn new(
        url: String,
        client: Arc<Client>,
        generation: GenerationConfig,
        timeout: Duration,
    ) -> Self {
        Self {
            url,
            client,
            generation,
            timeout,
        }
    }
}

/// Outbound request body
#[derive(Serialize)]
struct StructuredRequest<'a> {
    messages: &'a [Turn],
    config: StructuredParams,
}

/// Generation parameters as the structured contract names them
#[derive(Serialize)]
struct StructuredParams {
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

/// Backend reply; the text field must be present and non-empty
#[derive(Deserialize)]
struct StructuredResponse {
    #[serde(default)]
    response: Option<String>,
}

#[async_trait]
impl BackendAdapter for StructuredAdapter {
    fn name(&self) -> &'static str {
        "structured"
    }

    async fn generate(&self, history: &ConversationHistory) -> Result<String, BackendError> {
        let payload = StructuredRequest {
            messages: history.turns(),
            config: StructuredParams {
                max_tokens: self.generation.max_output_tokens,
                temperature: self.generation.temperature,
                top_p: self.generation.top_p,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout(self.timeout.as_secs())
                } else {
                    BackendError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BackendError::Upstream {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let reply: StructuredResponse = response.json().await.map_err(|e| {
            BackendError::InvalidResponse(format!("Failed to parse backend response: {}", e))
        })?;

        match reply.response {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(BackendError::EmptyReply("response")),
        }
    }
}
