//! Prompt-text-variant backend adapter.

use super::{BackendAdapter, BackendError};
use crate::config::GenerationConfig;
use crate::conversation::ConversationHistory;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Adapter for backends that accept one concatenated prompt string.
///
/// The history is serialized with speaker-label conventions
/// (`"User: ...\nAssistant: ...\n"` plus a trailing cue); the backend never
/// sees explicit role metadata.
///
/// Wire contract:
/// - Request: `{ "prompt", "max_new_tokens", "do_sample", "temperature", "top_p" }`
/// - Response: `{ "generated_text": "<generated text>" }`
pub struct PromptTextAdapter {
    /// Full endpoint URL the request is POSTed to
    url: String,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
    /// Fixed generation parameters for this deployment
    generation: GenerationConfig,
    /// Bounded wait on the single outbound call
    timeout: Duration,
}

impl PromptTextAdapter {
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
struct PromptRequest<'a> {
    prompt: &'a str,
    max_new_tokens: u32,
    do_sample: bool,
    temperature: f32,
    top_p: f32,
}

/// Backend reply; the text field must be present and non-empty
#[derive(Deserialize)]
struct PromptResponse {
    #[serde(default)]
    generated_text: Option<String>,
}

#[async_trait]
impl BackendAdapter for PromptTextAdapter {
    fn name(&self) -> &'static str {
        "prompt_text"
    }

    async fn generate(&self, history: &ConversationHistory) -> Result<String, BackendError> {
        let prompt = history.render_prompt();
        let payload = PromptRequest {
            prompt: &prompt,
            max_new_tokens: self.generation.max_output_tokens,
            do_sample: self.generation.sampling_enabled,
            temperature: self.generation.temperature,
            top_p: self.generation.top_p,
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

        let reply: PromptResponse = response.json().await.map_err(|e| {
            BackendError::InvalidResponse(format!("Failed to parse backend response: {}", e))
        })?;

        match reply.generated_text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(BackendError::EmptyReply("generated_text")),
        }
    }
}
