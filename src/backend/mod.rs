//! Backend adapter abstraction layer.
//!
//! This module provides the [`BackendAdapter`] trait and the two adapters that
//! implement the downstream wire contracts: a structured chat-messages API and
//! a raw-prompt-concatenation API. Both are normalized to "produce generated
//! text from a conversation history" so the handler never branches on the
//! active variant.

use async_trait::async_trait;

pub mod error;
pub mod factory;
pub mod prompt_text;
pub mod structured;

pub use error::BackendError;
pub use factory::create_adapter;
pub use prompt_text::PromptTextAdapter;
pub use structured::StructuredAdapter;

use crate::conversation::ConversationHistory;

/// Unified interface over the downstream text-generation backend.
///
/// Encapsulates the backend-specific payload construction, the single HTTP
/// POST, and response validation. Object-safe and used as
/// `Arc<dyn BackendAdapter>` in application state.
///
/// # Guarantees
///
/// Implementations issue exactly one outbound call per invocation with a
/// bounded wait and no retries. No partial-request state survives a failure.
#[async_trait]
pub trait BackendAdapter: Send + Sync + 'static {
    /// Wire-contract name for logging ("structured" or "prompt_text").
    fn name(&self) -> &'static str;

    /// Generate a reply for a history ending in the newest user turn.
    ///
    /// # Returns
    ///
    /// - `Ok(String)` with the non-empty generated text
    /// - `Err(BackendError::Upstream)` if the backend returned non-2xx
    /// - `Err(BackendError::Network)` if the connection failed
    /// - `Err(BackendError::Timeout)` if the bounded wait expired
    /// - `Err(BackendError::InvalidResponse)` if the reply doesn't decode
    /// - `Err(BackendError::EmptyReply)` if the success field is missing/empty
    async fn generate(&self, history: &ConversationHistory) -> Result<String, BackendError>;
}
