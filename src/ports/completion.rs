//! Completion Port - Language Model Interface
//!
//! Defines the trait for sending one user prompt to a chat-completion
//! service and reading back the text of the first choice.

use async_trait::async_trait;

/// Trait for chat-completion providers.
#[async_trait]
pub trait CompletionService: Send + Sync + 'static {
  /// Send `prompt` as a single user message and return the reply text.
  async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}
