//! Chat Completion Request/Response Types
//!
//! Serialization types for the OpenAI-compatible chat-completions
//! endpoint. Only the fields the seeder reads are modelled.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
  /// Model identifier (e.g. "gpt-4o").
  pub model: &'a str,
  /// Conversation; the seeder always sends one user message.
  pub messages: Vec<ChatMessage<'a>>,
  /// Sampling temperature.
  pub temperature: f64,
}

/// One message in the request conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
  /// "user", "system" or "assistant".
  pub role: &'a str,
  /// Message text.
  pub content: &'a str,
}

/// Response from the chat-completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
  /// Generated choices; the seeder reads the first.
  #[serde(default)]
  pub choices: Vec<Choice>,
}

/// A single generated choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
  pub message: ResponseMessage,
}

/// Assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
  /// Reply text. Absent for tool-call replies.
  pub content: Option<String>,
}

impl ChatCompletionResponse {
  /// Text of the first choice, if any.
  pub fn first_content(self) -> Option<String> {
    self.choices.into_iter().next().and_then(|c| c.message.content)
  }
}
