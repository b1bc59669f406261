//! Chat Completion Client - OpenAI-compatible Endpoint
//!
//! Implements the `CompletionService` port: one POST with bearer auth,
//! a single user message, and the first choice's text as the result.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::domain::error::SeederError;
use crate::ports::completion::CompletionService;

use super::client::ensure_success;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Settings for the chat-completion request.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
  /// Full chat-completions URL.
  pub url: String,
  /// Model identifier.
  pub model: String,
  /// Sampling temperature.
  pub temperature: f64,
}

/// OpenAI-compatible chat-completion client.
pub struct OpenAiClient {
  http: Client,
  api_key: String,
  config: CompletionConfig,
}

impl OpenAiClient {
  pub fn new(http: Client, api_key: String, config: CompletionConfig) -> Self {
    Self {
      http,
      api_key,
      config,
    }
  }
}

#[async_trait]
impl CompletionService for OpenAiClient {
  #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
  async fn complete(&self, prompt: &str) -> Result<String> {
    let body = ChatCompletionRequest {
      model: &self.config.model,
      messages: vec![ChatMessage {
        role: "user",
        content: prompt,
      }],
      temperature: self.config.temperature,
    };

    let response = self
      .http
      .post(&self.config.url)
      .bearer_auth(&self.api_key)
      .json(&body)
      .send()
      .await
      .context("Completion request failed")?;

    let response: ChatCompletionResponse = ensure_success(response, "Completion")
      .await?
      .json()
      .await
      .context("Failed to decode completion response")?;

    let content = response.first_content().ok_or(SeederError::EmptyCompletion)?;
    debug!(reply_len = content.len(), "Completion received");
    Ok(content)
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use serde_json::json;
  use wiremock::matchers::{body_json, header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::adapters::api::client::build_http_client;

  fn client(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new(
      build_http_client(Duration::from_secs(5)).unwrap(),
      "sk-test".to_string(),
      CompletionConfig {
        url: format!("{}/v1/chat/completions", server.uri()),
        model: "gpt-4o".to_string(),
        temperature: 0.7,
      },
    )
  }

  #[tokio::test]
  async fn test_sends_single_user_message_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .and(header("authorization", "Bearer sk-test"))
      .and(body_json(json!({
        "model": "gpt-4o",
        "messages": [{"role": "user", "content": "propose markets"}],
        "temperature": 0.7
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{"message": {"role": "assistant", "content": "```json\n[]\n```"}}]
      })))
      .expect(1)
      .mount(&server)
      .await;

    let text = client(&server).complete("propose markets").await.unwrap();
    assert_eq!(text, "```json\n[]\n```");
  }

  #[tokio::test]
  async fn test_empty_choices_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
      .mount(&server)
      .await;

    let err = client(&server).complete("p").await.unwrap_err();
    assert_eq!(
      err.downcast_ref::<SeederError>(),
      Some(&SeederError::EmptyCompletion)
    );
  }

  #[tokio::test]
  async fn test_http_error_is_propagated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
      .expect(1)
      .mount(&server)
      .await;

    let err = client(&server).complete("p").await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("401"), "unexpected error: {msg}");
    assert!(msg.contains("invalid api key"));
  }
}
