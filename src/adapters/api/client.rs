//! Shared HTTP Client - reqwest Construction and Status Handling
//!
//! Both HTTP adapters use the same client settings. Requests are sent
//! exactly once; a non-2xx status becomes an error carrying the body.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use tracing::warn;

/// Build the HTTP client used by the price and completion adapters.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
  Client::builder()
    .timeout(timeout)
    .pool_max_idle_per_host(2)
    .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
    .build()
    .context("Failed to build HTTP client")
}

/// Pass through 2xx responses; turn anything else into an error.
pub async fn ensure_success(response: Response, service: &str) -> Result<Response> {
  let status = response.status();
  if status.is_success() {
    return Ok(response);
  }

  let body = response.text().await.unwrap_or_default();
  warn!(service, status = %status, "Non-success HTTP response");
  Err(anyhow::anyhow!("{service} API error {status}: {body}"))
}
