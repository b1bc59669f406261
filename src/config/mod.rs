//! Configuration Module - TOML Tunables and Environment Secrets
//!
//! Non-secret tunables come from `config.toml` (every key has a
//! default, so the file is optional). Endpoint credentials and the
//! signing key come from the environment, optionally via `.env`.
//! Both are built once in `main` and passed down explicitly.

pub mod loader;
pub mod secrets;

use serde::Deserialize;

use crate::domain::market::{DEFAULT_ACTIVE_THRESHOLD, DEFAULT_RECENT_WINDOW};

pub use secrets::Secrets;

/// Top-level seeder configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Identity and run mode.
  #[serde(default)]
  pub bot: BotConfig,
  /// Active-market gate.
  #[serde(default)]
  pub gate: GateConfig,
  /// Completion request and proposal shape.
  #[serde(default)]
  pub proposals: ProposalConfig,
  /// External endpoints.
  #[serde(default)]
  pub api: ApiConfig,
}

/// Bot identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
  /// Human-readable bot name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Propose markets but never submit transactions.
  #[serde(default)]
  pub dry_run: bool,
}

/// Gate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
  /// Seeding stops once this many recent markets are unresolved.
  #[serde(default = "default_active_threshold")]
  pub active_threshold: u64,
  /// Number of most recent markets inspected.
  #[serde(default = "default_recent_window")]
  pub recent_window: u64,
}

/// Completion request configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProposalConfig {
  /// Chat model identifier.
  #[serde(default = "default_model")]
  pub model: String,
  /// Sampling temperature.
  #[serde(default = "default_temperature")]
  pub temperature: f64,
  /// Number of markets requested per run.
  #[serde(default = "default_count")]
  pub count: usize,
  /// Markets must resolve within this many hours.
  #[serde(default = "default_horizon_hours")]
  pub horizon_hours: u32,
}

/// API endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  /// Simple-price endpoint of the quote provider.
  #[serde(default = "default_price_url")]
  pub price_url: String,
  /// Chat-completions endpoint.
  #[serde(default = "default_completion_url")]
  pub completion_url: String,
  /// HTTP request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
  /// When set, the RPC node must report this chain id at startup.
  #[serde(default)]
  pub expected_chain_id: Option<u64>,
}

impl Default for BotConfig {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      dry_run: false,
    }
  }
}

impl Default for GateConfig {
  fn default() -> Self {
    Self {
      active_threshold: default_active_threshold(),
      recent_window: default_recent_window(),
    }
  }
}

impl Default for ProposalConfig {
  fn default() -> Self {
    Self {
      model: default_model(),
      temperature: default_temperature(),
      count: default_count(),
      horizon_hours: default_horizon_hours(),
    }
  }
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      price_url: default_price_url(),
      completion_url: default_completion_url(),
      timeout_seconds: default_timeout(),
      expected_chain_id: None,
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "market-seeder".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_active_threshold() -> u64 {
  DEFAULT_ACTIVE_THRESHOLD
}

fn default_recent_window() -> u64 {
  DEFAULT_RECENT_WINDOW
}

fn default_model() -> String {
  "gpt-4o".to_string()
}

fn default_temperature() -> f64 {
  0.7
}

fn default_count() -> usize {
  5
}

fn default_horizon_hours() -> u32 {
  8
}

fn default_price_url() -> String {
  "https://api.coingecko.com/api/v3/simple/price".to_string()
}

fn default_completion_url() -> String {
  "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_timeout() -> u64 {
  30
}
