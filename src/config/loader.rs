//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SEEDER_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Resolve and load the configuration for this process.
///
/// An explicit `SEEDER_CONFIG` path must exist. Without it,
/// `config.toml` is used when present and defaults otherwise.
pub fn load() -> Result<AppConfig> {
  match std::env::var(CONFIG_PATH_ENV) {
    Ok(path) => load_config(&path),
    Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
    Err(_) => {
      let config = AppConfig::default();
      validate_config(&config)?;
      Ok(config)
    }
  }
}

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    path = %path.display(),
    threshold = config.gate.active_threshold,
    window = config.gate.recent_window,
    model = %config.proposals.model,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  // Gate validation
  anyhow::ensure!(
    config.gate.active_threshold > 0,
    "gate.active_threshold must be positive"
  );
  anyhow::ensure!(
    config.gate.recent_window > 0,
    "gate.recent_window must be positive"
  );

  // Proposal validation
  anyhow::ensure!(
    !config.proposals.model.trim().is_empty(),
    "proposals.model must not be empty"
  );
  anyhow::ensure!(
    (0.0..=2.0).contains(&config.proposals.temperature),
    "proposals.temperature must be in [0, 2], got {}",
    config.proposals.temperature
  );
  anyhow::ensure!(config.proposals.count > 0, "proposals.count must be positive");
  anyhow::ensure!(
    config.proposals.horizon_hours > 0,
    "proposals.horizon_hours must be positive"
  );

  // API validation
  anyhow::ensure!(
    !config.api.price_url.is_empty(),
    "Price API URL must not be empty"
  );
  anyhow::ensure!(
    !config.api.completion_url.is_empty(),
    "Completion API URL must not be empty"
  );
  anyhow::ensure!(
    config.api.timeout_seconds > 0,
    "api.timeout_seconds must be positive"
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_empty_file_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.gate.active_threshold, 5);
    assert_eq!(config.gate.recent_window, 20);
    assert_eq!(config.proposals.model, "gpt-4o");
    assert_eq!(config.proposals.temperature, 0.7);
    assert_eq!(config.proposals.count, 5);
    assert_eq!(config.proposals.horizon_hours, 8);
    assert_eq!(config.api.timeout_seconds, 30);
    assert!(config.api.expected_chain_id.is_none());
    assert!(!config.bot.dry_run);
  }

  #[test]
  fn test_partial_override() {
    let config = parse_config(
      r#"
      [bot]
      dry_run = true

      [gate]
      active_threshold = 3

      [api]
      expected_chain_id = 11155111
      "#,
    )
    .unwrap();
    assert!(config.bot.dry_run);
    assert_eq!(config.gate.active_threshold, 3);
    assert_eq!(config.gate.recent_window, 20);
    assert_eq!(config.api.expected_chain_id, Some(11155111));
  }

  #[test]
  fn test_rejects_zero_threshold() {
    let err = parse_config("[gate]\nactive_threshold = 0\n").unwrap_err();
    assert!(format!("{err:#}").contains("active_threshold"));
  }

  #[test]
  fn test_rejects_out_of_range_temperature() {
    assert!(parse_config("[proposals]\ntemperature = 3.5\n").is_err());
  }
}
