//! Environment Secrets - RPC, Contract and API Credentials
//!
//! Loaded once at startup from environment variables (a `.env` file
//! is honoured by `main`). Every value is required and parsed up
//! front so a misconfigured deployment fails before any network call.

use std::fmt;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use reqwest::Url;

pub const RPC_URL_ENV: &str = "RPC_URL";
pub const CONTRACT_ADDRESS_ENV: &str = "CONTRACT_ADDRESS";
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Credentials and addresses the seeder cannot run without.
///
/// `Debug` never prints the signing key or the API key.
#[derive(Clone)]
pub struct Secrets {
  /// JSON-RPC endpoint of the chain node.
  pub rpc_url: Url,
  /// Prediction-market contract.
  pub contract_address: Address,
  /// Identity that signs `createMarket` transactions.
  pub signer: PrivateKeySigner,
  /// Bearer token for the completion service.
  pub completion_api_key: String,
}

impl Secrets {
  /// Load all secrets from the process environment.
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Load all secrets through `lookup`, which maps a variable name to its value.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let require = |name: &str| -> Result<String> {
      lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .with_context(|| format!("{name} not set"))
    };

    let rpc_url: Url = require(RPC_URL_ENV)?
      .parse()
      .with_context(|| format!("Invalid {RPC_URL_ENV}"))?;
    let contract_address: Address = require(CONTRACT_ADDRESS_ENV)?
      .parse()
      .with_context(|| format!("Invalid {CONTRACT_ADDRESS_ENV}"))?;
    let signer: PrivateKeySigner = require(PRIVATE_KEY_ENV)?
      .parse()
      .with_context(|| format!("Invalid {PRIVATE_KEY_ENV}"))?;
    let completion_api_key = require(OPENAI_API_KEY_ENV)?;

    Ok(Self {
      rpc_url,
      contract_address,
      signer,
      completion_api_key,
    })
  }

  /// Address derived from the signing key.
  pub fn signer_address(&self) -> Address {
    self.signer.address()
  }
}

impl fmt::Debug for Secrets {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Secrets")
      .field("rpc_url", &self.rpc_url.host_str())
      .field("contract_address", &self.contract_address)
      .field("signer", &self.signer.address())
      .field("completion_api_key", &"<redacted>")
      .finish()
  }
}
