//! RPC Provider - alloy-rs 0.9 Connection Management
//!
//! Connects to the chain node with a wallet-signing provider and
//! exposes a shared, type-erased handle for the contract adapter.
//!
//! `on_builtin()` yields a provider over `BoxTransport`, which is what
//! lets us store it as a plain `dyn Provider`.

use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::config::Secrets;

/// Shared signing RPC provider backed by alloy-rs 0.9.
///
/// Nonce, gas and chain id are filled by the recommended fillers;
/// transactions are signed with the configured key.
pub struct ChainProvider {
    /// The alloy provider with wallet filler (type-erased).
    provider: Arc<dyn Provider + Send + Sync>,
    /// Address transactions are sent from.
    signer: Address,
    /// Chain id reported by the node at connect time.
    chain_id: u64,
}

impl ChainProvider {
    /// Connect to the RPC endpoint and read its chain id.
    ///
    /// When `expected_chain_id` is set, a node on any other chain is
    /// rejected before anything is read or signed.
    #[instrument(skip_all)]
    pub async fn connect(secrets: &Secrets, expected_chain_id: Option<u64>) -> Result<Self> {
        let signer = secrets.signer_address();
        let wallet = EthereumWallet::from(secrets.signer.clone());

        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(wallet)
            .on_builtin(secrets.rpc_url.as_str())
            .await
            .context("Failed to connect to RPC endpoint")?;

        let provider: Arc<dyn Provider + Send + Sync> = Arc::new(provider);

        let chain_id = provider
            .get_chain_id()
            .await
            .context("Failed to query chain ID")?;

        if let Some(expected) = expected_chain_id {
            anyhow::ensure!(
                chain_id == expected,
                "Expected chain_id={expected}, RPC node reports {chain_id}"
            );
        }

        info!(chain_id, signer = %signer, "Connected to RPC");

        Ok(Self {
            provider,
            signer,
            chain_id,
        })
    }

    /// Get a shared reference to the alloy provider (type-erased).
    pub fn inner(&self) -> Arc<dyn Provider + Send + Sync> {
        Arc::clone(&self.provider)
    }

    pub fn signer(&self) -> Address {
        self.signer
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }
}
