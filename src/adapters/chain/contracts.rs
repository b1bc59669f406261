//! Prediction Market Contract - alloy-rs Bindings
//!
//! Implements the `MarketRegistry` port against the market contract:
//! `marketCounter()` and `markets(i)` as `eth_call`s, `createMarket`
//! as a signed transaction awaited until its receipt. The contract
//! address comes from the environment and is checked for deployed
//! code at startup.

use std::sync::Arc;

use alloy::network::ReceiptResponse;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::domain::error::SeederError;
use crate::domain::market::{Market, NewMarket};
use crate::ports::market_registry::{MarketCreation, MarketRegistry};

use super::provider::ChainProvider;

sol! {
    /// On-chain market record as returned by `markets(uint256)`.
    struct MarketData {
        uint256 id;
        string title;
        string description;
        uint256 resolveTimestamp;
        bool resolved;
    }

    interface IPredictionMarket {
        function marketCounter() external view returns (uint256);
        function markets(uint256 index) external view returns (MarketData memory);
        function createMarket(string memory title, string memory description, uint256 resolveTimestamp) external returns (uint256);
    }
}

/// Market contract client implementing [`MarketRegistry`].
pub struct MarketContract {
    /// Shared signing provider.
    provider: Arc<ChainProvider>,
    /// Contract address from `CONTRACT_ADDRESS`.
    address: Address,
}

impl MarketContract {
    /// Bind to the contract, failing if no code is deployed at `address`.
    #[instrument(skip(provider))]
    pub async fn new(provider: Arc<ChainProvider>, address: Address) -> Result<Self> {
        let code = provider
            .inner()
            .get_code_at(address)
            .await
            .context("Failed to query contract code")?;

        if code.is_empty() {
            bail!("Market contract at {address} has no deployed code, check CONTRACT_ADDRESS");
        }

        info!(address = %address, chain_id = provider.chain_id(), "Market contract validated on-chain");
        Ok(Self { provider, address })
    }

    fn request(&self, calldata: Vec<u8>) -> TransactionRequest {
        TransactionRequest::default()
            .to(self.address)
            .input(Bytes::from(calldata).into())
    }

    /// Run a read-only call and decode its return values.
    async fn view<C>(&self, call: C) -> Result<C::Return>
    where
        C: SolCall + Send + Sync,
    {
        let tx = self.request(call.abi_encode());
        let raw = self
            .provider
            .inner()
            .call(&tx)
            .await
            .with_context(|| format!("{} call failed", C::SIGNATURE))?;

        C::abi_decode_returns(&raw, true)
            .with_context(|| format!("Failed to decode {} result", C::SIGNATURE))
    }
}

fn to_u64(value: U256, field: &'static str) -> Result<u64, SeederError> {
    u64::try_from(value).map_err(|_| SeederError::ValueOutOfRange {
        field,
        value: value.to_string(),
    })
}

fn to_market(data: MarketData) -> Result<Market, SeederError> {
    Ok(Market {
        id: to_u64(data.id, "id")?,
        title: data.title,
        description: data.description,
        resolve_timestamp: to_u64(data.resolveTimestamp, "resolveTimestamp")?,
        resolved: data.resolved,
    })
}

#[async_trait]
impl MarketRegistry for MarketContract {
    #[instrument(skip(self))]
    async fn market_count(&self) -> Result<u64> {
        let counter = self.view(IPredictionMarket::marketCounterCall {}).await?._0;
        Ok(to_u64(counter, "marketCounter")?)
    }

    #[instrument(skip(self))]
    async fn market(&self, index: u64) -> Result<Market> {
        let data = self
            .view(IPredictionMarket::marketsCall {
                index: U256::from(index),
            })
            .await?
            ._0;

        let market = to_market(data)?;
        debug!(index, id = market.id, resolved = market.resolved, "Market read");
        Ok(market)
    }

    #[instrument(skip(self, market), fields(title = %market.title, resolve_timestamp = market.resolve_timestamp))]
    async fn create_market(&self, market: &NewMarket) -> Result<MarketCreation> {
        let call = IPredictionMarket::createMarketCall {
            title: market.title.clone(),
            description: market.description.clone(),
            resolveTimestamp: U256::from(market.resolve_timestamp),
        };

        let pending = self
            .provider
            .inner()
            .send_transaction(self.request(call.abi_encode()))
            .await
            .context("createMarket submission failed")?;

        let tx_hash = pending.tx_hash().to_string();
        info!(tx_hash = %tx_hash, from = %self.provider.signer(), "Transaction sent");

        let receipt = pending
            .get_receipt()
            .await
            .with_context(|| format!("Failed to confirm createMarket transaction {tx_hash}"))?;

        if !receipt.status() {
            return Err(SeederError::TransactionReverted { tx_hash }.into());
        }

        Ok(MarketCreation {
            tx_hash,
            block_number: receipt.block_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::keccak256;

    use super::*;

    fn sample(id: U256, resolve: U256) -> MarketData {
        MarketData {
            id,
            title: "ETH above $3k?".to_string(),
            description: "Resolves YES if ETH > $3,000".to_string(),
            resolveTimestamp: resolve,
            resolved: true,
        }
    }

    #[test]
    fn test_selectors_match_signatures() {
        assert_eq!(
            IPredictionMarket::marketCounterCall::SELECTOR,
            keccak256(b"marketCounter()")[..4]
        );
        assert_eq!(
            IPredictionMarket::marketsCall::SELECTOR,
            keccak256(b"markets(uint256)")[..4]
        );
        assert_eq!(
            IPredictionMarket::createMarketCall::SELECTOR,
            keccak256(b"createMarket(string,string,uint256)")[..4]
        );
    }

    #[test]
    fn test_to_market_converts_fields() {
        let market = to_market(sample(U256::from(7), U256::from(1_700_000_000u64))).unwrap();
        assert_eq!(market.id, 7);
        assert_eq!(market.resolve_timestamp, 1_700_000_000);
        assert!(market.resolved);
        assert_eq!(market.title, "ETH above $3k?");
    }

    #[test]
    fn test_to_market_rejects_oversized_values() {
        let err = to_market(sample(U256::from(1), U256::MAX)).unwrap_err();
        assert!(matches!(
            err,
            SeederError::ValueOutOfRange {
                field: "resolveTimestamp",
                ..
            }
        ));
    }

    #[test]
    fn test_create_market_calldata_round_trips() {
        let call = IPredictionMarket::createMarketCall {
            title: "SOL above $150?".to_string(),
            description: "Resolves YES above $150".to_string(),
            resolveTimestamp: U256::from(1_700_028_800u64),
        };
        let decoded =
            IPredictionMarket::createMarketCall::abi_decode(&call.abi_encode(), true).unwrap();
        assert_eq!(decoded.title, call.title);
        assert_eq!(decoded.resolveTimestamp, call.resolveTimestamp);
    }
}
