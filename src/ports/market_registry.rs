//! Market Registry Port - Prediction Market Contract Interface
//!
//! Defines the trait for reading and creating markets on the
//! prediction-market contract. Implemented with alloy-rs.

use async_trait::async_trait;

use crate::domain::market::{Market, NewMarket};

/// Result of a confirmed `createMarket` transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketCreation {
  /// Transaction hash.
  pub tx_hash: String,
  /// Block the transaction was mined in, when the node reports it.
  pub block_number: Option<u64>,
}

/// Trait for on-chain market contract interactions.
///
/// Every call is a single request; implementors never retry.
#[async_trait]
pub trait MarketRegistry: Send + Sync + 'static {
  /// Total number of markets ever created (`marketCounter()`).
  async fn market_count(&self) -> anyhow::Result<u64>;

  /// Read the market stored at `index` (`markets(index)`).
  async fn market(&self, index: u64) -> anyhow::Result<Market>;

  /// Submit a signed `createMarket` transaction and wait for its receipt.
  ///
  /// A reverted receipt is an error.
  async fn create_market(&self, market: &NewMarket) -> anyhow::Result<MarketCreation>;
}
