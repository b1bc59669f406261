//! Chain Adapters - Prediction Market Contract Access
//!
//! Provides on-chain access via alloy-rs 0.9 for:
//! - RPC provider management with a signing wallet
//! - Market contract reads and `createMarket` submission

pub mod contracts;
pub mod provider;

pub use contracts::MarketContract;
pub use provider::ChainProvider;
