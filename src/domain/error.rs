//! Typed data and on-chain errors.
//!
//! Transport failures surface as `anyhow` errors with context from the
//! adapters; everything the seeder itself rejects lands here.

use thiserror::Error;

use super::price::Coin;

/// Errors raised when an external service returns data the seeder
/// cannot use, or when the chain rejects a submission.
#[derive(Debug, Error, PartialEq)]
pub enum SeederError {
    /// The price response did not quote one of the requested coins.
    #[error("price response is missing {0}")]
    MissingPrice(Coin),

    /// A quoted price was zero or negative.
    #[error("price for {coin} must be positive, got {price}")]
    InvalidPrice { coin: Coin, price: String },

    /// The completion response carried no choices or no message content.
    #[error("completion response contained no message content")]
    EmptyCompletion,

    /// A uint256 read from the contract does not fit in 64 bits.
    #[error("on-chain value {field} = {value} does not fit in u64")]
    ValueOutOfRange { field: &'static str, value: String },

    /// A computed resolution time is not strictly after the submission time.
    #[error("resolution timestamp {resolve_timestamp} is not after submission time {now}")]
    ResolveNotInFuture { resolve_timestamp: u64, now: i64 },

    /// The createMarket transaction was mined but reverted.
    #[error("createMarket transaction {tx_hash} reverted")]
    TransactionReverted { tx_hash: String },
}
