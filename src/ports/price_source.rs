//! Price Source Port - Spot Price Interface
//!
//! Defines the trait for fetching current USD prices for the
//! fixed coin universe in one request.

use async_trait::async_trait;

use crate::domain::price::PriceQuote;

/// Trait for spot price providers.
#[async_trait]
pub trait PriceSource: Send + Sync + 'static {
  /// Fetch a USD price for every coin in `Coin::ALL`.
  ///
  /// Missing or non-positive prices are errors; no defaults are filled in.
  async fn fetch_prices(&self) -> anyhow::Result<PriceQuote>;
}
