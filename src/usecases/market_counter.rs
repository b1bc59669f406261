//! Active Market Counter - Recency-windowed Unresolved Count
//!
//! Reads `marketCounter()`, then the last `min(total, window)` markets
//! one at a time, and counts those not yet resolved. Markets older
//! than the window are never counted.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::domain::market::recent_window;
use crate::ports::market_registry::MarketRegistry;

/// Counts unresolved markets among the most recent ones.
pub struct ActiveMarketCounter<R: MarketRegistry> {
  registry: Arc<R>,
  window: u64,
}

impl<R: MarketRegistry> ActiveMarketCounter<R> {
  pub fn new(registry: Arc<R>, window: u64) -> Self {
    Self { registry, window }
  }

  /// Number of unresolved markets in the recent window.
  ///
  /// Reads are sequential; the first failing read aborts the count.
  #[instrument(skip(self), fields(window = self.window))]
  pub async fn count_active(&self) -> Result<u64> {
    let total = self.registry.market_count().await?;
    let range = recent_window(total, self.window);
    let inspected = range.end - range.start;

    let mut active = 0;
    for index in range {
      let market = self.registry.market(index).await?;
      if market.is_active() {
        active += 1;
      }
      debug!(index, resolved = market.resolved, "Inspected market");
    }

    info!(total, inspected, active, "Counted active on-chain markets");
    Ok(active)
  }
}
