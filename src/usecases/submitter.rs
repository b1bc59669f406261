//! Market Submitter - Sequential createMarket Transactions
//!
//! Submits proposals in order, one confirmed transaction at a time.
//! The first failure is logged and returned; later proposals are
//! never submitted.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{error, info, instrument};

use crate::domain::proposal::ProposedMarket;
use crate::ports::market_registry::{MarketCreation, MarketRegistry};

/// Creates proposed markets on-chain.
pub struct MarketSubmitter<R: MarketRegistry> {
  registry: Arc<R>,
}

impl<R: MarketRegistry> MarketSubmitter<R> {
  pub fn new(registry: Arc<R>) -> Self {
    Self { registry }
  }

  /// Submit every proposal, waiting for each receipt before the next.
  #[instrument(skip_all, fields(proposals = proposals.len()))]
  pub async fn submit_all(&self, proposals: &[ProposedMarket]) -> Result<Vec<MarketCreation>> {
    let mut created = Vec::with_capacity(proposals.len());

    for (position, proposal) in proposals.iter().enumerate() {
      match self.submit(proposal).await {
        Ok(creation) => created.push(creation),
        Err(e) => {
          error!(
            position,
            title = %proposal.title,
            error = %format!("{e:#}"),
            "Failed to create market"
          );
          return Err(e);
        }
      }
    }

    Ok(created)
  }

  async fn submit(&self, proposal: &ProposedMarket) -> Result<MarketCreation> {
    let market = proposal.to_new_market(Utc::now())?;

    info!(
      title = %market.title,
      description = %market.description,
      resolve_timestamp = market.resolve_timestamp,
      "Creating market"
    );

    let creation = self.registry.create_market(&market).await?;
    info!(
      tx_hash = %creation.tx_hash,
      block_number = ?creation.block_number,
      "Market created successfully"
    );
    Ok(creation)
  }
}
