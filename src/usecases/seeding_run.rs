//! Seeding Run - Single-pass Pipeline Orchestration
//!
//! count active → gate → fetch prices → propose → submit.
//! Each stage's output is the only input to the next; any error
//! from counting, pricing, completion transport or submission
//! aborts the run.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::domain::market::Gate;
use crate::ports::completion::CompletionService;
use crate::ports::market_registry::MarketRegistry;
use crate::ports::price_source::PriceSource;

use super::market_counter::ActiveMarketCounter;
use super::proposer::MarketProposer;
use super::submitter::MarketSubmitter;

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
  /// Enough markets were active; nothing downstream was called.
  Skipped { active: u64 },
  /// Proposals were requested and `created` of them landed on-chain.
  Completed {
    active: u64,
    proposed: usize,
    created: usize,
  },
}

/// Settings that shape a run.
#[derive(Debug, Clone)]
pub struct RunSettings {
  pub gate: Gate,
  /// Number of most recent markets inspected.
  pub recent_window: u64,
  /// Markets requested from the completion service.
  pub proposal_count: usize,
  pub horizon_hours: u32,
  /// Stop after proposing; submit nothing.
  pub dry_run: bool,
}

impl RunSettings {
  pub fn from_config(config: &AppConfig) -> Self {
    Self {
      gate: Gate::new(config.gate.active_threshold),
      recent_window: config.gate.recent_window,
      proposal_count: config.proposals.count,
      horizon_hours: config.proposals.horizon_hours,
      dry_run: config.bot.dry_run,
    }
  }
}

/// One pass of the seeding pipeline.
pub struct SeedingRun<R: MarketRegistry, P: PriceSource, C: CompletionService> {
  counter: ActiveMarketCounter<R>,
  gate: Gate,
  prices: Arc<P>,
  proposer: MarketProposer<C>,
  submitter: MarketSubmitter<R>,
  dry_run: bool,
}

impl<R: MarketRegistry, P: PriceSource, C: CompletionService> SeedingRun<R, P, C> {
  pub fn new(registry: Arc<R>, prices: Arc<P>, completion: Arc<C>, settings: RunSettings) -> Self {
    Self {
      counter: ActiveMarketCounter::new(Arc::clone(&registry), settings.recent_window),
      gate: settings.gate,
      prices,
      proposer: MarketProposer::new(
        completion,
        settings.proposal_count,
        settings.horizon_hours,
      ),
      submitter: MarketSubmitter::new(registry),
      dry_run: settings.dry_run,
    }
  }

  /// Execute the pipeline once.
  #[instrument(skip(self), fields(dry_run = self.dry_run))]
  pub async fn execute(&self) -> Result<RunOutcome> {
    let active = self.counter.count_active().await?;
    info!(active, "Active on-chain markets");

    if !self.gate.should_proceed(active) {
      info!(
        active,
        threshold = self.gate.threshold(),
        "Too many active markets. Skipping..."
      );
      return Ok(RunOutcome::Skipped { active });
    }

    let prices = self.prices.fetch_prices().await?;
    let proposals = self.proposer.propose(&prices).await?;
    let proposed = proposals.len();

    if self.dry_run {
      for proposal in &proposals {
        info!(
          title = %proposal.title,
          description = %proposal.description,
          resolve_in_hours = proposal.resolve_in_hours,
          "Dry run: would create market"
        );
      }
      warn!(proposed, "Dry-run mode, no transactions submitted");
      return Ok(RunOutcome::Completed {
        active,
        proposed,
        created: 0,
      });
    }

    let created = self.submitter.submit_all(&proposals).await?.len();
    info!(proposed, created, "Seeding run complete");

    Ok(RunOutcome::Completed {
      active,
      proposed,
      created,
    })
  }
}
