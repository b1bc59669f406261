//! Market Proposer - LLM-generated Market Ideas
//!
//! Builds the prompt from current prices, asks the completion service
//! for a JSON array of markets, and parses the reply. An unparseable
//! reply is logged and yields no proposals; individual bad entries are
//! dropped with a warning.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, instrument, warn};

use crate::domain::price::PriceQuote;
use crate::domain::prompt::market_prompt;
use crate::domain::proposal::{parse_proposals, ProposedMarket};
use crate::ports::completion::CompletionService;

/// Asks the completion service for new markets.
pub struct MarketProposer<C: CompletionService> {
  completion: Arc<C>,
  /// Markets requested per run.
  count: usize,
  /// Upper bound on resolution time, in hours.
  horizon_hours: u32,
}

impl<C: CompletionService> MarketProposer<C> {
  pub fn new(completion: Arc<C>, count: usize, horizon_hours: u32) -> Self {
    Self {
      completion,
      count,
      horizon_hours,
    }
  }

  /// Request and parse market proposals for the given prices.
  ///
  /// Completion transport errors propagate; parse failures do not.
  #[instrument(skip_all, fields(count = self.count))]
  pub async fn propose(&self, prices: &PriceQuote) -> Result<Vec<ProposedMarket>> {
    let prompt = market_prompt(prices, self.count, self.horizon_hours);
    let reply = self.completion.complete(&prompt).await?;

    let parsed = match parse_proposals(&reply) {
      Ok(parsed) => parsed,
      Err(e) => {
        error!(error = %e, raw = %reply, "Failed to parse completion reply");
        return Ok(Vec::new());
      }
    };

    for (index, reason) in &parsed.rejected {
      warn!(index, reason = %reason, "Dropping invalid proposal");
    }

    info!(
      accepted = parsed.markets.len(),
      rejected = parsed.rejected.len(),
      "Generated markets"
    );
    Ok(parsed.markets)
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;
  use std::sync::Mutex;

  use async_trait::async_trait;
  use rust_decimal_macros::dec;

  use super::*;
  use crate::domain::price::Coin;

  struct CannedCompletion {
    reply: String,
    prompts: Mutex<Vec<String>>,
  }

  #[async_trait]
  impl CompletionService for CannedCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
      self.prompts.lock().unwrap().push(prompt.to_string());
      Ok(self.reply.clone())
    }
  }

  fn proposer(reply: &str) -> (Arc<CannedCompletion>, MarketProposer<CannedCompletion>) {
    let completion = Arc::new(CannedCompletion {
      reply: reply.to_string(),
      prompts: Mutex::new(Vec::new()),
    });
    (Arc::clone(&completion), MarketProposer::new(completion, 5, 8))
  }

  fn prices() -> PriceQuote {
    PriceQuote::from_prices(BTreeMap::from([
      (Coin::Bitcoin, dec!(50000)),
      (Coin::Ethereum, dec!(3000)),
      (Coin::Solana, dec!(150)),
      (Coin::Near, dec!(5)),
    ]))
    .unwrap()
  }

  #[tokio::test]
  async fn test_fenced_reply_is_parsed() {
    let (completion, proposer) = proposer(
      "```json\n[{\"title\": \"BTC > 51k?\", \"description\": \"d\", \"resolve_in_hours\": 8}]\n```",
    );
    let markets = proposer.propose(&prices()).await.unwrap();
    assert_eq!(markets.len(), 1);
    assert_eq!(markets[0].title, "BTC > 51k?");

    let prompts = completion.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("BTC: $50000"));
  }

  #[tokio::test]
  async fn test_unparseable_reply_yields_nothing() {
    let (_, proposer) = proposer("I'm sorry, I can't help with that.");
    assert!(proposer.propose(&prices()).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_transport_error_propagates() {
    struct Down;

    #[async_trait]
    impl CompletionService for Down {
      async fn complete(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("connection refused")
      }
    }

    let proposer = MarketProposer::new(Arc::new(Down), 5, 8);
    assert!(proposer.propose(&prices()).await.is_err());
  }
}
