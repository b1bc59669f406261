//! Market proposals returned by the language model.
//!
//! Turning raw completion text into proposals happens in three steps:
//! 1. [`strip_code_fence`] unwraps a Markdown fenced block if present
//! 2. [`parse_proposals`] requires a JSON array at the top level
//! 3. each entry is decoded and validated on its own; bad entries are
//!    reported back instead of sinking the whole batch

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::SeederError;
use super::market::NewMarket;

const FENCE: &str = "```";
const MS_PER_HOUR: f64 = 3_600_000.0;

/// A market idea produced by the completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedMarket {
    pub title: String,
    pub description: String,
    /// Hours from submission until the market may resolve.
    pub resolve_in_hours: f64,
}

/// Why a single proposal entry was dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidProposal {
    #[error("entry does not match the proposal shape: {0}")]
    Malformed(String),
    #[error("title is empty")]
    EmptyTitle,
    #[error("description is empty")]
    EmptyDescription,
    #[error("resolve_in_hours must be positive and finite, got {0}")]
    BadHorizon(f64),
}

impl ProposedMarket {
    pub fn validate(&self) -> Result<(), InvalidProposal> {
        if self.title.trim().is_empty() {
            return Err(InvalidProposal::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(InvalidProposal::EmptyDescription);
        }
        if !self.resolve_in_hours.is_finite() || self.resolve_in_hours <= 0.0 {
            return Err(InvalidProposal::BadHorizon(self.resolve_in_hours));
        }
        Ok(())
    }

    /// Build the on-chain payload, resolving `resolve_in_hours` against `now`.
    pub fn to_new_market(&self, now: DateTime<Utc>) -> Result<NewMarket, SeederError> {
        Ok(NewMarket {
            title: self.title.clone(),
            description: self.description.clone(),
            resolve_timestamp: resolve_timestamp(now, self.resolve_in_hours)?,
        })
    }
}

/// Unix seconds `resolve_in_hours` after `now`.
///
/// The offset is truncated to whole milliseconds before flooring to
/// seconds. Fails unless the result is strictly after `now`'s second.
pub fn resolve_timestamp(now: DateTime<Utc>, resolve_in_hours: f64) -> Result<u64, SeederError> {
    let now_ms = now.timestamp_millis();
    let offset_ms = (resolve_in_hours * MS_PER_HOUR).trunc() as i64;
    let resolve_secs = now_ms.saturating_add(offset_ms).div_euclid(1000);
    let now_secs = now.timestamp();

    if resolve_secs <= now_secs {
        return Err(SeederError::ResolveNotInFuture {
            resolve_timestamp: resolve_secs.max(0) as u64,
            now: now_secs,
        });
    }
    Ok(resolve_secs as u64)
}

/// Unwrap a Markdown fenced code block, with or without a language tag.
///
/// Text without a fence is returned trimmed and otherwise untouched.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(open) = text.find(FENCE) else {
        return text;
    };

    let body = text[open + FENCE.len()..].trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = match body.rfind(FENCE) {
        Some(close) => &body[..close],
        None => body,
    };
    body.trim()
}

/// Outcome of parsing a completion that was a JSON array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedProposals {
    /// Valid entries, in the order the model returned them.
    pub markets: Vec<ProposedMarket>,
    /// `(index, reason)` for every dropped entry.
    pub rejected: Vec<(usize, InvalidProposal)>,
}

/// Parse completion text into proposals.
///
/// Errors only when the cleaned text is not a JSON array at all.
pub fn parse_proposals(text: &str) -> Result<ParsedProposals, serde_json::Error> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(strip_code_fence(text))?;

    let mut parsed = ParsedProposals::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let checked = serde_json::from_value::<ProposedMarket>(entry)
            .map_err(|e| InvalidProposal::Malformed(e.to_string()))
            .and_then(|market| market.validate().map(|()| market));

        match checked {
            Ok(market) => parsed.markets.push(market),
            Err(reason) => parsed.rejected.push((index, reason)),
        }
    }
    Ok(parsed)
}
