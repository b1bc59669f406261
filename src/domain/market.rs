//! On-chain market entities and the recency gate.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Default number of most recent markets inspected by the gate.
pub const DEFAULT_RECENT_WINDOW: u64 = 20;

/// Default number of active markets at which seeding stops.
pub const DEFAULT_ACTIVE_THRESHOLD: u64 = 5;

/// A market as stored by the contract. Read-only to the seeder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Unix seconds at which the market may be resolved.
    pub resolve_timestamp: u64,
    pub resolved: bool,
}

impl Market {
    pub fn is_active(&self) -> bool {
        !self.resolved
    }
}

/// Payload of a `createMarket` transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMarket {
    pub title: String,
    pub description: String,
    pub resolve_timestamp: u64,
}

/// Indices of the last `min(total, window)` markets.
///
/// Never starts below zero; empty when `total == 0`.
pub fn recent_window(total: u64, window: u64) -> Range<u64> {
    total - total.min(window)..total
}

/// Decides whether a run should go on to propose new markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    threshold: u64,
}

impl Gate {
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// True while fewer than `threshold` recent markets are active.
    pub fn should_proceed(&self, active: u64) -> bool {
        active < self.threshold
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_default_threshold() {
        let gate = Gate::default();
        assert!(gate.should_proceed(0));
        assert!(gate.should_proceed(4));
        assert!(!gate.should_proceed(5));
        assert!(!gate.should_proceed(6));
    }

    #[test]
    fn test_recent_window_bounds() {
        assert_eq!(recent_window(0, 20), 0..0);
        assert_eq!(recent_window(1, 20), 0..1);
        assert_eq!(recent_window(20, 20), 0..20);
        assert_eq!(recent_window(21, 20), 1..21);
        assert_eq!(recent_window(100, 20), 80..100);
    }

    #[test]
    fn test_unresolved_market_is_active() {
        let market = Market {
            id: 3,
            title: "BTC above 60k?".to_string(),
            description: "Resolves YES if BTC trades above $60,000".to_string(),
            resolve_timestamp: 1_700_000_000,
            resolved: false,
        };
        assert!(market.is_active());
    }
}
