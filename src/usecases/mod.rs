//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement
//! the seeder's single-pass workflow.
//!
//! Use cases:
//! - `ActiveMarketCounter`: unresolved markets in the recent window
//! - `MarketProposer`: prompt → completion → parsed proposals
//! - `MarketSubmitter`: sequential createMarket transactions
//! - `SeedingRun`: the full gate-guarded pipeline

pub mod market_counter;
pub mod proposer;
pub mod seeding_run;
pub mod submitter;
