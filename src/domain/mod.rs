//! Domain layer - Core seeding rules and models.
//!
//! Pure logic only: no I/O and no logging. Everything here is
//! testable in isolation and consumed by the use cases.

pub mod error;
pub mod market;
pub mod price;
pub mod prompt;
pub mod proposal;

// Re-export core types for convenience
pub use error::SeederError;
pub use market::{Gate, Market, NewMarket};
pub use price::{Coin, PriceQuote};
pub use proposal::{ParsedProposals, ProposedMarket};
