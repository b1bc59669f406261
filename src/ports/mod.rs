//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer
//! requires from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `MarketRegistry`: On-chain market contract (read + create)
//! - `PriceSource`: Spot USD prices for the coin universe
//! - `CompletionService`: Single-prompt text completion

pub mod completion;
pub mod market_registry;
pub mod price_source;
