//! Price Feed Adapters - Spot Price Sources
//!
//! - CoinGecko: simple-price REST endpoint, one request per run

pub mod coingecko;

pub use coingecko::CoinGeckoFeed;
