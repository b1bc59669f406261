//! Coin universe and USD price quotes.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SeederError;

/// Coins the seeder proposes markets about.
///
/// Declaration order is the order prices appear in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Coin {
    Bitcoin,
    Ethereum,
    Solana,
    Near,
}

impl Coin {
    /// Every supported coin, in prompt order.
    pub const ALL: [Coin; 4] = [Coin::Bitcoin, Coin::Ethereum, Coin::Solana, Coin::Near];

    /// Identifier used by the price API (`ids=` query parameter).
    pub fn api_id(self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Ethereum => "ethereum",
            Self::Solana => "solana",
            Self::Near => "near",
        }
    }

    /// Ticker symbol shown to the language model.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Bitcoin => "BTC",
            Self::Ethereum => "ETH",
            Self::Solana => "SOL",
            Self::Near => "NEAR",
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Current USD price for every coin in [`Coin::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    prices: BTreeMap<Coin, Decimal>,
}

impl PriceQuote {
    /// Build a quote, requiring a positive price for every supported coin.
    pub fn from_prices(prices: BTreeMap<Coin, Decimal>) -> Result<Self, SeederError> {
        for coin in Coin::ALL {
            let price = prices.get(&coin).ok_or(SeederError::MissingPrice(coin))?;
            if *price <= Decimal::ZERO {
                return Err(SeederError::InvalidPrice {
                    coin,
                    price: price.to_string(),
                });
            }
        }
        Ok(Self { prices })
    }

    /// Price for one coin.
    pub fn get(&self, coin: Coin) -> Option<Decimal> {
        self.prices.get(&coin).copied()
    }

    /// `(symbol, price)` pairs in prompt order.
    pub fn by_symbol(&self) -> impl Iterator<Item = (&'static str, Decimal)> + '_ {
        self.prices.iter().map(|(coin, price)| (coin.symbol(), *price))
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (symbol, price) in self.by_symbol() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}={price}")?;
            first = false;
        }
        Ok(())
    }
}
