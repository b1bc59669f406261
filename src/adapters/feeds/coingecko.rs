//! CoinGecko Simple-Price Feed - Spot USD Prices
//!
//! One GET per run against `/simple/price` for the fixed coin universe.
//! The response is decoded into typed structs and every coin must be
//! present with a positive `usd` value.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::adapters::api::client::ensure_success;
use crate::domain::error::SeederError;
use crate::domain::price::{Coin, PriceQuote};
use crate::ports::price_source::PriceSource;

/// Per-coin entry of the simple-price response.
#[derive(Debug, Deserialize)]
struct CoinPrice {
    usd: Option<Decimal>,
}

/// Spot price source backed by the CoinGecko simple-price API.
pub struct CoinGeckoFeed {
    http: Client,
    /// Full simple-price URL (query string is appended per request).
    url: String,
}

impl CoinGeckoFeed {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

/// Map the raw `{ id: { usd } }` body onto the coin universe.
fn to_quote(body: HashMap<String, CoinPrice>) -> Result<PriceQuote, SeederError> {
    let mut prices = BTreeMap::new();
    for coin in Coin::ALL {
        let price = body
            .get(coin.api_id())
            .and_then(|entry| entry.usd)
            .ok_or(SeederError::MissingPrice(coin))?;
        prices.insert(coin, price);
    }
    PriceQuote::from_prices(prices)
}

#[async_trait]
impl PriceSource for CoinGeckoFeed {
    #[instrument(skip(self))]
    async fn fetch_prices(&self) -> Result<PriceQuote> {
        let ids = Coin::ALL.map(Coin::api_id).join(",");

        let response = self
            .http
            .get(&self.url)
            .query(&[("ids", ids.as_str()), ("vs_currencies", "usd")])
            .send()
            .await
            .context("Price request failed")?;

        let body: HashMap<String, CoinPrice> = ensure_success(response, "Price")
            .await?
            .json()
            .await
            .context("Failed to decode price response")?;

        let quote = to_quote(body)?;
        info!(prices = %quote, "Fetched prices");
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::adapters::api::client::build_http_client;

    async fn feed_with_body(body: serde_json::Value) -> (MockServer, CoinGeckoFeed) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/simple/price"))
            .and(query_param("ids", "bitcoin,ethereum,solana,near"))
            .and(query_param("vs_currencies", "usd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let feed = CoinGeckoFeed::new(
            build_http_client(Duration::from_secs(5)).unwrap(),
            format!("{}/api/v3/simple/price", server.uri()),
        );
        (server, feed)
    }

    #[tokio::test]
    async fn test_maps_ids_to_symbols() {
        let (_server, feed) = feed_with_body(json!({
            "bitcoin": {"usd": 50000},
            "ethereum": {"usd": 3000},
            "solana": {"usd": 150},
            "near": {"usd": 5}
        }))
        .await;

        let quote = feed.fetch_prices().await.unwrap();
        assert_eq!(quote.get(Coin::Bitcoin), Some(dec!(50000)));
        assert_eq!(quote.get(Coin::Ethereum), Some(dec!(3000)));
        assert_eq!(quote.get(Coin::Solana), Some(dec!(150)));
        assert_eq!(quote.get(Coin::Near), Some(dec!(5)));

        let symbols: Vec<_> = quote.by_symbol().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "SOL", "NEAR"]);
    }

    #[tokio::test]
    async fn test_missing_coin_is_a_data_error() {
        let (_server, feed) = feed_with_body(json!({
            "bitcoin": {"usd": 50000},
            "ethereum": {"usd": 3000},
            "solana": {"usd": 150}
        }))
        .await;

        let err = feed.fetch_prices().await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<SeederError>(),
            Some(&SeederError::MissingPrice(Coin::Near))
        );
    }

    #[tokio::test]
    async fn test_missing_usd_field_is_a_data_error() {
        let (_server, feed) = feed_with_body(json!({
            "bitcoin": {"usd": 50000},
            "ethereum": {"eur": 2800},
            "solana": {"usd": 150},
            "near": {"usd": 5}
        }))
        .await;

        let err = feed.fetch_prices().await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<SeederError>(),
            Some(&SeederError::MissingPrice(Coin::Ethereum))
        );
    }

    #[tokio::test]
    async fn test_server_error_is_propagated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .expect(1)
            .mount(&server)
            .await;

        let feed = CoinGeckoFeed::new(
            build_http_client(Duration::from_secs(5)).unwrap(),
            format!("{}/api/v3/simple/price", server.uri()),
        );
        let err = feed.fetch_prices().await.unwrap_err();
        assert!(err.to_string().contains("429"));
    }
}
