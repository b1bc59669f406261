//! Prompt text sent to the completion service.

use std::fmt::Write;

use super::price::PriceQuote;

/// Render the market-generation prompt for the current prices.
///
/// `count` markets are requested, each resolving within `horizon_hours`.
pub fn market_prompt(prices: &PriceQuote, count: usize, horizon_hours: u32) -> String {
    let mut prompt = String::from("Current crypto prices:\n");
    for (symbol, price) in prices.by_symbol() {
        // Writing into a String cannot fail.
        let _ = writeln!(prompt, "{symbol}: ${price}");
    }

    let _ = write!(
        prompt,
        "\nPlease create {count} prediction markets related to BTC, ETH, SOL, or NEAR, \
         that can resolve within the next {horizon_hours} hours.\n\
         Each market should have:\n\
         - Title\n\
         - Short description\n\
         - Clear question formulation.\n\
         \n\
         Respond strictly in JSON array format:\n\
         [\n  {{ \"title\": \"...\", \"description\": \"...\", \"resolve_in_hours\": {horizon_hours} }},\n  ...\n]\n"
    );
    prompt
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::price::Coin;

    #[test]
    fn test_prompt_lists_prices_and_instruction() {
        let quote = PriceQuote::from_prices(BTreeMap::from([
            (Coin::Bitcoin, dec!(50000)),
            (Coin::Ethereum, dec!(3000.5)),
            (Coin::Solana, dec!(150)),
            (Coin::Near, dec!(5)),
        ]))
        .unwrap();

        let prompt = market_prompt(&quote, 5, 8);
        assert!(prompt.starts_with("Current crypto prices:\nBTC: $50000\nETH: $3000.5\nSOL: $150\nNEAR: $5\n"));
        assert!(prompt.contains("create 5 prediction markets"));
        assert!(prompt.contains("within the next 8 hours"));
        assert!(prompt.contains("\"resolve_in_hours\": 8"));
        assert!(prompt.contains("JSON array"));
    }
}
