use serde::Deserialize;

use crate::entity::Token;
use crate::solana::tokens::constants::{BONK_MINT, SOL_MINT, USDC_MINT, USDT_MINT};

/// One venue's quote for a swap. The venue set and its figures are fixed
/// sample data; there is no real routing behind them.
#[derive(Debug, Clone)]
pub struct SwapQuote {
    pub id: String,
    pub venue: String,
    /// Price impact, percent
    pub price_impact: f64,
    /// Venue fee, percent
    pub fee: f64,
    pub estimated_time: String,
    pub best: bool,
    /// Expected output amount, UI units of the target token
    pub out_amount: f64,
}

/// Token-info response shape of the lookup API
#[derive(Debug, Deserialize)]
pub struct TokenListEntry {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "logoURI")]
    pub logo_uri: Option<String>,
}

/// The static token table backing the swap and liquidity pages
pub fn popular_tokens() -> Vec<Token> {
    vec![
        Token {
            mint: SOL_MINT.to_string(),
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
            decimals: 9,
            price: Some(1.0),
            logo_uri: None,
        },
        Token {
            mint: USDC_MINT.to_string(),
            symbol: "USDC".to_string(),
            name: "USD Coin".to_string(),
            decimals: 6,
            price: Some(1.0),
            logo_uri: None,
        },
        Token {
            mint: USDT_MINT.to_string(),
            symbol: "USDT".to_string(),
            name: "Tether".to_string(),
            decimals: 6,
            price: Some(1.0),
            logo_uri: None,
        },
        Token {
            mint: BONK_MINT.to_string(),
            symbol: "BONK".to_string(),
            name: "Bonk".to_string(),
            decimals: 5,
            price: Some(0.000001),
            logo_uri: None,
        },
    ]
}

/// Get mint address from token symbol
pub fn mint_from_symbol(symbol: &str) -> Option<String> {
    popular_tokens()
        .into_iter()
        .find(|token| token.symbol.eq_ignore_ascii_case(symbol))
        .map(|token| token.mint)
}

/// Get token symbol from mint address
pub fn symbol_from_mint(mint: &str) -> String {
    popular_tokens()
        .into_iter()
        .find(|token| token.mint == mint)
        .map(|token| token.symbol)
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_lookup_is_case_insensitive() {
        assert_eq!(mint_from_symbol("sol").as_deref(), Some(SOL_MINT));
        assert_eq!(mint_from_symbol("BONK").as_deref(), Some(BONK_MINT));
        assert!(mint_from_symbol("DOGE2").is_none());
    }

    #[test]
    fn mint_lookup_falls_back_to_unknown() {
        assert_eq!(symbol_from_mint(USDT_MINT), "USDT");
        assert_eq!(symbol_from_mint("11111111111111111111111111111111"), "Unknown");
    }
}
