use async_trait::async_trait;
use std::collections::HashMap;

use crate::solana::dex::models::popular_tokens;

/// Price lookup for the swap and liquidity flows
#[async_trait]
pub trait PriceService: Send + Sync {
    /// Spot price for a mint; None when the token is not in the table
    async fn get_token_price(&self, mint: &str) -> Option<f64>;

    /// Price ratio between two mints, when both are known
    async fn pair_ratio(&self, source_mint: &str, target_mint: &str) -> Option<f64>;
}

/// Price service over the fixed sample table. A production build would call
/// a price API here; the launchpad only needs stable numbers for display.
pub struct StaticPriceService {
    prices: HashMap<String, f64>,
}

impl StaticPriceService {
    pub fn new() -> Self {
        let prices = popular_tokens()
            .into_iter()
            .filter_map(|token| token.price.map(|price| (token.mint, price)))
            .collect();

        Self { prices }
    }
}

impl Default for StaticPriceService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceService for StaticPriceService {
    async fn get_token_price(&self, mint: &str) -> Option<f64> {
        self.prices.get(mint).copied()
    }

    async fn pair_ratio(&self, source_mint: &str, target_mint: &str) -> Option<f64> {
        let source_price = self.get_token_price(source_mint).await?;
        let target_price = self.get_token_price(target_mint).await?;

        if target_price == 0.0 {
            return None;
        }

        Some(source_price / target_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solana::tokens::constants::{BONK_MINT, SOL_MINT, USDC_MINT};

    #[tokio::test]
    async fn known_mints_have_prices() {
        let service = StaticPriceService::new();

        assert_eq!(service.get_token_price(SOL_MINT).await, Some(1.0));
        assert_eq!(service.get_token_price(BONK_MINT).await, Some(0.000001));
    }

    #[tokio::test]
    async fn unknown_mint_has_no_price() {
        let service = StaticPriceService::new();
        assert_eq!(
            service.get_token_price("11111111111111111111111111111111").await,
            None
        );
    }

    #[tokio::test]
    async fn pair_ratio_is_price_quotient() {
        let service = StaticPriceService::new();

        let ratio = service.pair_ratio(SOL_MINT, USDC_MINT).await.unwrap();
        assert_eq!(ratio, 1.0);

        let bonk_per_sol = service.pair_ratio(SOL_MINT, BONK_MINT).await.unwrap();
        assert_eq!(bonk_per_sol, 1_000_000.0);
    }
}
