use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::solana::dex::models::SwapQuote;
use crate::solana::dex::price_service::PriceService;

/// Quote lookup across aggregation venues
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Quotes for swapping `amount` of the source token into the target
    /// token. Exactly one returned quote is marked best.
    async fn get_swap_quotes(
        &self,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        slippage: f64,
    ) -> Result<Vec<SwapQuote>>;
}

// Fixed venue profiles: (id, name, price impact %, fee %, latency label).
// Sample data standing in for a real aggregator response.
const VENUES: [(&str, &str, f64, f64, &str); 3] = [
    ("jupiter-1", "Jupiter", 0.12, 0.30, "~2s"),
    ("raydium-1", "Raydium", 0.15, 0.25, "~3s"),
    ("orca-1", "Orca", 0.18, 0.35, "~4s"),
];

/// Quote service over the fixed venue table. The output amount comes from
/// the spot price ratio; the venue figures are static display data.
pub struct AggregatorQuoteService {
    price_service: Arc<dyn PriceService + Send + Sync>,
}

impl AggregatorQuoteService {
    pub fn new(price_service: Arc<dyn PriceService + Send + Sync>) -> Self {
        Self { price_service }
    }
}

#[async_trait]
impl QuoteService for AggregatorQuoteService {
    async fn get_swap_quotes(
        &self,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        slippage: f64,
    ) -> Result<Vec<SwapQuote>> {
        if amount <= 0.0 {
            return Err(anyhow!("Amount must be greater than zero"));
        }

        let ratio = self
            .price_service
            .pair_ratio(source_mint, target_mint)
            .await
            .ok_or_else(|| anyhow!("No route for pair {} -> {}", source_mint, target_mint))?;

        let out_amount = amount * ratio;

        debug!(
            "Quoting {} {} -> {} (ratio {}, slippage {})",
            amount, source_mint, target_mint, ratio, slippage
        );

        let quotes = VENUES
            .iter()
            .enumerate()
            .map(|(index, (id, name, price_impact, fee, estimated_time))| SwapQuote {
                id: id.to_string(),
                venue: name.to_string(),
                price_impact: *price_impact,
                fee: *fee,
                estimated_time: estimated_time.to_string(),
                best: index == 0,
                out_amount,
            })
            .collect();

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solana::dex::price_service::StaticPriceService;
    use crate::solana::tokens::constants::{BONK_MINT, SOL_MINT, USDC_MINT};

    fn service() -> AggregatorQuoteService {
        AggregatorQuoteService::new(Arc::new(StaticPriceService::new()))
    }

    #[tokio::test]
    async fn returns_three_venues_with_one_best() {
        let quotes = service()
            .get_swap_quotes(1.5, SOL_MINT, USDC_MINT, 0.005)
            .await
            .unwrap();

        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes.iter().filter(|quote| quote.best).count(), 1);
        assert!(quotes[0].best);
        assert_eq!(quotes[0].venue, "Jupiter");
    }

    #[tokio::test]
    async fn out_amount_follows_price_ratio() {
        let quotes = service()
            .get_swap_quotes(2.0, SOL_MINT, BONK_MINT, 0.005)
            .await
            .unwrap();

        for quote in &quotes {
            assert_eq!(quote.out_amount, 2_000_000.0);
        }
    }

    #[tokio::test]
    async fn unknown_pair_is_an_error() {
        let result = service()
            .get_swap_quotes(1.0, SOL_MINT, "11111111111111111111111111111111", 0.005)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn zero_amount_is_rejected() {
        assert!(service()
            .get_swap_quotes(0.0, SOL_MINT, USDC_MINT, 0.005)
            .await
            .is_err());
    }
}
