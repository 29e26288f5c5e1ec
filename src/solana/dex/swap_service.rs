use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use uuid::Uuid;

use crate::entity::SwapOutcome;
use crate::solana::dex::models::{symbol_from_mint, SwapQuote};
use crate::solana::dex::price_service::PriceService;
use crate::solana::dex::Config;

/// Swap execution behind the quote flow
#[async_trait]
pub trait SwapService: Send + Sync {
    /// Execute a swap along a previously selected quote. The execution is
    /// simulated: a fixed delay stands in for the network round trip and the
    /// signature is a generated placeholder, not a landed transaction.
    async fn execute_swap(
        &self,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        quote: &SwapQuote,
    ) -> SwapOutcome;
}

pub struct SwapServiceImpl {
    price_service: Arc<dyn PriceService + Send + Sync>,
    config: Config,
}

impl SwapServiceImpl {
    pub fn new(price_service: Arc<dyn PriceService + Send + Sync>, config: Config) -> Self {
        Self {
            price_service,
            config,
        }
    }
}

#[async_trait]
impl SwapService for SwapServiceImpl {
    async fn execute_swap(
        &self,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        quote: &SwapQuote,
    ) -> SwapOutcome {
        let source_symbol = symbol_from_mint(source_mint);
        let target_symbol = symbol_from_mint(target_mint);

        info!(
            "Executing swap of {} {} -> {} via {}",
            amount, source_symbol, target_symbol, quote.venue
        );

        let ratio = match self.price_service.pair_ratio(source_mint, target_mint).await {
            Some(ratio) => ratio,
            None => {
                return SwapOutcome {
                    source_token: source_symbol,
                    target_token: target_symbol,
                    amount_in: amount,
                    amount_out: 0.0,
                    signature: None,
                    success: false,
                    error_message: Some(format!(
                        "No route for pair {} -> {}",
                        source_mint, target_mint
                    )),
                };
            }
        };

        // Stand-in for the submit/confirm round trip
        sleep(Duration::from_millis(self.config.swap_latency_ms)).await;

        let signature = format!("mock_transaction_signature_{}", Uuid::new_v4().simple());

        SwapOutcome {
            source_token: source_symbol,
            target_token: target_symbol,
            amount_in: amount,
            amount_out: amount * ratio,
            signature: Some(signature),
            success: true,
            error_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solana::dex::price_service::StaticPriceService;
    use crate::solana::tokens::constants::{SOL_MINT, USDC_MINT};

    fn service() -> SwapServiceImpl {
        let config = Config {
            swap_latency_ms: 0,
            ..Config::default()
        };
        SwapServiceImpl::new(Arc::new(StaticPriceService::new()), config)
    }

    fn sample_quote() -> SwapQuote {
        SwapQuote {
            id: "jupiter-1".to_string(),
            venue: "Jupiter".to_string(),
            price_impact: 0.12,
            fee: 0.30,
            estimated_time: "~2s".to_string(),
            best: true,
            out_amount: 1.0,
        }
    }

    #[tokio::test]
    async fn successful_swap_carries_mock_signature() {
        let outcome = service()
            .execute_swap(1.0, SOL_MINT, USDC_MINT, &sample_quote())
            .await;

        assert!(outcome.success);
        assert!(outcome
            .signature
            .unwrap()
            .starts_with("mock_transaction_signature_"));
        assert_eq!(outcome.amount_out, 1.0);
        assert!(outcome.error_message.is_none());
    }

    #[tokio::test]
    async fn unknown_pair_fails_with_message_and_no_signature() {
        let outcome = service()
            .execute_swap(
                1.0,
                SOL_MINT,
                "11111111111111111111111111111111",
                &sample_quote(),
            )
            .await;

        assert!(!outcome.success);
        assert!(outcome.signature.is_none());
        assert!(outcome.error_message.is_some());
    }
}
