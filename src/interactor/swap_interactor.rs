use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::entity::{LaunchpadError, SwapOutcome};
use crate::interactor::db;
use crate::solana::dex::models::mint_from_symbol;
use crate::solana::dex::quote_service::QuoteService;
use crate::solana::dex::swap_service::SwapService;
use crate::solana::dex::SwapQuote;

#[async_trait]
pub trait SwapInteractor: Send + Sync {
    /// Validate and normalize out of raw user input: amount, resolved source
    /// and target mints, clamped slippage
    async fn validate_swap_parameters(
        &self,
        amount: f64,
        source_symbol: &str,
        target_symbol: &str,
        slippage_percent: Option<f64>,
    ) -> Result<(f64, String, String, f64)>;

    async fn get_quotes(
        &self,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        slippage: f64,
    ) -> Result<Vec<SwapQuote>>;

    async fn execute_swap(
        &self,
        telegram_id: i64,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        slippage: f64,
    ) -> Result<SwapOutcome>;
}

pub struct SwapInteractorImpl {
    db_pool: Arc<PgPool>,
    quote_service: Arc<dyn QuoteService + Send + Sync>,
    swap_service: Arc<dyn SwapService + Send + Sync>,
}

impl SwapInteractorImpl {
    pub fn new(
        db_pool: Arc<PgPool>,
        quote_service: Arc<dyn QuoteService + Send + Sync>,
        swap_service: Arc<dyn SwapService + Send + Sync>,
    ) -> Self {
        Self {
            db_pool,
            quote_service,
            swap_service,
        }
    }
}

#[async_trait]
impl SwapInteractor for SwapInteractorImpl {
    async fn validate_swap_parameters(
        &self,
        amount: f64,
        source_symbol: &str,
        target_symbol: &str,
        slippage_percent: Option<f64>,
    ) -> Result<(f64, String, String, f64)> {
        if amount <= 0.0 {
            return Err(anyhow!("Amount must be greater than zero"));
        }

        let source_mint = mint_from_symbol(source_symbol)
            .ok_or_else(|| anyhow!("Unsupported source token: {}", source_symbol))?;
        let target_mint = mint_from_symbol(target_symbol)
            .ok_or_else(|| anyhow!("Unsupported target token: {}", target_symbol))?;

        if source_mint == target_mint {
            return Err(anyhow!("Source and target tokens must be different"));
        }

        // Slippage as a decimal fraction, clamped to a sane range
        let slippage = slippage_percent.unwrap_or(0.5).max(0.1).min(5.0) / 100.0;

        Ok((amount, source_mint, target_mint, slippage))
    }

    async fn get_quotes(
        &self,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        slippage: f64,
    ) -> Result<Vec<SwapQuote>> {
        self.quote_service
            .get_swap_quotes(amount, source_mint, target_mint, slippage)
            .await
    }

    async fn execute_swap(
        &self,
        telegram_id: i64,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        slippage: f64,
    ) -> Result<SwapOutcome> {
        // Swapping requires the wallet even though execution is simulated
        let user = db::get_user_by_telegram_id(&self.db_pool, telegram_id).await?;
        if user.solana_address.is_none() {
            return Err(LaunchpadError::WalletNotFound.into());
        }

        let quotes = self
            .quote_service
            .get_swap_quotes(amount, source_mint, target_mint, slippage)
            .await?;

        let best_quote = quotes
            .iter()
            .find(|quote| quote.best)
            .ok_or_else(|| anyhow!("No route available"))?;

        let outcome = self
            .swap_service
            .execute_swap(amount, source_mint, target_mint, best_quote)
            .await;

        let status = if outcome.success { "SUCCESS" } else { "FAILED" };
        let _ = db::record_swap(
            &self.db_pool,
            telegram_id,
            &outcome.source_token,
            &outcome.target_token,
            outcome.amount_in,
            outcome.amount_out,
            &outcome.signature,
            status,
        )
        .await;

        Ok(outcome)
    }
}
