use crate::entity::LaunchpadError;
use crate::interactor::swap_interactor::SwapInteractor;
use crate::solana::dex::models::symbol_from_mint;
use crate::utils;
use crate::view::swap_view::SwapView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait SwapPresenter: Send + Sync {
    async fn start_swap(&self) -> Result<()>;

    /// Parse and validate raw swap details, then show the route comparison.
    /// Some(..) carries the normalized parameters into the confirmation step.
    async fn process_swap_details(
        &self,
        input: &str,
    ) -> Result<Option<(f64, String, String, f64)>>;

    /// Execute the confirmed swap with the best route
    async fn confirm_swap(
        &self,
        telegram_id: i64,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        slippage: f64,
    ) -> Result<()>;

    async fn cancel_swap(&self) -> Result<()>;
}

pub struct SwapPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> SwapPresenterImpl<I, V>
where
    I: SwapInteractor,
    V: SwapView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> SwapPresenter for SwapPresenterImpl<I, V>
where
    I: SwapInteractor + Send + Sync,
    V: SwapView + Send + Sync,
{
    async fn start_swap(&self) -> Result<()> {
        self.view.display_usage().await?;

        Ok(())
    }

    async fn process_swap_details(
        &self,
        input: &str,
    ) -> Result<Option<(f64, String, String, f64)>> {
        let (amount, source_symbol, target_symbol, slippage_percent) =
            match utils::parse_swap_details(input) {
                Some(parsed) => parsed,
                None => {
                    self.view.display_usage().await?;
                    return Ok(None);
                }
            };

        let validated = self
            .interactor
            .validate_swap_parameters(amount, &source_symbol, &target_symbol, slippage_percent)
            .await;

        let (amount, source_mint, target_mint, slippage) = match validated {
            Ok(validated) => validated,
            Err(e) => {
                self.view.display_validation_error(e.to_string()).await?;
                return Ok(None);
            }
        };

        match self
            .interactor
            .get_quotes(amount, &source_mint, &target_mint, slippage)
            .await
        {
            Ok(quotes) => {
                self.view
                    .display_quotes(&quotes, amount, &source_symbol, &target_symbol)
                    .await?;
                Ok(Some((amount, source_mint, target_mint, slippage)))
            }
            Err(e) => {
                self.view.display_validation_error(e.to_string()).await?;
                Ok(None)
            }
        }
    }

    async fn confirm_swap(
        &self,
        telegram_id: i64,
        amount: f64,
        source_mint: &str,
        target_mint: &str,
        slippage: f64,
    ) -> Result<()> {
        let source_symbol = symbol_from_mint(source_mint);
        let target_symbol = symbol_from_mint(target_mint);

        let message = self
            .view
            .display_processing(&source_symbol, &target_symbol, amount)
            .await?;

        let outcome = self
            .interactor
            .execute_swap(telegram_id, amount, source_mint, target_mint, slippage)
            .await;

        match outcome {
            Ok(result) => {
                if result.success {
                    self.view
                        .display_swap_success(
                            &result.source_token,
                            &result.target_token,
                            result.amount_in,
                            result.amount_out,
                            result.signature.as_deref().unwrap_or("unknown"),
                            message,
                        )
                        .await?;
                } else {
                    self.view
                        .display_swap_error(
                            &result.source_token,
                            &result.target_token,
                            result.amount_in,
                            result
                                .error_message
                                .unwrap_or_else(|| "Unknown error".to_string()),
                            message,
                        )
                        .await?;
                }
            }
            Err(e) => {
                if let Some(LaunchpadError::WalletNotFound) = e.downcast_ref::<LaunchpadError>() {
                    self.view.display_no_wallet().await?;
                } else {
                    self.view
                        .display_swap_error(
                            &source_symbol,
                            &target_symbol,
                            amount,
                            e.to_string(),
                            message,
                        )
                        .await?;
                }
            }
        }

        Ok(())
    }

    async fn cancel_swap(&self) -> Result<()> {
        self.view.display_cancelled().await?;

        Ok(())
    }
}
