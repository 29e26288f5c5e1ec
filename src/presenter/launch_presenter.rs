use crate::entity::{LaunchpadError, TokenCreationParams};
use crate::interactor::launch_interactor::{validate_params, LaunchInteractor};
use crate::utils;
use crate::view::launch_view::{LaunchView, LAUNCH_STEPS};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// How often the progress message advances while the transaction is pending
const STEP_INTERVAL_MS: u64 = 1500;

#[async_trait]
pub trait LaunchPresenter: Send + Sync {
    /// Kick off the launch wizard
    async fn start_launch(&self) -> Result<()>;

    /// Parse the name/symbol/description line; Some(..) advances the wizard
    async fn process_token_basics(
        &self,
        input: &str,
    ) -> Result<Option<(String, String, String, Option<String>)>>;

    /// Parse tokenomics, validate the full parameter set and show the preview
    async fn process_tokenomics(
        &self,
        basics: (String, String, String, Option<String>),
        input: &str,
    ) -> Result<Option<TokenCreationParams>>;

    /// Run the confirmed launch with a live progress message
    async fn confirm_launch(&self, telegram_id: i64, params: TokenCreationParams) -> Result<()>;

    async fn cancel_launch(&self) -> Result<()>;

    async fn show_launches(&self, telegram_id: i64) -> Result<()>;
}

pub struct LaunchPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> LaunchPresenterImpl<I, V>
where
    I: LaunchInteractor,
    V: LaunchView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> LaunchPresenter for LaunchPresenterImpl<I, V>
where
    I: LaunchInteractor + Send + Sync,
    V: LaunchView + Send + Sync + 'static,
{
    async fn start_launch(&self) -> Result<()> {
        self.view.prompt_token_basics().await?;

        Ok(())
    }

    async fn process_token_basics(
        &self,
        input: &str,
    ) -> Result<Option<(String, String, String, Option<String>)>> {
        match utils::parse_token_basics(input) {
            Ok((name, symbol, description, image_url)) => {
                self.view.prompt_tokenomics(&name, &symbol).await?;
                Ok(Some((name, symbol, description, image_url)))
            }
            Err(e) => {
                self.view.display_validation_error(e.to_string()).await?;
                Ok(None)
            }
        }
    }

    async fn process_tokenomics(
        &self,
        basics: (String, String, String, Option<String>),
        input: &str,
    ) -> Result<Option<TokenCreationParams>> {
        let (total_supply, initial_price, vesting_period, team_allocation, decimals) =
            match utils::parse_tokenomics(input) {
                Ok(parsed) => parsed,
                Err(e) => {
                    self.view.display_validation_error(e.to_string()).await?;
                    return Ok(None);
                }
            };

        let (name, symbol, description, image_url) = basics;
        let params = TokenCreationParams {
            name,
            symbol,
            description,
            image_url,
            total_supply,
            initial_price,
            vesting_period,
            team_allocation,
            decimals,
        };

        if let Err(e) = validate_params(&params) {
            self.view.display_validation_error(e.to_string()).await?;
            return Ok(None);
        }

        let estimated_cost = self.interactor.estimate_cost().await;
        self.view
            .display_launch_preview(&params, estimated_cost)
            .await?;

        Ok(Some(params))
    }

    async fn confirm_launch(&self, telegram_id: i64, params: TokenCreationParams) -> Result<()> {
        let progress_message = self.view.display_progress_start().await?;

        // Advance the progress message on a timer while the transaction is
        // in flight
        let ticker = progress_message.clone().map(|msg| {
            let view = Arc::clone(&self.view);
            tokio::spawn(async move {
                for step in 1..LAUNCH_STEPS.len() {
                    tokio::time::sleep(Duration::from_millis(STEP_INTERVAL_MS)).await;
                    if view.display_progress_step(&msg, step).await.is_err() {
                        break;
                    }
                }
            })
        });

        let outcome = self.interactor.launch_token(telegram_id, &params).await;

        if let Some(handle) = ticker {
            handle.abort();
        }

        match outcome {
            Ok(result) => {
                if result.success {
                    self.view
                        .display_launch_success(&result, progress_message)
                        .await?;
                } else {
                    self.view
                        .display_launch_failed(
                            result
                                .error
                                .unwrap_or_else(|| "Unknown error".to_string()),
                            progress_message,
                        )
                        .await?;
                }
            }
            Err(e) => {
                if let Some(LaunchpadError::WalletNotFound) = e.downcast_ref::<LaunchpadError>() {
                    self.view.display_no_wallet().await?;
                } else {
                    self.view
                        .display_launch_failed(e.to_string(), progress_message)
                        .await?;
                }
            }
        }

        Ok(())
    }

    async fn cancel_launch(&self) -> Result<()> {
        self.view.display_cancelled().await?;

        Ok(())
    }

    async fn show_launches(&self, telegram_id: i64) -> Result<()> {
        let launches = self.interactor.get_launches(telegram_id).await?;
        self.view.display_launches(launches).await?;

        Ok(())
    }
}
