use crate::entity::LaunchpadError;
use crate::interactor::pool_interactor::PoolInteractor;
use crate::utils;
use crate::view::pool_view::PoolView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait PoolPresenter: Send + Sync {
    async fn show_pools(&self) -> Result<()>;

    /// Ask for deposit amounts once a pool has been picked. Some(pool_id)
    /// moves the dialogue into the amounts step.
    async fn select_pool(&self, pool_id: &str) -> Result<Option<String>>;

    /// Parse the amounts line and run the deposit
    async fn process_deposit(&self, telegram_id: i64, pool_id: &str, input: &str) -> Result<()>;
}

pub struct PoolPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> PoolPresenterImpl<I, V>
where
    I: PoolInteractor,
    V: PoolView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> PoolPresenter for PoolPresenterImpl<I, V>
where
    I: PoolInteractor + Send + Sync,
    V: PoolView + Send + Sync,
{
    async fn show_pools(&self) -> Result<()> {
        let pools = self.interactor.list_pools().await;
        self.view.display_pools(pools).await?;

        Ok(())
    }

    async fn select_pool(&self, pool_id: &str) -> Result<Option<String>> {
        let pools = self.interactor.list_pools().await;

        match pools.iter().find(|pool| pool.id == pool_id) {
            Some(pool) => {
                self.view.prompt_deposit_amounts(pool).await?;
                Ok(Some(pool.id.clone()))
            }
            None => {
                self.view
                    .display_validation_error(format!("Unknown pool: {}", pool_id))
                    .await?;
                Ok(None)
            }
        }
    }

    async fn process_deposit(&self, telegram_id: i64, pool_id: &str, input: &str) -> Result<()> {
        let (amount_a, amount_b) = match utils::parse_deposit_amounts(input) {
            Some(amounts) => amounts,
            None => {
                self.view
                    .display_validation_error(
                        "Send one or two numeric amounts, e.g. 1.5 or 1.5 300".to_string(),
                    )
                    .await?;
                return Ok(());
            }
        };

        // Resolve the pool up front so the progress message can name it
        let (pool, ..) = match self
            .interactor
            .prepare_deposit(pool_id, amount_a, amount_b)
            .await
        {
            Ok(prepared) => prepared,
            Err(e) => {
                self.view.display_validation_error(e.to_string()).await?;
                return Ok(());
            }
        };

        let message = self.view.display_depositing(&pool).await?;

        match self
            .interactor
            .add_liquidity(telegram_id, pool_id, amount_a, amount_b)
            .await
        {
            Ok((pool, final_a, final_b, position_id)) => {
                self.view
                    .display_deposit_success(&pool, final_a, final_b, &position_id, message)
                    .await?;
            }
            Err(e) => {
                if let Some(LaunchpadError::WalletNotFound) = e.downcast_ref::<LaunchpadError>() {
                    self.view.display_no_wallet().await?;
                } else {
                    self.view.display_error(e.to_string(), message).await?;
                }
            }
        }

        Ok(())
    }
}
