use crate::interactor::balance_interactor::BalanceInteractor;
use crate::view::balance_view::BalanceView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait BalancePresenter: Send + Sync {
    async fn show_balances(&self, telegram_id: i64) -> Result<()>;

    /// Refresh balances in place, editing the existing message when present
    async fn refresh_balances(
        &self,
        telegram_id: i64,
        message: Option<teloxide::types::Message>,
    ) -> Result<()>;
}

pub struct BalancePresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> BalancePresenterImpl<I, V>
where
    I: BalanceInteractor,
    V: BalanceView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> BalancePresenter for BalancePresenterImpl<I, V>
where
    I: BalanceInteractor + Send + Sync,
    V: BalanceView + Send + Sync,
{
    async fn show_balances(&self, telegram_id: i64) -> Result<()> {
        let message = self.view.display_loading().await?;

        match self.interactor.get_balances(telegram_id).await {
            Ok(Some(balances)) => {
                self.view.display_balances(balances, message).await?;
            }
            Ok(None) => {
                self.view.display_no_wallet(message).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string(), message).await?;
            }
        }

        Ok(())
    }

    async fn refresh_balances(
        &self,
        telegram_id: i64,
        message: Option<teloxide::types::Message>,
    ) -> Result<()> {
        let message = match message {
            Some(msg) => self.view.display_loading_update(msg).await?,
            None => self.view.display_loading().await?,
        };

        match self.interactor.get_balances(telegram_id).await {
            Ok(Some(balances)) => {
                self.view.display_balances(balances, message).await?;
            }
            Ok(None) => {
                self.view.display_no_wallet(message).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string(), message).await?;
            }
        }

        Ok(())
    }
}
