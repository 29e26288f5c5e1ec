use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use sqlx::PgPool;
use std::sync::Arc;

use crate::entity::{LaunchpadError, Pool};
use crate::interactor::db;
use crate::solana::dex::pool_service::{paired_amount, PoolService};
use crate::solana::tokens::spl::get_token_balance;

#[async_trait]
pub trait PoolInteractor: Send + Sync {
    async fn list_pools(&self) -> Vec<Pool>;

    /// Resolve the pool and both deposit amounts. A missing second amount is
    /// derived from the pool's price ratio.
    async fn prepare_deposit(
        &self,
        pool_id: &str,
        amount_a: f64,
        amount_b: Option<f64>,
    ) -> Result<(Pool, f64, f64)>;

    /// Add liquidity (simulated); returns the pool, final amounts and the
    /// placeholder position id
    async fn add_liquidity(
        &self,
        telegram_id: i64,
        pool_id: &str,
        amount_a: f64,
        amount_b: Option<f64>,
    ) -> Result<(Pool, f64, f64, String)>;
}

pub struct PoolInteractorImpl {
    db_pool: Arc<PgPool>,
    solana_client: Arc<RpcClient>,
    pool_service: Arc<dyn PoolService + Send + Sync>,
}

impl PoolInteractorImpl {
    pub fn new(
        db_pool: Arc<PgPool>,
        solana_client: Arc<RpcClient>,
        pool_service: Arc<dyn PoolService + Send + Sync>,
    ) -> Self {
        Self {
            db_pool,
            solana_client,
            pool_service,
        }
    }
}

#[async_trait]
impl PoolInteractor for PoolInteractorImpl {
    async fn list_pools(&self) -> Vec<Pool> {
        self.pool_service.list_pools().await
    }

    async fn prepare_deposit(
        &self,
        pool_id: &str,
        amount_a: f64,
        amount_b: Option<f64>,
    ) -> Result<(Pool, f64, f64)> {
        if amount_a <= 0.0 {
            return Err(LaunchpadError::InvalidAmount.into());
        }

        let pool = self
            .pool_service
            .find_pool(pool_id)
            .await
            .ok_or_else(|| anyhow!("Unknown pool: {}", pool_id))?;

        let amount_b = match amount_b {
            Some(amount) if amount > 0.0 => amount,
            Some(_) => return Err(LaunchpadError::InvalidAmount.into()),
            None => {
                let price_a = pool.token_a.price.unwrap_or(0.0);
                let price_b = pool.token_b.price.unwrap_or(0.0);
                paired_amount(amount_a, price_a, price_b)
                    .ok_or_else(|| anyhow!("Cannot derive paired amount for {}", pool.id))?
            }
        };

        Ok((pool, amount_a, amount_b))
    }

    async fn add_liquidity(
        &self,
        telegram_id: i64,
        pool_id: &str,
        amount_a: f64,
        amount_b: Option<f64>,
    ) -> Result<(Pool, f64, f64, String)> {
        let user = db::get_user_by_telegram_id(&self.db_pool, telegram_id).await?;
        let address = match user.solana_address {
            Some(address) => address,
            None => return Err(LaunchpadError::WalletNotFound.into()),
        };

        let (pool, amount_a, amount_b) =
            self.prepare_deposit(pool_id, amount_a, amount_b).await?;

        // Balances are informational only while provisioning is simulated
        let balance_a = get_token_balance(&self.solana_client, &pool.token_a.mint, &address).await;
        let balance_b = get_token_balance(&self.solana_client, &pool.token_b.mint, &address).await;
        debug!(
            "Wallet {} holds {} {} / {} {}",
            address, balance_a, pool.token_a.symbol, balance_b, pool.token_b.symbol
        );

        let position_id = self
            .pool_service
            .add_liquidity(pool_id, amount_a, amount_b)
            .await?;

        Ok((pool, amount_a, amount_b, position_id))
    }
}
