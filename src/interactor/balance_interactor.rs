use anyhow::Result;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use sqlx::PgPool;
use std::sync::Arc;

use crate::interactor::db;
use crate::solana::dex::token_repository::TokenRepository;
use crate::solana::tokens::native::get_sol_balance;
use crate::solana::tokens::spl::get_token_balances;
use crate::utils::shorten_address;

/// Wallet holdings prepared for display
#[derive(Debug, Clone)]
pub struct WalletBalances {
    pub address: String,
    pub sol: f64,
    pub tokens: Vec<(String, f64)>,
}

#[async_trait]
pub trait BalanceInteractor: Send + Sync {
    /// None when the user has no wallet yet
    async fn get_balances(&self, telegram_id: i64) -> Result<Option<WalletBalances>>;
}

pub struct BalanceInteractorImpl {
    db_pool: Arc<PgPool>,
    solana_client: Arc<RpcClient>,
    token_repository: Arc<dyn TokenRepository + Send + Sync>,
}

impl BalanceInteractorImpl {
    pub fn new(
        db_pool: Arc<PgPool>,
        solana_client: Arc<RpcClient>,
        token_repository: Arc<dyn TokenRepository + Send + Sync>,
    ) -> Self {
        Self {
            db_pool,
            solana_client,
            token_repository,
        }
    }
}

#[async_trait]
impl BalanceInteractor for BalanceInteractorImpl {
    async fn get_balances(&self, telegram_id: i64) -> Result<Option<WalletBalances>> {
        let user = db::get_user_by_telegram_id(&self.db_pool, telegram_id).await?;

        let address = match user.solana_address {
            Some(address) => address,
            None => return Ok(None),
        };

        let (sol, token_balances) = futures::try_join!(
            get_sol_balance(&self.solana_client, &address),
            get_token_balances(&self.solana_client, &address)
        )?;

        let mut tokens = Vec::with_capacity(token_balances.len());
        for balance in token_balances {
            let label = match self
                .token_repository
                .get_token_by_mint(&balance.mint_address)
                .await
            {
                Ok(token) => token.symbol,
                Err(_) => shorten_address(&balance.mint_address),
            };
            tokens.push((label, balance.amount));
        }

        Ok(Some(WalletBalances {
            address,
            sol,
            tokens,
        }))
    }
}
