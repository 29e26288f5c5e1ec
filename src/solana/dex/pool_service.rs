use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::info;
use tokio::time::{sleep, Duration};
use uuid::Uuid;

use crate::entity::{Pool, PoolType, Token};
use crate::solana::tokens::constants::{BONK_MINT, SOL_MINT, USDC_MINT, USDT_MINT};

/// Liquidity pool listing and (simulated) provisioning
#[async_trait]
pub trait PoolService: Send + Sync {
    async fn list_pools(&self) -> Vec<Pool>;

    async fn find_pool(&self, pool_id: &str) -> Option<Pool>;

    /// Add liquidity to a pool. Simulated: a fixed delay and a placeholder
    /// position id; a production build would integrate a DEX program here.
    async fn add_liquidity(&self, pool_id: &str, amount_a: f64, amount_b: f64) -> Result<String>;

    /// Create a new pool. Simulated like add_liquidity; the pool starts with
    /// no liquidity or volume.
    async fn create_pool(
        &self,
        token_a: Token,
        token_b: Token,
        fee: f64,
        pool_type: PoolType,
    ) -> Result<Pool>;
}

/// Pool service over the fixed sample pool table
pub struct StaticPoolService;

impl StaticPoolService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticPoolService {
    fn default() -> Self {
        Self::new()
    }
}

fn token(mint: &str, symbol: &str, name: &str, decimals: u8, price: f64) -> Token {
    Token {
        mint: mint.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        decimals,
        price: Some(price),
        logo_uri: None,
    }
}

/// The popular-pool table shown on the liquidity page
pub fn popular_pools() -> Vec<Pool> {
    vec![
        Pool {
            id: "sol-usdc-1".to_string(),
            token_a: token(SOL_MINT, "SOL", "Solana", 9, 1.0),
            token_b: token(USDC_MINT, "USDC", "USD Coin", 6, 1.0),
            fee: 0.2,
            bin_step: 20,
            liquidity: 1_250_000.0,
            volume_24h: 450_000.0,
            apr: 12.5,
            pool_type: PoolType::Dlmm,
        },
        Pool {
            id: "bonk-sol-1".to_string(),
            token_a: token(BONK_MINT, "BONK", "Bonk", 5, 0.000001),
            token_b: token(SOL_MINT, "SOL", "Solana", 9, 1.0),
            fee: 0.3,
            bin_step: 25,
            liquidity: 890_000.0,
            volume_24h: 320_000.0,
            apr: 18.2,
            pool_type: PoolType::Dlmm,
        },
        Pool {
            id: "usdc-usdt-1".to_string(),
            token_a: token(USDC_MINT, "USDC", "USD Coin", 6, 1.0),
            token_b: token(USDT_MINT, "USDT", "Tether", 6, 1.0),
            fee: 0.05,
            bin_step: 1,
            liquidity: 2_500_000.0,
            volume_24h: 1_200_000.0,
            apr: 8.5,
            pool_type: PoolType::Clmm,
        },
    ]
}

/// Derive the paired deposit amount from the pool's price ratio
pub fn paired_amount(amount: f64, price: f64, other_price: f64) -> Option<f64> {
    if other_price == 0.0 {
        return None;
    }
    Some(amount * price / other_price)
}

#[async_trait]
impl PoolService for StaticPoolService {
    async fn list_pools(&self) -> Vec<Pool> {
        popular_pools()
    }

    async fn find_pool(&self, pool_id: &str) -> Option<Pool> {
        popular_pools().into_iter().find(|pool| pool.id == pool_id)
    }

    async fn add_liquidity(&self, pool_id: &str, amount_a: f64, amount_b: f64) -> Result<String> {
        let pool = self
            .find_pool(pool_id)
            .await
            .ok_or_else(|| anyhow!("Unknown pool: {}", pool_id))?;

        if amount_a <= 0.0 || amount_b <= 0.0 {
            return Err(anyhow!("Deposit amounts must be greater than zero"));
        }

        info!(
            "Adding liquidity to {} ({}/{}): {} / {}",
            pool.id, pool.token_a.symbol, pool.token_b.symbol, amount_a, amount_b
        );

        // Stand-in for the DEX position-opening transaction
        sleep(Duration::from_millis(1_500)).await;

        Ok(format!("mock_position_{}", Uuid::new_v4().simple()))
    }

    async fn create_pool(
        &self,
        token_a: Token,
        token_b: Token,
        fee: f64,
        pool_type: PoolType,
    ) -> Result<Pool> {
        if token_a.mint == token_b.mint {
            return Err(anyhow!("Pool tokens must differ"));
        }

        if fee <= 0.0 {
            return Err(anyhow!("Pool fee must be greater than zero"));
        }

        info!(
            "Creating {} pool {}/{}",
            pool_type, token_a.symbol, token_b.symbol
        );

        // Stand-in for the pool initialization transaction
        sleep(Duration::from_millis(1_500)).await;

        Ok(Pool {
            id: format!(
                "{}-{}-{}",
                token_a.symbol.to_lowercase(),
                token_b.symbol.to_lowercase(),
                Uuid::new_v4().simple()
            ),
            token_a,
            token_b,
            fee,
            bin_step: 20,
            liquidity: 0.0,
            volume_24h: 0.0,
            apr: 0.0,
            pool_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pool_table_matches_the_launchpad_listing() {
        let pools = StaticPoolService::new().list_pools().await;

        assert_eq!(pools.len(), 3);
        assert!(pools.iter().all(|pool| pool.apr > 0.0));
        assert!(pools.iter().all(|pool| pool.liquidity > 0.0));

        let sol_usdc = &pools[0];
        assert_eq!(sol_usdc.id, "sol-usdc-1");
        assert_eq!(sol_usdc.fee, 0.2);
        assert_eq!(sol_usdc.bin_step, 20);
        assert_eq!(sol_usdc.pool_type, PoolType::Dlmm);
    }

    #[tokio::test]
    async fn find_pool_by_id() {
        let service = StaticPoolService::new();

        assert!(service.find_pool("bonk-sol-1").await.is_some());
        assert!(service.find_pool("nope").await.is_none());
    }

    #[test]
    fn paired_amount_follows_price_ratio() {
        // 2 SOL against BONK at 1e-6 SOL each
        assert_eq!(paired_amount(2.0, 1.0, 0.000001), Some(2_000_000.0));
        assert_eq!(paired_amount(1.0, 1.0, 0.0), None);
    }

    #[tokio::test]
    async fn created_pool_starts_empty() {
        let service = StaticPoolService::new();

        let pool = service
            .create_pool(
                token(SOL_MINT, "SOL", "Solana", 9, 1.0),
                token(USDC_MINT, "USDC", "USD Coin", 6, 1.0),
                0.25,
                PoolType::Dlmm,
            )
            .await
            .unwrap();

        assert!(pool.id.starts_with("sol-usdc-"));
        assert_eq!(pool.fee, 0.25);
        assert_eq!(pool.liquidity, 0.0);
        assert_eq!(pool.volume_24h, 0.0);
    }

    #[tokio::test]
    async fn create_pool_rejects_identical_tokens() {
        let service = StaticPoolService::new();
        let sol = token(SOL_MINT, "SOL", "Solana", 9, 1.0);

        assert!(service
            .create_pool(sol.clone(), sol, 0.25, PoolType::Dlmm)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn add_liquidity_rejects_zero_amounts() {
        let service = StaticPoolService::new();
        assert!(service.add_liquidity("sol-usdc-1", 0.0, 1.0).await.is_err());
        assert!(service.add_liquidity("nope", 1.0, 1.0).await.is_err());
    }
}
