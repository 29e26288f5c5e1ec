use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use sqlx::PgPool;

use crate::solana::dex::config::Config as DexConfig;
use crate::solana::dex::pool_service::{PoolService, StaticPoolService};
use crate::solana::dex::price_service::{PriceService, StaticPriceService};
use crate::solana::dex::quote_service::{AggregatorQuoteService, QuoteService};
use crate::solana::dex::swap_service::{SwapService, SwapServiceImpl};
use crate::interactor::launch_interactor::LaunchGuard;
use crate::solana::dex::token_repository::{HttpTokenRepository, TokenRepository};
use crate::solana::launch::LaunchService;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Core services
    db_pool: Arc<PgPool>,
    solana_client: Arc<RpcClient>,

    // Launchpad services
    launch_service: Arc<LaunchService>,
    launch_guard: Arc<LaunchGuard>,

    // DEX services
    token_repository: Arc<dyn TokenRepository + Send + Sync>,
    price_service: Arc<dyn PriceService + Send + Sync>,
    quote_service: Arc<dyn QuoteService + Send + Sync>,
    swap_service: Arc<dyn SwapService + Send + Sync>,
    pool_service: Arc<dyn PoolService + Send + Sync>,

    // Configuration
    dex_config: DexConfig,
}

impl ServiceContainer {
    /// Create a new service container with essential dependencies
    pub fn new(db_pool: Arc<PgPool>, solana_client: Arc<RpcClient>) -> Self {
        // Create configuration
        let dex_config = DexConfig::from_env();

        let launch_service = Arc::new(LaunchService::new(solana_client.clone()));
        let launch_guard = Arc::new(LaunchGuard::new());

        // Initialize repositories
        let token_repository = Arc::new(HttpTokenRepository::new(dex_config.clone()))
            as Arc<dyn TokenRepository + Send + Sync>;

        // Initialize services
        let price_service =
            Arc::new(StaticPriceService::new()) as Arc<dyn PriceService + Send + Sync>;

        let quote_service = Arc::new(AggregatorQuoteService::new(price_service.clone()))
            as Arc<dyn QuoteService + Send + Sync>;

        let swap_service = Arc::new(SwapServiceImpl::new(
            price_service.clone(),
            dex_config.clone(),
        )) as Arc<dyn SwapService + Send + Sync>;

        let pool_service = Arc::new(StaticPoolService::new()) as Arc<dyn PoolService + Send + Sync>;

        Self {
            db_pool,
            solana_client,
            launch_service,
            launch_guard,
            token_repository,
            price_service,
            quote_service,
            swap_service,
            pool_service,
            dex_config,
        }
    }

    // Accessor methods

    pub fn db_pool(&self) -> Arc<PgPool> {
        self.db_pool.clone()
    }

    pub fn solana_client(&self) -> Arc<RpcClient> {
        self.solana_client.clone()
    }

    pub fn launch_service(&self) -> Arc<LaunchService> {
        self.launch_service.clone()
    }

    pub fn launch_guard(&self) -> Arc<LaunchGuard> {
        self.launch_guard.clone()
    }

    pub fn token_repository(&self) -> Arc<dyn TokenRepository + Send + Sync> {
        self.token_repository.clone()
    }

    pub fn price_service(&self) -> Arc<dyn PriceService + Send + Sync> {
        self.price_service.clone()
    }

    pub fn quote_service(&self) -> Arc<dyn QuoteService + Send + Sync> {
        self.quote_service.clone()
    }

    pub fn swap_service(&self) -> Arc<dyn SwapService + Send + Sync> {
        self.swap_service.clone()
    }

    pub fn pool_service(&self) -> Arc<dyn PoolService + Send + Sync> {
        self.pool_service.clone()
    }

    pub fn dex_config(&self) -> DexConfig {
        self.dex_config.clone()
    }
}
