use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::entity::{LaunchpadError, TokenCreationParams, TokenCreationResult, TokenLaunch};
use crate::interactor::db;
use crate::solana::tokens::spl::{get_mint_summary, ui_supply};
use crate::solana::{keypair_from_base58, LaunchService};

/// Maximum symbol length accepted by the launch form
pub const MAX_SYMBOL_LEN: usize = 10;
/// Maximum decimals an SPL mint supports in practice here
pub const MAX_DECIMALS: u8 = 9;

/// Tracks chats with a creation attempt in flight. A chat holds at most one
/// launch slot at a time.
#[derive(Default)]
pub struct LaunchGuard {
    active: Mutex<HashSet<i64>>,
}

impl LaunchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the launch slot for a chat
    pub fn begin(&self, telegram_id: i64) -> Result<()> {
        let mut active = self.active.lock().unwrap();
        if !active.insert(telegram_id) {
            return Err(LaunchpadError::LaunchInProgress.into());
        }
        Ok(())
    }

    /// Release the slot once the attempt has resolved
    pub fn finish(&self, telegram_id: i64) {
        self.active.lock().unwrap().remove(&telegram_id);
    }

    pub fn is_active(&self, telegram_id: i64) -> bool {
        self.active.lock().unwrap().contains(&telegram_id)
    }
}

#[async_trait]
pub trait LaunchInteractor: Send + Sync {
    /// Estimated all-in creation cost in SOL (never fails; falls back to a
    /// fixed constant)
    async fn estimate_cost(&self) -> f64;

    /// Run one launch attempt end to end and record it
    async fn launch_token(
        &self,
        telegram_id: i64,
        params: &TokenCreationParams,
    ) -> Result<TokenCreationResult>;

    /// Launch history for a user, newest first
    async fn get_launches(&self, telegram_id: i64) -> Result<Vec<TokenLaunch>>;
}

pub struct LaunchInteractorImpl {
    db_pool: Arc<PgPool>,
    solana_client: Arc<RpcClient>,
    launch_service: Arc<LaunchService>,
}

impl LaunchInteractorImpl {
    pub fn new(
        db_pool: Arc<PgPool>,
        solana_client: Arc<RpcClient>,
        launch_service: Arc<LaunchService>,
    ) -> Self {
        Self {
            db_pool,
            solana_client,
            launch_service,
        }
    }
}

#[async_trait]
impl LaunchInteractor for LaunchInteractorImpl {
    async fn estimate_cost(&self) -> f64 {
        self.launch_service.estimate_creation_cost().await
    }

    async fn launch_token(
        &self,
        telegram_id: i64,
        params: &TokenCreationParams,
    ) -> Result<TokenCreationResult> {
        validate_params(params)?;

        // The custodial wallet is the signer capability
        let user = db::get_user_by_telegram_id(&self.db_pool, telegram_id).await?;

        let keypair_base58 = match user.encrypted_private_key {
            Some(key) => key,
            None => return Err(LaunchpadError::WalletNotFound.into()),
        };

        let owner = keypair_from_base58(&keypair_base58)?;

        let result = self.launch_service.create_token(params, &owner).await;

        // The attempt is recorded either way; the result shape already
        // collapses failures to one message
        let _ = db::record_launch(
            &self.db_pool,
            telegram_id,
            &params.name,
            &params.symbol,
            params.total_supply as i64,
            params.decimals as i16,
            &result,
        )
        .await;

        if let Some(mint_address) = result.mint_address.as_deref() {
            if let Ok(summary) = get_mint_summary(&self.solana_client, mint_address).await {
                debug!(
                    "On-chain supply for {}: {} ({} decimals)",
                    mint_address,
                    ui_supply(&summary),
                    summary.decimals
                );
            }
        }

        Ok(result)
    }

    async fn get_launches(&self, telegram_id: i64) -> Result<Vec<TokenLaunch>> {
        let launches = db::get_launches_by_telegram_id(&self.db_pool, telegram_id).await?;
        Ok(launches)
    }
}

/// Validate launch parameters before any network call
pub fn validate_params(params: &TokenCreationParams) -> Result<()> {
    let reject = |reason: &str| -> Result<()> {
        Err(LaunchpadError::InvalidTokenParams(reason.to_string()).into())
    };

    if params.name.trim().is_empty() {
        return reject("Token name must not be empty");
    }

    if params.symbol.trim().is_empty() {
        return reject("Token symbol must not be empty");
    }

    if params.symbol.len() > MAX_SYMBOL_LEN {
        return reject(&format!(
            "Token symbol must be at most {} characters",
            MAX_SYMBOL_LEN
        ));
    }

    if !params.symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return reject("Token symbol must be alphanumeric");
    }

    if params.total_supply == 0 {
        return reject("Total supply must be greater than zero");
    }

    if params.decimals > MAX_DECIMALS {
        return reject(&format!("Decimals must be at most {}", MAX_DECIMALS));
    }

    if params.initial_price < 0.0 {
        return reject("Initial price must not be negative");
    }

    if !(0.0..=100.0).contains(&params.team_allocation) {
        return reject("Team allocation must be between 0 and 100 percent");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> TokenCreationParams {
        TokenCreationParams {
            name: "Quantum Doge".to_string(),
            symbol: "QDOGE".to_string(),
            description: "To the moon".to_string(),
            image_url: None,
            total_supply: 1_000_000,
            initial_price: 0.0001,
            vesting_period: 12,
            team_allocation: 10.0,
            decimals: 9,
        }
    }

    #[test]
    fn accepts_valid_params() {
        assert!(validate_params(&valid_params()).is_ok());
    }

    #[test]
    fn rejects_empty_name_and_symbol() {
        let mut params = valid_params();
        params.name = "  ".to_string();
        assert!(validate_params(&params).is_err());

        let mut params = valid_params();
        params.symbol = String::new();
        assert!(validate_params(&params).is_err());
    }

    #[test]
    fn rejects_oversized_symbol_and_decimals() {
        let mut params = valid_params();
        params.symbol = "TOOLONGSYMBOL".to_string();
        assert!(validate_params(&params).is_err());

        let mut params = valid_params();
        params.decimals = 12;
        assert!(validate_params(&params).is_err());
    }

    #[test]
    fn rejects_zero_supply_and_bad_allocation() {
        let mut params = valid_params();
        params.total_supply = 0;
        assert!(validate_params(&params).is_err());

        let mut params = valid_params();
        params.team_allocation = 120.0;
        assert!(validate_params(&params).is_err());
    }

    #[test]
    fn rejects_non_alphanumeric_symbol() {
        let mut params = valid_params();
        params.symbol = "QD-GE".to_string();
        assert!(validate_params(&params).is_err());
    }

    #[test]
    fn validation_failures_are_typed() {
        let mut params = valid_params();
        params.symbol = String::new();

        let err = validate_params(&params).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LaunchpadError>(),
            Some(LaunchpadError::InvalidTokenParams(_))
        ));
    }

    #[test]
    fn launch_guard_allows_one_attempt_per_chat() {
        let guard = LaunchGuard::new();

        assert!(guard.begin(1).is_ok());
        assert!(guard.is_active(1));

        let err = guard.begin(1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LaunchpadError>(),
            Some(LaunchpadError::LaunchInProgress)
        ));

        // A different chat is unaffected
        assert!(guard.begin(2).is_ok());

        guard.finish(1);
        assert!(!guard.is_active(1));
        assert!(guard.begin(1).is_ok());
    }
}
