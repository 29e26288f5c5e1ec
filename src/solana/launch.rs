use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use serde_json::json;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction, pubkey::Pubkey, signature::Keypair, signer::Signer,
    system_instruction,
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account,
};
use spl_token::{instruction as token_instruction, ID as TOKEN_PROGRAM_ID};
use std::sync::Arc;

use crate::entity::{TokenCreationParams, TokenCreationResult};
use crate::solana::tokens::transaction::send_transaction_with_signers;
use crate::solana::utils::{lamports_to_sol, sol_to_lamports};

/// Size of a mint account, in bytes
pub const MINT_ACCOUNT_SIZE: usize = 82;
/// Size of a token account, in bytes
pub const TOKEN_ACCOUNT_SIZE: usize = 165;

/// Flat network fee estimate for the creation transaction, in SOL
const TRANSACTION_FEE_SOL: f64 = 0.00001;
/// Flat off-chain storage cost estimate, in SOL
const STORAGE_COST_SOL: f64 = 0.0001;
/// Conservative estimate returned when the rent queries fail, in SOL
pub const FALLBACK_CREATION_COST_SOL: f64 = 0.05;

const METADATA_BASE_URL: &str = "https://88mph.app";

/// Service that assembles and submits the token-creation transaction.
///
/// A launch is one linear, single-attempt flow: generate a mint identity,
/// derive the associated token account, query rents, build the metadata
/// description, submit one atomic four-instruction transaction and await
/// confirmation. There is no retry and no partial-failure recovery; the
/// transaction either lands whole or not at all.
pub struct LaunchService {
    client: Arc<RpcClient>,
}

impl LaunchService {
    pub fn new(client: Arc<RpcClient>) -> Self {
        Self { client }
    }

    /// Create a new SPL token owned and minted to `owner`.
    ///
    /// Every failure collapses into a `TokenCreationResult` with a single
    /// human-readable message; no error leaves this function.
    pub async fn create_token(
        &self,
        params: &TokenCreationParams,
        owner: &Keypair,
    ) -> TokenCreationResult {
        match self.try_create_token(params, owner).await {
            Ok(result) => result,
            Err(e) => {
                error!("Token creation failed: {}", e);
                TokenCreationResult::failed(e.to_string())
            }
        }
    }

    async fn try_create_token(
        &self,
        params: &TokenCreationParams,
        owner: &Keypair,
    ) -> Result<TokenCreationResult> {
        info!("Starting token creation for symbol {}", params.symbol);

        // A fresh mint identity on every attempt
        let mint = generate_mint();
        debug!("Generated mint keypair: {}", mint.pubkey());

        let owner_pubkey = owner.pubkey();
        let token_account = get_associated_token_address(&owner_pubkey, &mint.pubkey());

        // Rent-exempt minimums for the two fixed-size accounts
        let mint_rent = self
            .client
            .get_minimum_balance_for_rent_exemption(MINT_ACCOUNT_SIZE)
            .await
            .map_err(|e| anyhow!("Failed to get mint rent exemption: {}", e))?;
        let token_account_rent = self
            .client
            .get_minimum_balance_for_rent_exemption(TOKEN_ACCOUNT_SIZE)
            .await
            .map_err(|e| anyhow!("Failed to get token account rent exemption: {}", e))?;

        info!(
            "Rent exemption: mint {} lamports, token account {} lamports",
            mint_rent, token_account_rent
        );

        // Described off-chain; the URI is a fixed template, not an upload
        let metadata_uri = self.upload_metadata(params).await;
        debug!("Metadata URI: {}", metadata_uri);

        let instructions = creation_instructions(
            &owner_pubkey,
            &mint.pubkey(),
            &token_account,
            params.decimals,
            raw_supply(params.total_supply, params.decimals)?,
            mint_rent,
        )?;

        // One atomic transaction: owner pays and signs, the mint co-signs
        let signature =
            send_transaction_with_signers(&self.client, owner, &[&mint], &instructions).await?;

        info!(
            "Token created: mint {}, account {}, signature {}",
            mint.pubkey(),
            token_account,
            signature
        );

        Ok(TokenCreationResult::completed(
            mint.pubkey().to_string(),
            token_account.to_string(),
            signature,
            metadata_uri,
        ))
    }

    /// Estimate the all-in creation cost in SOL.
    ///
    /// Always non-negative; falls back to a fixed conservative constant when
    /// the rent queries fail.
    pub async fn estimate_creation_cost(&self) -> f64 {
        let rents = async {
            let mint_rent = self
                .client
                .get_minimum_balance_for_rent_exemption(MINT_ACCOUNT_SIZE)
                .await?;
            let token_account_rent = self
                .client
                .get_minimum_balance_for_rent_exemption(TOKEN_ACCOUNT_SIZE)
                .await?;
            Ok::<(u64, u64), solana_client::client_error::ClientError>((
                mint_rent,
                token_account_rent,
            ))
        }
        .await;

        match rents {
            Ok((mint_rent, token_account_rent)) => {
                creation_cost_sol(mint_rent, token_account_rent)
            }
            Err(e) => {
                error!("Failed to estimate creation cost: {}", e);
                FALLBACK_CREATION_COST_SOL
            }
        }
    }

    /// Build the metadata description and produce its URI.
    ///
    /// There is no decentralized-storage integration; the URI is a fixed
    /// template derived from the symbol.
    pub async fn upload_metadata(&self, params: &TokenCreationParams) -> String {
        let metadata = build_metadata(params, Utc::now());
        debug!("Metadata prepared: {}", metadata);

        metadata_uri(&params.symbol)
    }
}

/// Generate the keypair that becomes the token's mint identity
pub(crate) fn generate_mint() -> Keypair {
    Keypair::new()
}

/// Initial supply in raw token units
fn raw_supply(total_supply: u64, decimals: u8) -> Result<u64> {
    let raw = (total_supply as u128)
        .checked_mul(10u128.pow(decimals as u32))
        .ok_or_else(|| anyhow!("Total supply overflows with {} decimals", decimals))?;

    u64::try_from(raw).map_err(|_| anyhow!("Total supply overflows with {} decimals", decimals))
}

/// The fixed four-instruction creation sequence, in order: create the mint
/// account, initialize the mint, create the owner's associated token
/// account, mint the initial supply to it.
pub fn creation_instructions(
    owner: &Pubkey,
    mint: &Pubkey,
    token_account: &Pubkey,
    decimals: u8,
    raw_supply: u64,
    mint_rent: u64,
) -> Result<Vec<Instruction>> {
    let create_mint_account = system_instruction::create_account(
        owner,
        mint,
        mint_rent,
        MINT_ACCOUNT_SIZE as u64,
        &TOKEN_PROGRAM_ID,
    );

    // Owner holds both the mint and freeze authority
    let initialize_mint =
        token_instruction::initialize_mint(&TOKEN_PROGRAM_ID, mint, owner, Some(owner), decimals)
            .map_err(|e| anyhow!("Failed to build initialize-mint instruction: {}", e))?;

    let create_token_account =
        create_associated_token_account(owner, owner, mint, &TOKEN_PROGRAM_ID);

    let mint_initial_supply = token_instruction::mint_to(
        &TOKEN_PROGRAM_ID,
        mint,
        token_account,
        owner,
        &[],
        raw_supply,
    )
    .map_err(|e| anyhow!("Failed to build mint-to instruction: {}", e))?;

    Ok(vec![
        create_mint_account,
        initialize_mint,
        create_token_account,
        mint_initial_supply,
    ])
}

/// Rent for both accounts plus the fixed fee and storage estimates, in SOL
pub fn creation_cost_sol(mint_rent: u64, token_account_rent: u64) -> f64 {
    let fixed = sol_to_lamports(TRANSACTION_FEE_SOL) + sol_to_lamports(STORAGE_COST_SOL);
    lamports_to_sol(mint_rent + token_account_rent + fixed)
}

/// Off-chain metadata description for a launch
pub fn build_metadata(params: &TokenCreationParams, created_at: DateTime<Utc>) -> serde_json::Value {
    let image = params
        .image_url
        .clone()
        .unwrap_or_else(|| default_image_url(&params.symbol));

    json!({
        "name": params.name,
        "symbol": params.symbol,
        "description": params.description,
        "image": image,
        "attributes": [
            { "trait_type": "Total Supply", "value": params.total_supply.to_string() },
            { "trait_type": "Initial Price", "value": format!("{} SOL", params.initial_price) },
            { "trait_type": "Vesting Period", "value": format!("{} days", params.vesting_period) },
            { "trait_type": "Team Allocation", "value": format!("{}%", params.team_allocation) },
            { "trait_type": "Decimals", "value": params.decimals },
            { "trait_type": "Created On", "value": created_at.to_rfc3339() },
        ],
        "properties": {
            "files": [
                { "type": "image/png", "uri": image },
            ],
            "category": "image",
        },
    })
}

pub fn metadata_uri(symbol: &str) -> String {
    format!("{}/metadata/{}", METADATA_BASE_URL, symbol.to_lowercase())
}

pub fn default_image_url(symbol: &str) -> String {
    format!("{}/api/token-image?symbol={}", METADATA_BASE_URL, symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solana::client::create_solana_client;
    use solana_sdk::system_program;

    fn sample_params() -> TokenCreationParams {
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
    fn creation_sequence_has_four_instructions_in_order() {
        let owner = Keypair::new().pubkey();
        let mint = generate_mint().pubkey();
        let token_account = get_associated_token_address(&owner, &mint);

        let instructions =
            creation_instructions(&owner, &mint, &token_account, 9, 1_000_000, 2_039_280).unwrap();

        assert_eq!(instructions.len(), 4);
        // create-account goes to the system program, the rest to the
        // token/ATA programs
        assert_eq!(instructions[0].program_id, system_program::ID);
        assert_eq!(instructions[1].program_id, TOKEN_PROGRAM_ID);
        assert_eq!(instructions[2].program_id, spl_associated_token_account::ID);
        assert_eq!(instructions[3].program_id, TOKEN_PROGRAM_ID);
    }

    #[test]
    fn mint_identity_is_fresh_per_call() {
        assert_ne!(generate_mint().pubkey(), generate_mint().pubkey());
    }

    #[test]
    fn raw_supply_applies_decimals_and_checks_overflow() {
        assert_eq!(raw_supply(1_000_000, 9).unwrap(), 1_000_000_000_000_000);
        assert!(raw_supply(u64::MAX, 9).is_err());
    }

    #[test]
    fn cost_estimate_is_rents_plus_fixed_overhead() {
        let cost = creation_cost_sol(1_461_600, 2_039_280);
        let expected = (1_461_600.0 + 2_039_280.0) / 1_000_000_000.0 + 0.00001 + 0.0001;
        assert!((cost - expected).abs() < 1e-12);
        assert!(cost >= 0.0);
    }

    #[test]
    fn fallback_cost_is_the_conservative_constant() {
        assert_eq!(FALLBACK_CREATION_COST_SOL, 0.05);
    }

    #[tokio::test]
    async fn cost_estimate_falls_back_when_rpc_is_unreachable() {
        // Nothing listens on port 1, so both rent queries fail
        let client = create_solana_client("http://127.0.0.1:1").unwrap();
        let service = LaunchService::new(client);

        let cost = service.estimate_creation_cost().await;
        assert_eq!(cost, FALLBACK_CREATION_COST_SOL);
    }

    #[test]
    fn metadata_describes_the_launch() {
        let params = sample_params();
        let metadata = build_metadata(&params, Utc::now());

        assert_eq!(metadata["name"], "Quantum Doge");
        assert_eq!(metadata["symbol"], "QDOGE");
        assert_eq!(
            metadata["image"],
            "https://88mph.app/api/token-image?symbol=QDOGE"
        );
        assert_eq!(metadata["attributes"].as_array().unwrap().len(), 6);
        assert_eq!(metadata["properties"]["category"], "image");
    }

    #[test]
    fn metadata_uri_uses_lowercased_symbol() {
        assert_eq!(metadata_uri("QDOGE"), "https://88mph.app/metadata/qdoge");
    }

    #[test]
    fn explicit_image_url_wins_over_the_template() {
        let mut params = sample_params();
        params.image_url = Some("https://example.com/doge.png".to_string());

        let metadata = build_metadata(&params, Utc::now());
        assert_eq!(metadata["image"], "https://example.com/doge.png");
    }
}
