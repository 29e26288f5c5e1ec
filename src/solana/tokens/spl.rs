use anyhow::{anyhow, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_client::rpc_response::RpcKeyedAccount;
use solana_sdk::program_option::COption;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use spl_token::state::Mint;

use crate::solana::utils::convert_from_token_amount;
use crate::solana::wallet::parse_pubkey;

/// Balance of one SPL token held by a wallet
#[derive(Debug, Clone)]
pub struct TokenBalance {
    pub mint_address: String,
    pub amount: f64,
}

/// On-chain state of a mint account
#[derive(Debug, Clone)]
pub struct MintSummary {
    pub supply: u64,
    pub decimals: u8,
    pub mint_authority: Option<String>,
    pub freeze_authority: Option<String>,
}

/// List all SPL token balances held by an address
pub async fn get_token_balances(client: &RpcClient, address: &str) -> Result<Vec<TokenBalance>> {
    let pubkey: Pubkey = parse_pubkey(address)?;

    let token_accounts: Vec<RpcKeyedAccount> = client
        .get_token_accounts_by_owner(&pubkey, TokenAccountsFilter::ProgramId(spl_token::ID))
        .await
        .map_err(|e| anyhow!("Failed to get token accounts: {}", e))?;

    let mut balances: Vec<TokenBalance> = Vec::new();

    for keyed_account in token_accounts {
        let token_account_pubkey: Pubkey = parse_pubkey(&keyed_account.pubkey)?;

        let token_account = client
            .get_token_account(&token_account_pubkey)
            .await
            .map_err(|e| anyhow!("Failed to get token account: {}", e))?
            .ok_or_else(|| anyhow!("Token account {} not found", token_account_pubkey))?;

        balances.push(TokenBalance {
            mint_address: token_account.mint.to_string(),
            amount: token_account.token_amount.ui_amount.unwrap_or(0.0),
        });
    }

    Ok(balances)
}

/// Balance of a specific mint in a wallet's associated token account.
/// Returns 0 when the account does not exist or any query fails.
pub async fn get_token_balance(client: &RpcClient, mint: &str, owner: &str) -> f64 {
    let result: Result<f64> = async {
        let mint_pubkey = parse_pubkey(mint)?;
        let owner_pubkey = parse_pubkey(owner)?;
        let token_account = get_associated_token_address(&owner_pubkey, &mint_pubkey);

        let account = client
            .get_token_account(&token_account)
            .await
            .map_err(|e| anyhow!("Failed to get token account: {}", e))?
            .ok_or_else(|| anyhow!("No associated token account for mint {}", mint))?;

        Ok(account.token_amount.ui_amount.unwrap_or(0.0))
    }
    .await;

    result.unwrap_or(0.0)
}

/// Read supply, decimals and authorities straight from the mint account
pub async fn get_mint_summary(client: &RpcClient, mint: &str) -> Result<MintSummary> {
    let mint_pubkey = parse_pubkey(mint)?;

    let account = client
        .get_account(&mint_pubkey)
        .await
        .map_err(|e| anyhow!("Failed to get mint account: {}", e))?;

    let state = Mint::unpack(&account.data)
        .map_err(|e| anyhow!("Failed to unpack mint account data: {}", e))?;

    Ok(MintSummary {
        supply: state.supply,
        decimals: state.decimals,
        mint_authority: authority_string(state.mint_authority),
        freeze_authority: authority_string(state.freeze_authority),
    })
}

fn authority_string(authority: COption<Pubkey>) -> Option<String> {
    Option::<Pubkey>::from(authority).map(|key| key.to_string())
}

/// UI amount of a raw supply figure given the mint's decimals
pub fn ui_supply(summary: &MintSummary) -> f64 {
    convert_from_token_amount(summary.supply, summary.decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_supply_applies_decimals() {
        let summary = MintSummary {
            supply: 1_000_000_000_000_000,
            decimals: 9,
            mint_authority: None,
            freeze_authority: None,
        };

        assert_eq!(ui_supply(&summary), 1_000_000.0);
    }

    #[test]
    fn authority_string_unwraps_coption() {
        let key = Pubkey::new_unique();

        assert_eq!(authority_string(COption::Some(key)), Some(key.to_string()));
        assert_eq!(authority_string(COption::None), None);
    }
}
