use anyhow::{anyhow, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use crate::solana::utils::lamports_to_sol;
use crate::solana::wallet::parse_pubkey;

/// Get the SOL balance of an address, in SOL
pub async fn get_sol_balance(client: &RpcClient, address: &str) -> Result<f64> {
    let pubkey: Pubkey = parse_pubkey(address)?;

    let lamports = client
        .get_balance(&pubkey)
        .await
        .map_err(|e| anyhow!("Failed to get SOL balance: {}", e))?;

    Ok(lamports_to_sol(lamports))
}
