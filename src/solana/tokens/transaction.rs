use anyhow::{anyhow, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    signature::Keypair,
    signer::Signer,
    transaction::Transaction as SolanaTransaction,
};

/// Build, sign and submit one atomic transaction, waiting for confirmation.
///
/// `signers` must include the fee payer; extra signers (e.g. a fresh mint
/// keypair) follow it. The instructions are applied all-or-nothing, so a
/// failed submission leaves no partial state behind.
pub async fn send_transaction_with_signers(
    client: &RpcClient,
    payer: &Keypair,
    extra_signers: &[&Keypair],
    instructions: &[Instruction],
) -> Result<String> {
    // Attach a recent blockhash
    let recent_blockhash = client
        .get_latest_blockhash()
        .await
        .map_err(|e| anyhow!("Failed to get recent blockhash: {}", e))?;

    let mut signers: Vec<&Keypair> = vec![payer];
    signers.extend_from_slice(extra_signers);

    let transaction = SolanaTransaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &signers,
        recent_blockhash,
    );

    let signature = client
        .send_and_confirm_transaction(&transaction)
        .await
        .map_err(|e| anyhow!("Failed to send transaction: {}", e))?;

    Ok(signature.to_string())
}
