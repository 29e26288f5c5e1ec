use anyhow::{anyhow, Result};
use bip39::{Language, Mnemonic};
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::{rng, RngCore};
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use std::str::FromStr;

/// Generate a new custodial wallet with a 12-word mnemonic phrase.
///
/// Returns (mnemonic, base58 keypair, public address).
pub fn generate_wallet() -> Result<(String, String, String)> {
    // 128 bits of entropy is what a 12-word BIP39 mnemonic encodes
    let mut entropy = [0u8; 16];
    rng().fill_bytes(&mut entropy);

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map_err(|e| anyhow!("Failed to create mnemonic: {}", e))?;

    // First 32 bytes of the seed become the Ed25519 private key; the chain
    // code half is not used on Solana.
    let seed = mnemonic.to_seed("");

    let signing_key = SigningKey::try_from(&seed[..32])
        .map_err(|e| anyhow!("Failed to create ed25519 signing key: {}", e))?;
    let verifying_key = VerifyingKey::from(&signing_key);

    // Solana keypairs are 32 bytes private + 32 bytes public
    let mut ed25519_bytes = [0u8; 64];
    ed25519_bytes[..32].copy_from_slice(&signing_key.to_bytes());
    ed25519_bytes[32..].copy_from_slice(&verifying_key.to_bytes());

    let sol_keypair = Keypair::from_bytes(&ed25519_bytes)
        .map_err(|e| anyhow!("Failed to create Solana keypair: {}", e))?;

    let pubkey = sol_keypair.pubkey();
    let keypair_base58 = keypair_to_base58(&sol_keypair)?;

    Ok((mnemonic.to_string(), keypair_base58, pubkey.to_string()))
}

/// Serialize Keypair (64 bytes) to base58.
pub fn keypair_to_base58(keypair: &Keypair) -> Result<String> {
    let keypair_bytes = keypair.to_bytes();
    Ok(bs58::encode(keypair_bytes).into_string())
}

/// Restore Keypair from base58 string (64 bytes).
pub fn keypair_from_base58(keypair_base58: &str) -> Result<Keypair> {
    let keypair_bytes = bs58::decode(keypair_base58)
        .into_vec()
        .map_err(|e| anyhow!("Failed to decode base58 keypair: {}", e))?;

    if keypair_bytes.len() != 64 {
        return Err(anyhow!("Invalid keypair length: {}", keypair_bytes.len()));
    }

    let keypair = Keypair::from_bytes(&keypair_bytes)
        .map_err(|e| anyhow!("Failed to create keypair from bytes: {}", e))?;

    Ok(keypair)
}

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).map_err(|e| anyhow!("Invalid Solana address: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_wallet_roundtrips_through_base58() {
        let (mnemonic, keypair_base58, address) = generate_wallet().unwrap();

        assert_eq!(mnemonic.split_whitespace().count(), 12);

        let keypair = keypair_from_base58(&keypair_base58).unwrap();
        assert_eq!(keypair.pubkey().to_string(), address);
    }

    #[test]
    fn consecutive_wallets_are_distinct() {
        let (_, _, first) = generate_wallet().unwrap();
        let (_, _, second) = generate_wallet().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn rejects_short_keypair() {
        let short = bs58::encode([0u8; 16]).into_string();
        assert!(keypair_from_base58(&short).is_err());
    }

    #[test]
    fn parse_pubkey_rejects_garbage() {
        assert!(parse_pubkey("not-an-address").is_err());
        assert!(parse_pubkey("So11111111111111111111111111111111111111112").is_ok());
    }
}
