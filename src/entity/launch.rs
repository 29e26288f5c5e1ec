use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-supplied parameters for a token launch. Pure input; validated at the
/// interactor seam before any network call is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCreationParams {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image_url: Option<String>,
    pub total_supply: u64,
    pub initial_price: f64,
    /// Vesting period in days
    pub vesting_period: u32,
    /// Team allocation as a percentage (0-100)
    pub team_allocation: f64,
    pub decimals: u8,
}

/// Outcome of a single creation attempt. Immutable after return: success
/// carries the addresses and signature, failure carries only the error text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCreationResult {
    pub success: bool,
    pub mint_address: Option<String>,
    pub token_account: Option<String>,
    pub transaction_signature: Option<String>,
    pub metadata_uri: Option<String>,
    pub error: Option<String>,
}

impl TokenCreationResult {
    pub fn completed(
        mint_address: String,
        token_account: String,
        transaction_signature: String,
        metadata_uri: String,
    ) -> Self {
        Self {
            success: true,
            mint_address: Some(mint_address),
            token_account: Some(token_account),
            transaction_signature: Some(transaction_signature),
            metadata_uri: Some(metadata_uri),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            mint_address: None,
            token_account: None,
            transaction_signature: None,
            metadata_uri: None,
            error: Some(error.into()),
        }
    }
}

// Launch record matching the database schema
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TokenLaunch {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub symbol: String,
    pub mint_address: Option<String>,
    pub total_supply: i64,
    pub decimals: i16,
    pub tx_signature: Option<String>,
    pub metadata_uri: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_result_carries_all_addresses() {
        let result = TokenCreationResult::completed(
            "mint".to_string(),
            "ata".to_string(),
            "sig".to_string(),
            "uri".to_string(),
        );

        assert!(result.success);
        assert!(result.mint_address.is_some());
        assert!(result.token_account.is_some());
        assert!(result.transaction_signature.is_some());
        assert!(result.metadata_uri.is_some());
        assert!(result.error.is_none());
    }

    #[test]
    fn failed_result_carries_only_error() {
        let result = TokenCreationResult::failed("blockhash query failed");

        assert!(!result.success);
        assert!(result.mint_address.is_none());
        assert!(result.token_account.is_none());
        assert!(result.transaction_signature.is_none());
        assert_eq!(result.error.as_deref(), Some("blockhash query failed"));
    }
}
