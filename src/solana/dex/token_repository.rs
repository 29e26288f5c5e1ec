use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::entity::Token;
use crate::solana::dex::models::{popular_tokens, TokenListEntry};
use crate::solana::dex::Config;

/// Repository for token descriptions
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Get token information by its mint address
    async fn get_token_by_mint(&self, mint: &str) -> Result<Token>;
}

/// Token repository backed by the lookup API, with the static table as a
/// fallback and an in-memory cache in front.
pub struct HttpTokenRepository {
    http_client: Client,
    config: Config,
    token_cache: Arc<Mutex<HashMap<String, Token>>>,
}

impl HttpTokenRepository {
    pub fn new(config: Config) -> Self {
        Self {
            http_client: Client::new(),
            config,
            token_cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn static_fallback(mint: &str) -> Option<Token> {
        popular_tokens().into_iter().find(|token| token.mint == mint)
    }
}

#[async_trait]
impl TokenRepository for HttpTokenRepository {
    async fn get_token_by_mint(&self, mint: &str) -> Result<Token> {
        debug!("Getting token by mint: {}", mint);

        // Check cache first
        {
            let cache = self.token_cache.lock().unwrap();
            if let Some(token) = cache.get(mint) {
                return Ok(token.clone());
            }
        }

        let url = format!("{}/{}", self.config.token_api_url, mint);

        let response = match self.http_client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!(
                    "Token API returned {} for {}, trying static table",
                    response.status(),
                    mint
                );
                return Self::static_fallback(mint)
                    .ok_or_else(|| anyhow!("Unknown token mint: {}", mint));
            }
            Err(e) => {
                error!("Failed to fetch token info: {}", e);
                return Self::static_fallback(mint)
                    .ok_or_else(|| anyhow!("Unknown token mint: {}", mint));
            }
        };

        let entry: TokenListEntry = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse token response: {}", e))?;

        let token = Token {
            mint: entry.address,
            symbol: entry.symbol,
            name: entry.name,
            decimals: entry.decimals,
            price: None,
            logo_uri: entry.logo_uri,
        };

        // Update cache
        {
            let mut cache = self.token_cache.lock().unwrap();
            cache.insert(token.mint.clone(), token.clone());
        }

        Ok(token)
    }
}
