/// Aggregator configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL for the token-info lookup API
    pub token_api_url: String,

    /// Simulated execution delay for the mocked swap path, in milliseconds
    pub swap_latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_api_url: "https://api.jup.ag/tokens/v1/token".to_string(),
            swap_latency_ms: 2_000,
        }
    }
}

impl Config {
    /// Build the configuration from environment variables
    pub fn from_env() -> Self {
        use std::env;

        Self {
            token_api_url: env::var("TOKEN_API_URL")
                .unwrap_or_else(|_| "https://api.jup.ag/tokens/v1/token".to_string()),
            swap_latency_ms: env::var("SWAP_LATENCY_MS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(2_000),
        }
    }
}
