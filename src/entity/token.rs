use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub mint: String,           // Mint address
    pub symbol: String,         // Token symbol (e.g. "SOL", "USDC")
    pub name: String,           // Full token name
    pub decimals: u8,           // Number of decimal places
    pub price: Option<f64>,     // Spot price in SOL, when known
    pub logo_uri: Option<String>,
}
