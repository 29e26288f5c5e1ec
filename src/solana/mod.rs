pub mod client;
pub mod dex;
pub mod launch;
pub mod tokens;
pub mod utils;
pub mod wallet;

// Re-export commonly used items
pub use client::create_solana_client;
pub use launch::LaunchService;
pub use tokens::constants::{BONK_MINT, SOL_MINT, USDC_MINT, USDT_MINT};
pub use tokens::native::get_sol_balance;
pub use tokens::spl::{get_token_balance, get_token_balances};
pub use wallet::{generate_wallet, keypair_from_base58, parse_pubkey};
