pub mod config;
pub mod models;
pub mod pool_service;
pub mod price_service;
pub mod quote_service;
pub mod swap_service;
pub mod token_repository;

// Re-export for convenience
pub use config::Config;
pub use models::{mint_from_symbol, popular_tokens, symbol_from_mint, SwapQuote};
pub use pool_service::{PoolService, StaticPoolService};
pub use price_service::{PriceService, StaticPriceService};
pub use quote_service::{AggregatorQuoteService, QuoteService};
pub use swap_service::{SwapService, SwapServiceImpl};
pub use token_repository::{HttpTokenRepository, TokenRepository};
