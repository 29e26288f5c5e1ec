use async_trait::async_trait;
use teloxide::prelude::*;

pub mod balance_view;
pub mod launch_view;
pub mod pool_view;
pub mod swap_view;
pub mod wallet_view;

// Base view trait
#[async_trait]
pub trait View: Send + Sync {
    // Each view implementation will define its specific methods
}
