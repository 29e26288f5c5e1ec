use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use sqlx::PgPool;
use teloxide::{dispatching::dialogue::InMemStorage, Bot};

pub mod commands;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod solana;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use commands::*;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use router::*;
pub use solana::*;
pub use utils::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire up the application components: service container, dialogue storage
/// and the update router.
pub fn create_application(
    bot: Bot,
    db_pool: Arc<PgPool>,
    solana_client: Arc<RpcClient>,
) -> (
    TelegramRouter,
    Bot,
    Arc<ServiceContainer>,
    Arc<InMemStorage<entity::State>>,
) {
    let service_container = Arc::new(ServiceContainer::new(db_pool, solana_client));
    let storage = InMemStorage::<entity::State>::new();
    let router = TelegramRouter::new(service_container.clone());

    (router, bot, service_container, storage)
}
