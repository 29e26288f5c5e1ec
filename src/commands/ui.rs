use crate::entity::Pool;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub fn create_wallet_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("🚀 Launch Token", "launch"),
            InlineKeyboardButton::callback("Swap", "swap"),
            InlineKeyboardButton::callback("Pools", "pools"),
        ],
        vec![
            InlineKeyboardButton::callback("My Launches", "launches"),
            InlineKeyboardButton::callback("View Address", "address"),
            InlineKeyboardButton::callback("Balance", "balance"),
        ],
        vec![
            InlineKeyboardButton::callback("Help", "help"),
            InlineKeyboardButton::callback("🔄 Refresh", "refresh"),
        ],
    ])
}

pub fn create_launch_confirmation_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("✅ Launch", "launch_confirm"),
        InlineKeyboardButton::callback("❌ Cancel", "launch_cancel"),
    ]])
}

pub fn create_swap_confirmation_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("✅ Execute Swap", "swap_execute"),
        InlineKeyboardButton::callback("❌ Cancel", "swap_cancel"),
    ]])
}

pub fn create_pools_keyboard(pools: &[Pool]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = pools
        .iter()
        .map(|pool| {
            vec![InlineKeyboardButton::callback(
                format!(
                    "{}/{} ({})",
                    pool.token_a.symbol, pool.token_b.symbol, pool.pool_type
                ),
                format!("pool_{}", pool.id),
            )]
        })
        .collect();

    rows.push(vec![InlineKeyboardButton::callback(
        "← Back to Menu",
        "menu",
    )]);

    InlineKeyboardMarkup::new(rows)
}
