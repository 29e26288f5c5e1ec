use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::interactor::pool_interactor::PoolInteractorImpl;
use crate::presenter::pool_presenter::{PoolPresenter, PoolPresenterImpl};
use crate::view::pool_view::TelegramPoolView;

fn make_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &Arc<ServiceContainer>,
) -> PoolPresenterImpl<PoolInteractorImpl, TelegramPoolView> {
    let interactor = Arc::new(PoolInteractorImpl::new(
        services.db_pool(),
        services.solana_client(),
        services.pool_service(),
    ));
    let view = Arc::new(TelegramPoolView::new(bot, chat_id));

    PoolPresenterImpl::new(interactor, view)
}

pub struct PoolsCommand;

impl CommandHandler for PoolsCommand {
    fn command_name() -> &'static str {
        "pools"
    }

    fn description() -> &'static str {
        "browse liquidity pools"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Pools command received from Telegram ID: {}", telegram_id);

        let presenter = make_presenter(bot, msg.chat.id, &services);
        presenter.show_pools().await?;

        Ok(())
    }
}

/// A pool was picked from the keyboard; ask for the deposit amounts
pub async fn handle_pool_selection(
    bot: Bot,
    chat_id: ChatId,
    pool_id: &str,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let presenter = make_presenter(bot, chat_id, &services);

    if let Some(pool_id) = presenter.select_pool(pool_id).await? {
        dialogue
            .update(State::AwaitingLiquidityAmounts { pool_id })
            .await?;
    }

    Ok(())
}

/// Deposit amounts arriving as a plain message
pub async fn receive_liquidity_amounts(
    bot: Bot,
    msg: Message,
    state: State,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let text = match msg.text() {
        Some(text) => text,
        None => return Ok(()),
    };

    let pool_id = match state {
        State::AwaitingLiquidityAmounts { pool_id } => pool_id,
        _ => return Ok(()),
    };

    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);

    dialogue.update(State::Start).await?;

    let presenter = make_presenter(bot, msg.chat.id, &services);
    presenter
        .process_deposit(telegram_id, &pool_id, text)
        .await?;

    Ok(())
}
