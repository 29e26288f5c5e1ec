use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::commands::{
    balance, help, launch, pools, swap, wallet, CommandHandler, MyDialogue,
};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::interactor::balance_interactor::BalanceInteractorImpl;
use crate::presenter::balance_presenter::{BalancePresenter, BalancePresenterImpl};
use crate::view::balance_view::TelegramBalanceView;

// Main callback handler function
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    // Extract the callback data
    let callback_data = match q.clone().data {
        Some(data) => data,
        None => return Ok(()),
    };

    let message = match q.regular_message() {
        Some(message) => message.clone(),
        None => return Ok(()),
    };

    let chat_id = message.chat.id;

    // Get user's Telegram ID
    let telegram_id = q.from.id.0 as i64;

    info!(
        "Received callback: {} from user {}",
        callback_data, telegram_id
    );

    // Acknowledge the callback query to stop loading animation
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        info!("Failed to answer callback query: {}", err);
    }

    // Process the callback based on its type
    if callback_data == "menu" || callback_data == "refresh" {
        // Update the balance display in place
        handle_refresh(&bot, Some(message), telegram_id, services).await?;
    } else if callback_data == "create_wallet" {
        wallet::CreateWalletCommand::execute(bot, message, telegram_id, Some(dialogue), services)
            .await?;
    } else if callback_data == "address" {
        wallet::AddressCommand::execute(bot, message, telegram_id, Some(dialogue), services)
            .await?;
    } else if callback_data == "launch" {
        launch::LaunchCommand::execute(bot, message, telegram_id, Some(dialogue), services).await?;
    } else if callback_data == "launches" {
        launch::LaunchesCommand::execute(bot, message, telegram_id, Some(dialogue), services)
            .await?;
    } else if callback_data == "launch_confirm" {
        launch::handle_launch_confirmation(bot, chat_id, telegram_id, dialogue, services).await?;
    } else if callback_data == "launch_cancel" {
        launch::handle_launch_cancellation(bot, chat_id, dialogue, services).await?;
    } else if callback_data == "swap" {
        swap::SwapCommand::execute(bot, message, telegram_id, Some(dialogue), services).await?;
    } else if callback_data == "swap_execute" {
        swap::handle_swap_execution(bot, chat_id, telegram_id, dialogue, services).await?;
    } else if callback_data == "swap_cancel" {
        swap::handle_swap_cancellation(bot, chat_id, dialogue, services).await?;
    } else if callback_data == "pools" {
        pools::PoolsCommand::execute(bot, message, telegram_id, Some(dialogue), services).await?;
    } else if let Some(pool_id) = callback_data.strip_prefix("pool_") {
        pools::handle_pool_selection(bot, chat_id, pool_id, dialogue, services).await?;
    } else if callback_data == "balance" {
        balance::BalanceCommand::execute(bot, message, telegram_id, Some(dialogue), services)
            .await?;
    } else if callback_data == "help" {
        help::HelpCommand::execute(bot, message, telegram_id, Some(dialogue), services).await?;
    } else {
        bot.send_message(
            chat_id,
            format!("The {} feature is under development.", callback_data),
        )
        .await?;
    }

    Ok(())
}

// Function to handle refresh action
async fn handle_refresh(
    bot: &Bot,
    message: Option<Message>,
    telegram_id: i64,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    if let Some(msg) = message {
        let chat_id = msg.chat.id;

        let interactor = Arc::new(BalanceInteractorImpl::new(
            services.db_pool(),
            services.solana_client(),
            services.token_repository(),
        ));
        let view = Arc::new(TelegramBalanceView::new(bot.clone(), chat_id));
        let presenter = BalancePresenterImpl::new(interactor, view);

        // Update the existing message rather than sending a new one
        presenter.refresh_balances(telegram_id, Some(msg)).await?;
    }

    Ok(())
}
