use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::interactor::swap_interactor::SwapInteractorImpl;
use crate::presenter::swap_presenter::{SwapPresenter, SwapPresenterImpl};
use crate::view::swap_view::TelegramSwapView;

fn make_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &Arc<ServiceContainer>,
) -> SwapPresenterImpl<SwapInteractorImpl, TelegramSwapView> {
    let interactor = Arc::new(SwapInteractorImpl::new(
        services.db_pool(),
        services.quote_service(),
        services.swap_service(),
    ));
    let view = Arc::new(TelegramSwapView::new(bot, chat_id));

    SwapPresenterImpl::new(interactor, view)
}

pub struct SwapCommand;

impl CommandHandler for SwapCommand {
    fn command_name() -> &'static str {
        "swap"
    }

    fn description() -> &'static str {
        "swap tokens (format: <amount> <source_token> <target_token> [<slippage>%])"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Swap command received from Telegram ID: {}", telegram_id);

        if let Some(dialogue) = dialogue {
            dialogue.update(State::AwaitingSwapDetails).await?;
        }

        let presenter = make_presenter(bot, chat_id, &services);
        presenter.start_swap().await?;

        Ok(())
    }
}

/// Swap details arriving as a plain message while the dialogue is waiting
pub async fn receive_swap_details(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let text = match msg.text() {
        Some(text) => text,
        None => return Ok(()),
    };

    let presenter = make_presenter(bot, msg.chat.id, &services);

    if let Some((amount, source_mint, target_mint, slippage)) =
        presenter.process_swap_details(text).await?
    {
        dialogue
            .update(State::AwaitingSwapConfirmation {
                amount,
                source_mint,
                target_mint,
                slippage,
            })
            .await?;
    }

    Ok(())
}

/// Reached from the route confirmation keyboard
pub async fn handle_swap_execution(
    bot: Bot,
    chat_id: ChatId,
    telegram_id: i64,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let (amount, source_mint, target_mint, slippage) = match dialogue.get().await? {
        Some(State::AwaitingSwapConfirmation {
            amount,
            source_mint,
            target_mint,
            slippage,
        }) => (amount, source_mint, target_mint, slippage),
        _ => {
            bot.send_message(chat_id, "There is no swap waiting for confirmation.")
                .await?;
            return Ok(());
        }
    };

    dialogue.update(State::Start).await?;

    let presenter = make_presenter(bot, chat_id, &services);
    presenter
        .confirm_swap(telegram_id, amount, &source_mint, &target_mint, slippage)
        .await?;

    Ok(())
}

pub async fn handle_swap_cancellation(
    bot: Bot,
    chat_id: ChatId,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    dialogue.update(State::Start).await?;

    let presenter = make_presenter(bot, chat_id, &services);
    presenter.cancel_swap().await?;

    Ok(())
}
