use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::{LaunchpadError, State};
use crate::interactor::launch_interactor::LaunchInteractorImpl;
use crate::presenter::launch_presenter::{LaunchPresenter, LaunchPresenterImpl};
use crate::view::launch_view::TelegramLaunchView;

fn make_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &Arc<ServiceContainer>,
) -> LaunchPresenterImpl<LaunchInteractorImpl, TelegramLaunchView> {
    let interactor = Arc::new(LaunchInteractorImpl::new(
        services.db_pool(),
        services.solana_client(),
        services.launch_service(),
    ));
    let view = Arc::new(TelegramLaunchView::new(bot, chat_id));

    LaunchPresenterImpl::new(interactor, view)
}

pub struct LaunchCommand;

impl CommandHandler for LaunchCommand {
    fn command_name() -> &'static str {
        "launch"
    }

    fn description() -> &'static str {
        "launch a new token"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Launch command received from Telegram ID: {}", telegram_id);

        if services.launch_guard().is_active(telegram_id) {
            bot.send_message(chat_id, LaunchpadError::LaunchInProgress.to_string())
                .await?;
            return Ok(());
        }

        if let Some(dialogue) = dialogue {
            dialogue.update(State::AwaitingTokenBasics).await?;
        }

        let presenter = make_presenter(bot, chat_id, &services);
        presenter.start_launch().await?;

        Ok(())
    }
}

pub struct LaunchesCommand;

impl CommandHandler for LaunchesCommand {
    fn command_name() -> &'static str {
        "launches"
    }

    fn description() -> &'static str {
        "list your launched tokens"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let presenter = make_presenter(bot, msg.chat.id, &services);
        presenter.show_launches(telegram_id).await?;

        Ok(())
    }
}

/// First wizard step: name, symbol, description and optional image URL
pub async fn receive_token_basics(
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

    if let Some((name, symbol, description, image_url)) =
        presenter.process_token_basics(text).await?
    {
        dialogue
            .update(State::AwaitingTokenomics {
                name,
                symbol,
                description,
                image_url,
            })
            .await?;
    }

    Ok(())
}

/// Second wizard step: supply, price, vesting, team allocation
pub async fn receive_tokenomics(
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

    let (name, symbol, description, image_url) = match state {
        State::AwaitingTokenomics {
            name,
            symbol,
            description,
            image_url,
        } => (name, symbol, description, image_url),
        _ => return Ok(()),
    };

    let presenter = make_presenter(bot, msg.chat.id, &services);

    if let Some(params) = presenter
        .process_tokenomics((name, symbol, description, image_url), text)
        .await?
    {
        dialogue
            .update(State::AwaitingLaunchConfirmation { params })
            .await?;
    }

    Ok(())
}

/// Final step, reached from the confirmation keyboard
pub async fn handle_launch_confirmation(
    bot: Bot,
    chat_id: ChatId,
    telegram_id: i64,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let params = match dialogue.get().await? {
        Some(State::AwaitingLaunchConfirmation { params }) => params,
        _ => {
            bot.send_message(chat_id, "There is no launch waiting for confirmation.")
                .await?;
            return Ok(());
        }
    };

    dialogue.update(State::Start).await?;

    // One creation attempt in flight per chat
    let guard = services.launch_guard();
    if let Err(e) = guard.begin(telegram_id) {
        bot.send_message(chat_id, e.to_string()).await?;
        return Ok(());
    }

    let presenter = make_presenter(bot, chat_id, &services);
    let outcome = presenter.confirm_launch(telegram_id, params).await;

    guard.finish(telegram_id);

    outcome
}

pub async fn handle_launch_cancellation(
    bot: Bot,
    chat_id: ChatId,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    dialogue.update(State::Start).await?;

    let presenter = make_presenter(bot, chat_id, &services);
    presenter.cancel_launch().await?;

    Ok(())
}
