use super::{ui, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode};

pub struct MenuCommand;

impl CommandHandler for MenuCommand {
    fn command_name() -> &'static str {
        "menu"
    }

    fn description() -> &'static str {
        "show the main menu"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _telegram_id: i64,
        _dialogue: Option<MyDialogue>,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        bot.send_message(msg.chat.id, "<b>Launchpad</b>\n\nWhat would you like to do?")
            .parse_mode(ParseMode::Html)
            .reply_markup(ui::create_wallet_menu_keyboard())
            .await?;

        Ok(())
    }
}
