use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    fn description() -> &'static str {
        "display this help message"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _telegram_id: i64,
        _dialogue: Option<MyDialogue>,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        bot.send_message(
            msg.chat.id,
            "Available commands:\n\
            /start - Start the bot and show the main menu\n\
            /create_wallet - Create a new Solana wallet\n\
            /address - Show your wallet address and QR code\n\
            /launch - Launch a new token (guided, three steps)\n\
            /launches - List your launched tokens\n\
            /swap - Swap tokens via the route aggregator\n\
            /pools - Browse liquidity pools and add liquidity\n\
            /balance - Check your wallet balances\n\
            /menu - Show the main menu\n\
            /help - Display this help message",
        )
        .await?;

        Ok(())
    }
}
