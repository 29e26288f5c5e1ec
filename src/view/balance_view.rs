use crate::commands::ui;
use crate::interactor::balance_interactor::WalletBalances;
use anyhow::Result;
use async_trait::async_trait;
use chrono;
use teloxide::{
    prelude::*,
    types::{Message, ParseMode},
    Bot,
};

#[async_trait]
pub trait BalanceView: Send + Sync {
    async fn display_loading(&self) -> Result<Option<Message>>;
    async fn display_loading_update(&self, message: Message) -> Result<Option<Message>>;
    async fn display_balances(&self, balances: WalletBalances, message: Option<Message>)
        -> Result<()>;
    async fn display_no_wallet(&self, message: Option<Message>) -> Result<()>;
    async fn display_error(&self, error_message: String, message: Option<Message>) -> Result<()>;
}

pub struct TelegramBalanceView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramBalanceView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    fn format_token_lines(tokens: &[(String, f64)]) -> String {
        let mut lines = String::new();

        for (symbol, amount) in tokens {
            if *amount > 0.0 {
                lines.push_str(&format!("• <b>{}</b>: {:.6}\n", symbol, amount));
            }
        }

        if lines.is_empty() {
            return String::new();
        }

        format!("\n<b>Token Balances</b>\n\n{}", lines)
    }
}

#[async_trait]
impl BalanceView for TelegramBalanceView {
    async fn display_loading(&self) -> Result<Option<Message>> {
        let message = self
            .bot
            .send_message(self.chat_id, "Fetching balance and token information...")
            .await?;

        Ok(Some(message))
    }

    async fn display_loading_update(&self, message: Message) -> Result<Option<Message>> {
        let updated_msg = self
            .bot
            .edit_message_text(
                self.chat_id,
                message.id,
                "Refreshing balance information...",
            )
            .await?;

        Ok(Some(updated_msg))
    }

    async fn display_balances(
        &self,
        balances: WalletBalances,
        message: Option<Message>,
    ) -> Result<()> {
        let text = format!(
            "<b>Wallet</b>\n\
            <code>{}</code>\n\n\
            Balance: <b>{:.6}</b> SOL\n\
            {}\n\
            Updated: {} UTC",
            balances.address,
            balances.sol,
            Self::format_token_lines(&balances.tokens),
            chrono::Utc::now().format("%H:%M:%S")
        );

        let keyboard = ui::create_wallet_menu_keyboard();

        // Update existing message or send a new one
        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboard)
                .await?;
        } else {
            self.bot
                .send_message(self.chat_id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboard)
                .await?;
        }

        Ok(())
    }

    async fn display_no_wallet(&self, message: Option<Message>) -> Result<()> {
        let text = "You don't have a wallet yet. Use /create_wallet to create a new wallet.";
        let keyboard = ui::create_wallet_menu_keyboard();

        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .reply_markup(keyboard)
                .await?;
        } else {
            self.bot
                .send_message(self.chat_id, text)
                .reply_markup(keyboard)
                .await?;
        }

        Ok(())
    }

    async fn display_error(&self, error_message: String, message: Option<Message>) -> Result<()> {
        let text = format!("Error: {}", error_message);

        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .await?;
        } else {
            self.bot.send_message(self.chat_id, text).await?;
        }

        Ok(())
    }
}
