use crate::commands::ui;
use crate::entity::Pool;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{Message, ParseMode},
    Bot,
};

#[async_trait]
pub trait PoolView: Send + Sync {
    async fn display_pools(&self, pools: Vec<Pool>) -> Result<()>;
    async fn prompt_deposit_amounts(&self, pool: &Pool) -> Result<()>;
    async fn display_depositing(&self, pool: &Pool) -> Result<Option<Message>>;
    async fn display_deposit_success(
        &self,
        pool: &Pool,
        amount_a: f64,
        amount_b: f64,
        position_id: &str,
        message: Option<Message>,
    ) -> Result<()>;
    async fn display_validation_error(&self, error_message: String) -> Result<()>;
    async fn display_no_wallet(&self) -> Result<()>;
    async fn display_error(&self, error_message: String, message: Option<Message>) -> Result<()>;
}

pub struct TelegramPoolView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramPoolView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl PoolView for TelegramPoolView {
    async fn display_pools(&self, pools: Vec<Pool>) -> Result<()> {
        let mut text = "<b>Liquidity pools</b>\n\n".to_string();

        for pool in &pools {
            text.push_str(&format!(
                "<b>{}/{}</b> · {}\n\
                Fee: {}% · Bin step: {}\n\
                Liquidity: ${} · 24h volume: ${} · APR: {}%\n\n",
                pool.token_a.symbol,
                pool.token_b.symbol,
                pool.pool_type,
                pool.fee,
                pool.bin_step,
                pool.liquidity,
                pool.volume_24h,
                pool.apr
            ));
        }

        text.push_str("Pick a pool to add liquidity:");

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(ui::create_pools_keyboard(&pools))
            .await?;

        Ok(())
    }

    async fn prompt_deposit_amounts(&self, pool: &Pool) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "Adding liquidity to <b>{}/{}</b>.\n\n\
                    Send the deposit amounts: <code>&lt;{} amount&gt; [&lt;{} amount&gt;]</code>\n\n\
                    Leave the second amount out to match the pool's current ratio.",
                    pool.token_a.symbol,
                    pool.token_b.symbol,
                    pool.token_a.symbol,
                    pool.token_b.symbol
                ),
            )
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_depositing(&self, pool: &Pool) -> Result<Option<Message>> {
        let message = self
            .bot
            .send_message(
                self.chat_id,
                format!(
                    "Adding liquidity to {}/{}...",
                    pool.token_a.symbol, pool.token_b.symbol
                ),
            )
            .await?;

        Ok(Some(message))
    }

    async fn display_deposit_success(
        &self,
        pool: &Pool,
        amount_a: f64,
        amount_b: f64,
        position_id: &str,
        message: Option<Message>,
    ) -> Result<()> {
        let text = format!(
            "✅ Liquidity added to {}/{}!\n\
            Deposited: {:.6} {} + {:.6} {}\n\
            Position id: {}",
            pool.token_a.symbol,
            pool.token_b.symbol,
            amount_a,
            pool.token_a.symbol,
            amount_b,
            pool.token_b.symbol,
            position_id
        );

        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .await?;
        } else {
            self.bot.send_message(self.chat_id, text).await?;
        }

        Ok(())
    }

    async fn display_validation_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!("❌ Invalid deposit: {}", error_message),
            )
            .await?;

        Ok(())
    }

    async fn display_no_wallet(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "You don't have a wallet yet. Use /create_wallet to create a new wallet.",
            )
            .await?;

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
