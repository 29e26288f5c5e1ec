use crate::commands::ui;
use crate::solana::dex::models::SwapQuote;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{Message, ParseMode},
    Bot,
};

#[async_trait]
pub trait SwapView: Send + Sync {
    async fn display_usage(&self) -> Result<()>;
    async fn display_quotes(
        &self,
        quotes: &[SwapQuote],
        amount: f64,
        source_token: &str,
        target_token: &str,
    ) -> Result<()>;
    async fn display_processing(
        &self,
        source_token: &str,
        target_token: &str,
        amount: f64,
    ) -> Result<Option<Message>>;
    async fn display_swap_success(
        &self,
        source_token: &str,
        target_token: &str,
        amount_in: f64,
        amount_out: f64,
        signature: &str,
        message: Option<Message>,
    ) -> Result<()>;
    async fn display_swap_error(
        &self,
        source_token: &str,
        target_token: &str,
        amount_in: f64,
        error_message: String,
        message: Option<Message>,
    ) -> Result<()>;
    async fn display_validation_error(&self, error_message: String) -> Result<()>;
    async fn display_cancelled(&self) -> Result<()>;
    async fn display_no_wallet(&self) -> Result<()>;
}

pub struct TelegramSwapView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSwapView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl SwapView for TelegramSwapView {
    async fn display_usage(&self) -> Result<()> {
        self.bot.send_message(
            self.chat_id,
            "Send swap details in this format: <amount> <source_token> <target_token> [<slippage>%]\n\n\
             Example: 1.5 SOL USDC 0.5%"
        ).await?;

        Ok(())
    }

    async fn display_quotes(
        &self,
        quotes: &[SwapQuote],
        amount: f64,
        source_token: &str,
        target_token: &str,
    ) -> Result<()> {
        let mut text = format!(
            "<b>Routes for {} {} → {}</b>\n\n",
            amount, source_token, target_token
        );

        for quote in quotes {
            let best_marker = if quote.best { " ⭐ best" } else { "" };
            text.push_str(&format!(
                "<b>{}</b>{}\n\
                Out: ~{:.6} {}\n\
                Price impact: {}% · Fee: {}% · ETA: {}\n\n",
                quote.venue,
                best_marker,
                quote.out_amount,
                target_token,
                quote.price_impact,
                quote.fee,
                quote.estimated_time
            ));
        }

        text.push_str("Execute with the best route?");

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(ui::create_swap_confirmation_keyboard())
            .await?;

        Ok(())
    }

    async fn display_processing(
        &self,
        source_token: &str,
        target_token: &str,
        amount: f64,
    ) -> Result<Option<Message>> {
        let message = self
            .bot
            .send_message(
                self.chat_id,
                format!(
                    "Swapping {} {} to {}... Submitting to the best route...",
                    amount, source_token, target_token
                ),
            )
            .await?;

        Ok(Some(message))
    }

    async fn display_swap_success(
        &self,
        source_token: &str,
        target_token: &str,
        amount_in: f64,
        amount_out: f64,
        signature: &str,
        message: Option<Message>,
    ) -> Result<()> {
        let text = format!(
            "✅ Swap completed successfully!\n\
            Sent: {} {}\n\
            Received: ~{:.6} {}\n\
            Transaction signature: {}\n\
            Check transaction: https://explorer.solana.com/tx/{}",
            amount_in, source_token, amount_out, target_token, signature, signature
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

    async fn display_swap_error(
        &self,
        source_token: &str,
        target_token: &str,
        amount_in: f64,
        error_message: String,
        message: Option<Message>,
    ) -> Result<()> {
        let text = format!(
            "❌ Error performing swap of {} {} to {}:\n{}\n\n\
            Possible reasons:\n\
            - Insufficient funds for transaction fees\n\
            - No route between the selected tokens\n\
            - Transaction rejected by the network",
            amount_in, source_token, target_token, error_message
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
                format!("❌ Invalid swap parameters: {}", error_message),
            )
            .await?;

        Ok(())
    }

    async fn display_cancelled(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Swap cancelled.")
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
}
