use crate::commands::ui;
use crate::entity::{TokenCreationParams, TokenCreationResult, TokenLaunch};
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{Message, ParseMode},
    Bot,
};

/// Progress stages shown while a launch transaction is in flight
pub const LAUNCH_STEPS: [&str; 5] = [
    "Preparing Transaction",
    "Creating Mint Account",
    "Setting Up Token Account",
    "Minting Initial Supply",
    "Finalizing Token",
];

#[async_trait]
pub trait LaunchView: Send + Sync {
    async fn prompt_token_basics(&self) -> Result<()>;
    async fn prompt_tokenomics(&self, name: &str, symbol: &str) -> Result<()>;
    async fn display_launch_preview(
        &self,
        params: &TokenCreationParams,
        estimated_cost: f64,
    ) -> Result<()>;
    async fn display_progress_start(&self) -> Result<Option<Message>>;
    async fn display_progress_step(&self, message: &Message, step: usize) -> Result<()>;
    async fn display_launch_success(
        &self,
        result: &TokenCreationResult,
        message: Option<Message>,
    ) -> Result<()>;
    async fn display_launch_failed(
        &self,
        error_message: String,
        message: Option<Message>,
    ) -> Result<()>;
    async fn display_launches(&self, launches: Vec<TokenLaunch>) -> Result<()>;
    async fn display_cancelled(&self) -> Result<()>;
    async fn display_validation_error(&self, error_message: String) -> Result<()>;
    async fn display_no_wallet(&self) -> Result<()>;
}

pub struct TelegramLaunchView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramLaunchView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    fn render_progress(step: usize) -> String {
        let mut text = "<b>Launching your token...</b>\n\n".to_string();

        for (index, label) in LAUNCH_STEPS.iter().enumerate() {
            let marker = if index < step {
                "✅"
            } else if index == step {
                "⏳"
            } else {
                "▫️"
            };
            text.push_str(&format!("{} {}\n", marker, label));
        }

        text
    }
}

#[async_trait]
impl LaunchView for TelegramLaunchView {
    async fn prompt_token_basics(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "Let's launch a token! Send the basics in one line:\n\n\
                <code>&lt;name&gt; | &lt;symbol&gt; | &lt;description&gt; [| &lt;image URL&gt;]</code>\n\n\
                Example: <code>Quantum Doge | QDOGE | The next big thing</code>",
            )
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn prompt_tokenomics(&self, name: &str, symbol: &str) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "<b>{}</b> ({}) - got it. Now the tokenomics:\n\n\
                    <code>&lt;total supply&gt; &lt;initial price&gt; &lt;vesting days&gt; &lt;team %&gt; [decimals]</code>\n\n\
                    Example: <code>1000000 0.0001 180 10 9</code>",
                    name, symbol
                ),
            )
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_launch_preview(
        &self,
        params: &TokenCreationParams,
        estimated_cost: f64,
    ) -> Result<()> {
        let image_line = match &params.image_url {
            Some(url) => format!("Image: {}\n", url),
            None => String::new(),
        };

        let text = format!(
            "<b>Review your launch</b>\n\n\
            Name: <b>{}</b>\n\
            Symbol: <b>{}</b>\n\
            Description: {}\n\
            {}Total supply: <b>{}</b>\n\
            Decimals: {}\n\
            Initial price: {} SOL\n\
            Vesting period: {} days\n\
            Team allocation: {}%\n\n\
            Estimated cost: <b>{:.6} SOL</b>",
            params.name,
            params.symbol,
            params.description,
            image_line,
            params.total_supply,
            params.decimals,
            params.initial_price,
            params.vesting_period,
            params.team_allocation,
            estimated_cost
        );

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(ui::create_launch_confirmation_keyboard())
            .await?;

        Ok(())
    }

    async fn display_progress_start(&self) -> Result<Option<Message>> {
        let message = self
            .bot
            .send_message(self.chat_id, Self::render_progress(0))
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(Some(message))
    }

    async fn display_progress_step(&self, message: &Message, step: usize) -> Result<()> {
        self.bot
            .edit_message_text(self.chat_id, message.id, Self::render_progress(step))
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_launch_success(
        &self,
        result: &TokenCreationResult,
        message: Option<Message>,
    ) -> Result<()> {
        let signature = result.transaction_signature.as_deref().unwrap_or("unknown");
        let text = format!(
            "🚀 Token launched!\n\n\
            Mint address: <code>{}</code>\n\
            Metadata: {}\n\
            Transaction signature: {}\n\
            Check transaction: https://explorer.solana.com/tx/{}",
            result.mint_address.as_deref().unwrap_or("unknown"),
            result.metadata_uri.as_deref().unwrap_or("-"),
            signature,
            signature
        );

        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .parse_mode(ParseMode::Html)
                .await?;
        } else {
            self.bot
                .send_message(self.chat_id, text)
                .parse_mode(ParseMode::Html)
                .await?;
        }

        Ok(())
    }

    async fn display_launch_failed(
        &self,
        error_message: String,
        message: Option<Message>,
    ) -> Result<()> {
        let text = format!(
            "❌ Token launch failed:\n{}\n\n\
            Possible reasons:\n\
            - Insufficient SOL to cover rent and fees\n\
            - Network issues with Solana\n\
            - Transaction rejected by the network",
            error_message
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

    async fn display_launches(&self, launches: Vec<TokenLaunch>) -> Result<()> {
        if launches.is_empty() {
            self.bot
                .send_message(
                    self.chat_id,
                    "You haven't launched any tokens yet. Use /launch to create one.",
                )
                .await?;

            return Ok(());
        }

        let mut text = "<b>Your launches</b>\n\n".to_string();

        for launch in &launches {
            text.push_str(&format!(
                "• <b>{}</b> ({}) - {}\n  Mint: <code>{}</code>\n  {}\n\n",
                launch.name,
                launch.symbol,
                launch.status,
                launch.mint_address.as_deref().unwrap_or("-"),
                launch.created_at.format("%Y-%m-%d %H:%M UTC")
            ));
        }

        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_cancelled(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Launch cancelled.")
            .await?;

        Ok(())
    }

    async fn display_validation_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!("❌ {}", error_message),
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_stages_match_the_creation_flow() {
        assert_eq!(
            LAUNCH_STEPS,
            [
                "Preparing Transaction",
                "Creating Mint Account",
                "Setting Up Token Account",
                "Minting Initial Supply",
                "Finalizing Token",
            ]
        );
    }

    #[test]
    fn render_marks_done_current_and_pending_stages() {
        let text = TelegramLaunchView::render_progress(2);

        assert!(text.contains("✅ Creating Mint Account"));
        assert!(text.contains("⏳ Setting Up Token Account"));
        assert!(text.contains("▫️ Finalizing Token"));
    }
}
