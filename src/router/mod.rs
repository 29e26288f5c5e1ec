use async_trait::async_trait;
use std::sync::Arc;
use teloxide::{
    dispatching::dialogue::Dialogue, dispatching::dialogue::InMemStorage,
    dispatching::UpdateHandler, prelude::*,
};

use crate::commands::{self, callback::handle_callback, BotCommands, CommandHandler};
use crate::di::ServiceContainer;
use crate::entity::State;

type MyDialogue = Dialogue<State, InMemStorage<State>>;

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

macro_rules! command_branch {
    ($services:expr, $($variant:ident)::+, $handler:ty) => {{
        let services = $services.clone();
        dptree::case![$($variant)::+].endpoint(move |bot: Bot, msg: Message, dialogue: MyDialogue| {
            let services_local = services.clone();
            let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
            async move {
                <$handler>::execute(bot, msg, telegram_id, Some(dialogue), services_local).await
            }
        })
    }};
}

#[async_trait]
impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;
        use teloxide::dispatching::UpdateFilterExt;

        let services = &self.services;
        let services_for_callbacks = self.services.clone();

        // Use BotCommands enum with teloxide's command filter
        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(command_branch!(
                services,
                BotCommands::Start,
                commands::start::StartCommand
            ))
            .branch(command_branch!(
                services,
                BotCommands::CreateWallet,
                commands::wallet::CreateWalletCommand
            ))
            .branch(command_branch!(
                services,
                BotCommands::Address,
                commands::wallet::AddressCommand
            ))
            .branch(command_branch!(
                services,
                BotCommands::Launch,
                commands::launch::LaunchCommand
            ))
            .branch(command_branch!(
                services,
                BotCommands::Launches,
                commands::launch::LaunchesCommand
            ))
            .branch(command_branch!(
                services,
                BotCommands::Swap,
                commands::swap::SwapCommand
            ))
            .branch(command_branch!(
                services,
                BotCommands::Pools,
                commands::pools::PoolsCommand
            ))
            .branch(command_branch!(
                services,
                BotCommands::Balance,
                commands::balance::BalanceCommand
            ))
            .branch(command_branch!(
                services,
                BotCommands::Help,
                commands::help::HelpCommand
            ))
            .branch(command_branch!(
                services,
                BotCommands::Menu,
                commands::menu::MenuCommand
            ));

        let services_for_dialog1 = self.services.clone();
        let services_for_dialog2 = self.services.clone();
        let services_for_dialog3 = self.services.clone();
        let services_for_dialog4 = self.services.clone();

        let message_handler =
            Update::filter_message().branch(command_handler).branch(
                dptree::entry()
                    .branch(case![State::AwaitingTokenBasics].endpoint(
                        move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                            let services = services_for_dialog1.clone();
                            async move {
                                commands::launch::receive_token_basics(bot, msg, dialogue, services)
                                    .await
                            }
                        },
                    ))
                    .branch(
                        case![State::AwaitingTokenomics {
                            name,
                            symbol,
                            description,
                            image_url
                        }]
                        .endpoint(
                            move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                                let services = services_for_dialog2.clone();
                                async move {
                                    commands::launch::receive_tokenomics(
                                        bot, msg, state, dialogue, services,
                                    )
                                    .await
                                }
                            },
                        ),
                    )
                    .branch(case![State::AwaitingSwapDetails].endpoint(
                        move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                            let services = services_for_dialog3.clone();
                            async move {
                                commands::swap::receive_swap_details(bot, msg, dialogue, services)
                                    .await
                            }
                        },
                    ))
                    .branch(case![State::AwaitingLiquidityAmounts { pool_id }].endpoint(
                        move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                            let services = services_for_dialog4.clone();
                            async move {
                                commands::pools::receive_liquidity_amounts(
                                    bot, msg, state, dialogue, services,
                                )
                                .await
                            }
                        },
                    )),
            );

        // Add callback query handler for our buttons
        let callback_handler = Update::filter_callback_query().endpoint(
            move |bot: Bot, q: CallbackQuery, dialogue: MyDialogue| {
                let services = services_for_callbacks.clone();
                async move { handle_callback(bot, q, dialogue, services).await }
            },
        );

        teloxide::dispatching::dialogue::enter::<Update, InMemStorage<State>, State, _>()
            .branch(message_handler)
            .branch(callback_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solana::client::create_solana_client;
    use sqlx::postgres::PgPoolOptions;

    #[tokio::test]
    async fn handler_tree_builds_for_every_command() {
        let db_pool = Arc::new(
            PgPoolOptions::new()
                .connect_lazy("postgres://localhost/launchpad")
                .unwrap(),
        );
        let solana_client = create_solana_client("http://127.0.0.1:8899").unwrap();

        let services = Arc::new(ServiceContainer::new(db_pool, solana_client));
        let router = TelegramRouter::new(services);

        let _handler = router.setup_handlers();
    }
}
