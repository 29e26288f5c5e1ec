use crate::entity::TokenCreationParams;

/// Dialogue state for the multi-step flows. The launch wizard mirrors the
/// three steps of the original create form: basics, tokenomics, confirm.
#[derive(Clone, Default, Debug)]
pub enum State {
    #[default]
    Start,
    AwaitingTokenBasics,
    AwaitingTokenomics {
        name: String,
        symbol: String,
        description: String,
        image_url: Option<String>,
    },
    AwaitingLaunchConfirmation {
        params: TokenCreationParams,
    },
    AwaitingSwapDetails,
    AwaitingSwapConfirmation {
        amount: f64,
        source_mint: String,
        target_mint: String,
        slippage: f64,
    },
    AwaitingLiquidityAmounts {
        pool_id: String,
    },
}
