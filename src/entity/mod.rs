mod launch;
mod launchpad_error;
mod pool;
mod state;
mod swap_outcome;
mod token;
mod user;

pub use launch::{TokenCreationParams, TokenCreationResult, TokenLaunch};
pub use launchpad_error::LaunchpadError;
pub use pool::{Pool, PoolType};
pub use state::State;
pub use swap_outcome::SwapOutcome;
pub use token::Token;
pub use user::User;
