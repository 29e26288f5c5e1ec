use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolType {
    Dlmm,
    Clmm,
    Amm,
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Dlmm => write!(f, "DLMM"),
            Self::Clmm => write!(f, "CLMM"),
            Self::Amm => write!(f, "AMM"),
        }
    }
}

/// Descriptive liquidity pool record. Sourced from the static pool table;
/// no persistence and no lifecycle beyond display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    pub token_a: Token,
    pub token_b: Token,
    pub fee: f64,
    pub bin_step: u16,
    pub liquidity: f64,
    pub volume_24h: f64,
    pub apr: f64,
    pub pool_type: PoolType,
}
