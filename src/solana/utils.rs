// Constants for conversion
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Convert lamports to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Convert SOL to lamports
pub fn sol_to_lamports(sol: f64) -> u64 {
    (sol * LAMPORTS_PER_SOL) as u64
}

/// Convert a UI amount with decimals to raw token units
pub fn convert_to_token_amount(amount: f64, decimals: u8) -> u64 {
    (amount * 10_f64.powi(decimals as i32)) as u64
}

/// Convert raw token units back to a UI amount
pub fn convert_from_token_amount(amount: u64, decimals: u8) -> f64 {
    amount as f64 / 10_f64.powi(decimals as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lamports_conversion_is_symmetric() {
        assert_eq!(sol_to_lamports(1.5), 1_500_000_000);
        assert_eq!(lamports_to_sol(1_500_000_000), 1.5);
    }

    #[test]
    fn token_amount_respects_decimals() {
        assert_eq!(convert_to_token_amount(1.0, 6), 1_000_000);
        assert_eq!(convert_to_token_amount(0.000001, 6), 1);
        assert_eq!(convert_from_token_amount(5_000, 5), 0.05);
    }
}
