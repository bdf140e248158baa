// contracts/settlement/src/payout.rs - Winning-side redemption arithmetic

use crate::errors::PoolError;

/// Collateral owed for redeeming `balance` winning tokens.
///
/// payout = floor(balance * total_collateral / winning_supply)
///
/// Rounds down, so the summed payouts of every winner never exceed
/// `total_collateral`; the remainder is below the number of claimants.
pub fn compute_payout(
    balance: i128,
    winning_supply: i128,
    total_collateral: i128,
) -> Result<i128, PoolError> {
    if balance <= 0 {
        return Err(PoolError::NothingToClaim);
    }
    if winning_supply < balance || total_collateral < winning_supply {
        return Err(PoolError::ArithmeticOverflow);
    }

    balance
        .checked_mul(total_collateral)
        .and_then(|v| v.checked_div(winning_supply))
        .ok_or(PoolError::ArithmeticOverflow)
}
