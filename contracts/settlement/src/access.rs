// contracts/settlement/src/access.rs - Role checks gating settlement transitions

use soroban_sdk::Address;

use crate::errors::PoolError;
use crate::ledger::ClaimLedger;
use crate::types::Pool;

/// Capability an operation requires of its caller
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// The pool authority
    Authority,
    /// Holder of at least `dispute_threshold` tokens on the side opposite the proposed winner
    LoserAboveThreshold,
    /// Holder of a non-zero balance on the winning side
    Winner,
    Anyone,
}

/// Evaluates `role` for `caller` against current state. Balances are read
/// live, never from a snapshot. Returns the stake backing the role (zero for
/// `Authority` and `Anyone`).
pub fn require_role(
    ledger: &ClaimLedger,
    pool: &Pool,
    caller: &Address,
    role: Role,
) -> Result<i128, PoolError> {
    match role {
        Role::Anyone => Ok(0),
        Role::Authority => {
            if *caller != pool.authority {
                return Err(PoolError::Unauthorized);
            }
            Ok(0)
        }
        Role::LoserAboveThreshold => {
            let winner = pool.solution_winner.ok_or(PoolError::NotProposed)?;
            let stake = ledger.balance_of(winner.opposite(), caller);
            if stake < pool.dispute_threshold {
                return Err(PoolError::InsufficientStakeToDispute);
            }
            Ok(stake)
        }
        Role::Winner => {
            let winner = pool.solution_winner.ok_or(PoolError::NotProposed)?;
            let balance = ledger.balance_of(winner, caller);
            if balance <= 0 {
                return Err(PoolError::NothingToClaim);
            }
            Ok(balance)
        }
    }
}
