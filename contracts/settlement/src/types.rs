// contracts/settlement/src/types.rs - Pool record, sides, phases and position views

use soroban_sdk::{contracttype, Address, String};

/// Outcome side of a binary pool, each backed by its own claim token
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Yes => Side::No,
            Side::No => Side::Yes,
        }
    }
}

/// Settlement phase, derived from the pool flags
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Positions may be minted until `end_time`; awaiting a proposal afterwards
    Funding,
    /// Winner proposed, dispute window running or elapsed
    Proposed,
    /// Proposal contested, waiting on the authority
    Disputed,
    /// Terminal, claims open
    Finalized,
}

/// Contract-wide configuration written once at deployment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Asset escrowed 1:1 against every claim token minted
    pub collateral_token: Address,
}

/// One prediction market and its running tallies
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub authority: Address,
    pub yes_mint: Address,
    pub no_mint: Address,
    pub collateral_token: Address,
    pub name: String,
    pub description: String,
    pub end_time: u64,
    pub created_at: u64,
    pub dispute_period_seconds: u64,
    pub dispute_threshold: i128,
    pub total_yes_tokens: i128,
    pub total_no_tokens: i128,
    pub solution_proposed: bool,
    pub solution_winner: Option<Side>,
    /// Ledger time of the proposal; zero before it
    pub dispute_period_start: u64,
    /// `dispute_period_start + dispute_period_seconds`; zero before proposal
    pub dispute_period_end: u64,
    pub is_disputed: bool,
    /// Most recent disputer, kept after resolution
    pub disputer: Option<Address>,
    pub is_finalized: bool,
    /// Collateral released to claimants so far
    pub total_paid_out: i128,
}

impl Pool {
    pub fn phase(&self) -> Phase {
        if self.is_finalized {
            Phase::Finalized
        } else if self.is_disputed {
            Phase::Disputed
        } else if self.solution_proposed {
            Phase::Proposed
        } else {
            Phase::Funding
        }
    }

    /// Funding is open strictly before `end_time` and only until a proposal lands.
    pub fn accepts_positions(&self, now: u64) -> bool {
        now < self.end_time && !self.solution_proposed
    }

    pub fn side_total(&self, side: Side) -> i128 {
        match side {
            Side::Yes => self.total_yes_tokens,
            Side::No => self.total_no_tokens,
        }
    }

    /// Both sides are collateralized 1:1, so collateral equals the summed supplies.
    pub fn total_collateral(&self) -> Option<i128> {
        self.total_yes_tokens.checked_add(self.total_no_tokens)
    }
}

/// A user's claim-token balances in one pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub yes: i128,
    pub no: i128,
}
