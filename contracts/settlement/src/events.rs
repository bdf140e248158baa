// contracts/settlement/src/events.rs - Published settlement transitions

use soroban_sdk::{contractevent, Address};

use crate::types::Side;

#[contractevent]
pub struct PoolCreatedEvent {
    pub pool_id: u64,
    pub authority: Address,
    pub yes_mint: Address,
    pub no_mint: Address,
    pub end_time: u64,
    pub dispute_period_seconds: u64,
    pub dispute_threshold: i128,
}

#[contractevent]
pub struct PositionMintedEvent {
    pub pool_id: u64,
    pub user: Address,
    pub side: Side,
    pub amount: i128,
    pub side_total: i128,
}

#[contractevent]
pub struct SolutionProposedEvent {
    pub pool_id: u64,
    pub winner: Side,
    pub dispute_period_end: u64,
}

#[contractevent]
pub struct SolutionDisputedEvent {
    pub pool_id: u64,
    pub disputer: Address,
    pub stake: i128,
    pub timestamp: u64,
}

#[contractevent]
pub struct DisputeResolvedEvent {
    pub pool_id: u64,
    pub winner: Side,
    pub timestamp: u64,
}

#[contractevent]
pub struct PoolFinalizedEvent {
    pub pool_id: u64,
    pub winner: Side,
    pub timestamp: u64,
}

#[contractevent]
pub struct WinningsClaimedEvent {
    pub pool_id: u64,
    pub user: Address,
    pub burned: i128,
    pub payout: i128,
}
