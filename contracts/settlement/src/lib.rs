#![no_std]
// lib.rs

pub mod access;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod payout;
pub mod pool;
pub mod storage;
pub mod types;

pub use errors::PoolError;
pub use pool::{PoolSettlement, PoolSettlementClient};
pub use types::{Config, Phase, Pool, Position, Side};
