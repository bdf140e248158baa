// contracts/settlement/src/errors.rs - Settlement error codes

use soroban_sdk::contracterror;

/// Rejections of a single settlement operation. None leaves partial state behind.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// Pool configuration rejected at creation
    InvalidParameters = 1,
    /// Funding attempted after end time or after a proposal
    PoolClosed = 2,
    /// Caller is not the pool authority
    Unauthorized = 3,
    /// Proposal attempted before end time
    TooEarly = 4,
    /// A solution was already proposed
    AlreadyProposed = 5,
    /// No solution has been proposed yet
    NotProposed = 6,
    /// Dispute window has elapsed
    DisputeWindowClosed = 7,
    /// Pool is already under dispute
    AlreadyDisputed = 8,
    /// Losing-side balance below the dispute threshold
    InsufficientStakeToDispute = 9,
    /// Dispute window still open or pool disputed
    NotReady = 10,
    /// Pool is already finalized
    AlreadyFinalized = 11,
    /// No winning-side balance to redeem
    NothingToClaim = 12,
    /// Amount must be positive
    InvalidAmount = 13,
    /// No pool stored under the given id
    PoolNotFound = 14,
    /// Resolution requested while no dispute is open
    NotDisputed = 15,
    /// Claims open only after finalization
    NotFinalized = 16,
    /// Checked arithmetic overflowed
    ArithmeticOverflow = 17,
}
