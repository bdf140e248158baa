// contracts/settlement/src/pool.rs - Binary Pool Settlement Contract
// Handles pool creation, position funding, outcome proposal, disputes, finalization and claims

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::access::{require_role, Role};
use crate::errors::PoolError;
use crate::events::{
    DisputeResolvedEvent, PoolCreatedEvent, PoolFinalizedEvent, PositionMintedEvent,
    SolutionDisputedEvent, SolutionProposedEvent, WinningsClaimedEvent,
};
use crate::ledger::{is_mint_authority, ClaimLedger};
use crate::payout::compute_payout;
use crate::storage::{self, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use crate::types::{Config, Phase, Pool, Position, Side};

/// POOL SETTLEMENT - Runs every binary pool from funding through payout
#[contract]
pub struct PoolSettlement;

#[contractimpl]
impl PoolSettlement {
    /// Store the collateral asset every pool escrows against its claim tokens
    pub fn __constructor(env: Env, collateral_token: Address) {
        storage::set_config(&env, &Config { collateral_token });
    }

    /// Create a pool in the Funding phase and return its id
    ///
    /// - Require authority authentication
    /// - Validate end_time is strictly in the future
    /// - Validate dispute period is non-zero and threshold non-negative
    /// - Validate name/description lengths
    /// - Validate both claim mints are distinct, unused, and administered by this contract
    /// - Emit PoolCreated
    #[allow(clippy::too_many_arguments)]
    pub fn create_pool(
        env: Env,
        authority: Address,
        end_time: u64,
        dispute_period_seconds: u64,
        dispute_threshold: i128,
        name: String,
        description: String,
        yes_mint: Address,
        no_mint: Address,
    ) -> Result<u64, PoolError> {
        authority.require_auth();

        let now = env.ledger().timestamp();
        if end_time <= now || dispute_period_seconds == 0 || dispute_threshold < 0 {
            return Err(PoolError::InvalidParameters);
        }
        if name.len() > MAX_NAME_LEN || description.len() > MAX_DESCRIPTION_LEN {
            return Err(PoolError::InvalidParameters);
        }

        let config = storage::config(&env);
        if yes_mint == no_mint
            || yes_mint == config.collateral_token
            || no_mint == config.collateral_token
        {
            return Err(PoolError::InvalidParameters);
        }
        if storage::is_mint_in_use(&env, &yes_mint) || storage::is_mint_in_use(&env, &no_mint) {
            return Err(PoolError::InvalidParameters);
        }
        if !is_mint_authority(&env, &yes_mint) || !is_mint_authority(&env, &no_mint) {
            return Err(PoolError::InvalidParameters);
        }

        let pool_id = storage::next_pool_id(&env)?;
        let pool = Pool {
            authority: authority.clone(),
            yes_mint: yes_mint.clone(),
            no_mint: no_mint.clone(),
            collateral_token: config.collateral_token,
            name,
            description,
            end_time,
            created_at: now,
            dispute_period_seconds,
            dispute_threshold,
            total_yes_tokens: 0,
            total_no_tokens: 0,
            solution_proposed: false,
            solution_winner: None,
            dispute_period_start: 0,
            dispute_period_end: 0,
            is_disputed: false,
            disputer: None,
            is_finalized: false,
            total_paid_out: 0,
        };

        storage::save_pool(&env, pool_id, &pool);
        storage::bind_mint(&env, &yes_mint, pool_id);
        storage::bind_mint(&env, &no_mint, pool_id);

        PoolCreatedEvent {
            pool_id,
            authority,
            yes_mint,
            no_mint,
            end_time,
            dispute_period_seconds,
            dispute_threshold,
        }
        .publish(&env);

        Ok(pool_id)
    }

    /// Buy `amount` claim tokens of `side`, escrowing the same amount of collateral
    ///
    /// Closed funding wins over a bad amount: once closed, every call fails PoolClosed.
    pub fn mint_position(
        env: Env,
        pool_id: u64,
        user: Address,
        amount: i128,
        side: Side,
    ) -> Result<Pool, PoolError> {
        user.require_auth();

        let mut pool = storage::load_pool(&env, pool_id)?;
        if !pool.accepts_positions(env.ledger().timestamp()) {
            return Err(PoolError::PoolClosed);
        }
        if amount <= 0 {
            return Err(PoolError::InvalidAmount);
        }

        let side_total = pool
            .side_total(side)
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        match side {
            Side::Yes => pool.total_yes_tokens = side_total,
            Side::No => pool.total_no_tokens = side_total,
        }
        pool.total_collateral().ok_or(PoolError::ArithmeticOverflow)?;

        let ledger = ClaimLedger::for_pool(&env, &pool);
        ledger.deposit_collateral(&user, amount);
        ledger.mint(side, &user, amount);

        storage::save_pool(&env, pool_id, &pool);

        PositionMintedEvent {
            pool_id,
            user,
            side,
            amount,
            side_total,
        }
        .publish(&env);

        Ok(pool)
    }

    /// Authority proposes the winning side once funding has ended
    ///
    /// Opens the dispute window: [now, now + dispute_period_seconds)
    pub fn propose_solution(
        env: Env,
        pool_id: u64,
        caller: Address,
        winner: Side,
    ) -> Result<Pool, PoolError> {
        caller.require_auth();

        let mut pool = storage::load_pool(&env, pool_id)?;
        let ledger = ClaimLedger::for_pool(&env, &pool);
        require_role(&ledger, &pool, &caller, Role::Authority)?;

        if pool.solution_proposed {
            return Err(PoolError::AlreadyProposed);
        }
        let now = env.ledger().timestamp();
        if now < pool.end_time {
            return Err(PoolError::TooEarly);
        }
        let dispute_period_end = now
            .checked_add(pool.dispute_period_seconds)
            .ok_or(PoolError::ArithmeticOverflow)?;

        pool.solution_proposed = true;
        pool.solution_winner = Some(winner);
        pool.dispute_period_start = now;
        pool.dispute_period_end = dispute_period_end;
        storage::save_pool(&env, pool_id, &pool);

        SolutionProposedEvent {
            pool_id,
            winner,
            dispute_period_end,
        }
        .publish(&env);

        Ok(pool)
    }

    /// Contest the proposed winner
    ///
    /// - Validate a solution is proposed and not already disputed
    /// - Validate the dispute window is still open
    /// - Require the caller's current losing-side balance >= dispute_threshold
    /// - Block finalization until the authority resolves
    pub fn dispute_solution(env: Env, pool_id: u64, caller: Address) -> Result<Pool, PoolError> {
        caller.require_auth();

        let mut pool = storage::load_pool(&env, pool_id)?;
        if !pool.solution_proposed {
            return Err(PoolError::NotProposed);
        }
        if pool.is_disputed {
            return Err(PoolError::AlreadyDisputed);
        }
        let now = env.ledger().timestamp();
        if now >= pool.dispute_period_end {
            return Err(PoolError::DisputeWindowClosed);
        }

        let ledger = ClaimLedger::for_pool(&env, &pool);
        let stake = require_role(&ledger, &pool, &caller, Role::LoserAboveThreshold)?;

        pool.is_disputed = true;
        pool.disputer = Some(caller.clone());
        storage::save_pool(&env, pool_id, &pool);

        SolutionDisputedEvent {
            pool_id,
            disputer: caller,
            stake,
            timestamp: now,
        }
        .publish(&env);

        Ok(pool)
    }

    /// Authority settles an open dispute by naming the winner
    ///
    /// The dispute window keeps its original end; a further dispute is
    /// possible only while that window is still open.
    pub fn resolve_dispute(
        env: Env,
        pool_id: u64,
        caller: Address,
        new_winner: Side,
    ) -> Result<Pool, PoolError> {
        caller.require_auth();

        let mut pool = storage::load_pool(&env, pool_id)?;
        let ledger = ClaimLedger::for_pool(&env, &pool);
        require_role(&ledger, &pool, &caller, Role::Authority)?;

        if !pool.is_disputed {
            return Err(PoolError::NotDisputed);
        }

        pool.solution_winner = Some(new_winner);
        pool.is_disputed = false;
        storage::save_pool(&env, pool_id, &pool);

        DisputeResolvedEvent {
            pool_id,
            winner: new_winner,
            timestamp: env.ledger().timestamp(),
        }
        .publish(&env);

        Ok(pool)
    }

    /// Lock the outcome and open claims
    ///
    /// Anyone may call once the dispute window has elapsed with no open dispute.
    pub fn finalize_pool(env: Env, pool_id: u64, caller: Address) -> Result<Pool, PoolError> {
        caller.require_auth();

        let mut pool = storage::load_pool(&env, pool_id)?;
        let ledger = ClaimLedger::for_pool(&env, &pool);
        require_role(&ledger, &pool, &caller, Role::Anyone)?;

        if pool.is_finalized {
            return Err(PoolError::AlreadyFinalized);
        }
        if !pool.solution_proposed {
            return Err(PoolError::NotProposed);
        }
        let now = env.ledger().timestamp();
        if pool.is_disputed || now < pool.dispute_period_end {
            return Err(PoolError::NotReady);
        }

        let winner = pool.solution_winner.ok_or(PoolError::NotProposed)?;
        pool.is_finalized = true;
        storage::save_pool(&env, pool_id, &pool);

        PoolFinalizedEvent {
            pool_id,
            winner,
            timestamp: now,
        }
        .publish(&env);

        Ok(pool)
    }

    /// Redeem the caller's whole winning-side balance for collateral
    ///
    /// # Payout Calculation
    /// - Payout = floor(balance * (total_yes + total_no) / winning_total)
    /// - No fee; rounding dust stays in escrow
    ///
    /// The winning balance is burned, so a second claim fails NothingToClaim.
    /// Losing-side balances are left in place and redeem for nothing.
    pub fn claim_winnings(env: Env, pool_id: u64, user: Address) -> Result<i128, PoolError> {
        user.require_auth();

        let mut pool = storage::load_pool(&env, pool_id)?;
        if !pool.is_finalized {
            return Err(PoolError::NotFinalized);
        }

        let ledger = ClaimLedger::for_pool(&env, &pool);
        let balance = require_role(&ledger, &pool, &user, Role::Winner)?;
        let winner = pool.solution_winner.ok_or(PoolError::NotProposed)?;

        let total_collateral = pool
            .total_collateral()
            .ok_or(PoolError::ArithmeticOverflow)?;
        let payout = compute_payout(balance, pool.side_total(winner), total_collateral)?;
        let total_paid_out = pool
            .total_paid_out
            .checked_add(payout)
            .ok_or(PoolError::ArithmeticOverflow)?;
        if total_paid_out > total_collateral {
            return Err(PoolError::ArithmeticOverflow);
        }

        ledger.burn(winner, &user, balance);
        if payout > 0 {
            ledger.release_collateral(&user, payout);
        }

        pool.total_paid_out = total_paid_out;
        storage::save_pool(&env, pool_id, &pool);

        log!(&env, "claim settled", pool_id, balance, payout);
        WinningsClaimedEvent {
            pool_id,
            user,
            burned: balance,
            payout,
        }
        .publish(&env);

        Ok(payout)
    }

    pub fn get_pool(env: Env, pool_id: u64) -> Result<Pool, PoolError> {
        storage::load_pool(&env, pool_id)
    }

    pub fn get_phase(env: Env, pool_id: u64) -> Result<Phase, PoolError> {
        Ok(storage::load_pool(&env, pool_id)?.phase())
    }

    /// Current YES/NO claim-token balances of `user`
    pub fn get_position(env: Env, pool_id: u64, user: Address) -> Result<Position, PoolError> {
        let pool = storage::load_pool(&env, pool_id)?;
        Ok(ClaimLedger::for_pool(&env, &pool).position(&user))
    }

    pub fn pool_count(env: Env) -> u64 {
        storage::pool_count(&env)
    }

    pub fn collateral_token(env: Env) -> Address {
        storage::config(&env).collateral_token
    }
}
