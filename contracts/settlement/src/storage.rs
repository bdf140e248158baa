// contracts/settlement/src/storage.rs - Pool arena and contract configuration storage

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::PoolError;
use crate::types::{Config, Pool};

const DAY_IN_LEDGERS: u32 = 17280;
const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Maximum pool name length in bytes
pub const MAX_NAME_LEN: u32 = 32;
/// Maximum pool description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 256;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    /// Next pool id to hand out
    PoolCount,
    Pool(u64),
    /// Claim-token contract already bound to a pool
    MintInUse(Address),
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Config not set")
}

pub fn pool_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::PoolCount)
        .unwrap_or(0)
}

/// Reserves the next pool id.
pub fn next_pool_id(env: &Env) -> Result<u64, PoolError> {
    let id = pool_count(env);
    let next = id.checked_add(1).ok_or(PoolError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::PoolCount, &next);
    extend_instance(env);
    Ok(id)
}

pub fn load_pool(env: &Env, pool_id: u64) -> Result<Pool, PoolError> {
    let key = DataKey::Pool(pool_id);
    let pool = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(PoolError::PoolNotFound)?;
    extend_persistent(env, &key);
    extend_instance(env);
    Ok(pool)
}

pub fn save_pool(env: &Env, pool_id: u64, pool: &Pool) {
    let key = DataKey::Pool(pool_id);
    env.storage().persistent().set(&key, pool);
    extend_persistent(env, &key);
}

pub fn is_mint_in_use(env: &Env, mint: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::MintInUse(mint.clone()))
}

pub fn bind_mint(env: &Env, mint: &Address, pool_id: u64) {
    let key = DataKey::MintInUse(mint.clone());
    env.storage().persistent().set(&key, &pool_id);
    extend_persistent(env, &key);
}

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}
