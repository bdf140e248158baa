// contracts/settlement/src/ledger.rs - Token ledger adapter for claim tokens and collateral escrow

use soroban_sdk::{token, Address, Env, Executable};

use crate::types::{Pool, Position, Side};

/// Mint, burn and balance operations against one pool's claim tokens,
/// plus collateral moves in and out of the contract escrow.
pub struct ClaimLedger<'a> {
    env: &'a Env,
    yes_mint: Address,
    no_mint: Address,
    collateral: Address,
}

impl<'a> ClaimLedger<'a> {
    pub fn for_pool(env: &'a Env, pool: &Pool) -> Self {
        ClaimLedger {
            env,
            yes_mint: pool.yes_mint.clone(),
            no_mint: pool.no_mint.clone(),
            collateral: pool.collateral_token.clone(),
        }
    }

    fn mint_address(&self, side: Side) -> &Address {
        match side {
            Side::Yes => &self.yes_mint,
            Side::No => &self.no_mint,
        }
    }

    /// Requires the contract to be the claim token's admin.
    pub fn mint(&self, side: Side, to: &Address, amount: i128) {
        token::StellarAssetClient::new(self.env, self.mint_address(side)).mint(to, &amount);
    }

    /// Requires `from` to have authorized the enclosing invocation.
    pub fn burn(&self, side: Side, from: &Address, amount: i128) {
        token::TokenClient::new(self.env, self.mint_address(side)).burn(from, &amount);
    }

    pub fn balance_of(&self, side: Side, user: &Address) -> i128 {
        token::TokenClient::new(self.env, self.mint_address(side)).balance(user)
    }

    pub fn position(&self, user: &Address) -> Position {
        Position {
            yes: self.balance_of(Side::Yes, user),
            no: self.balance_of(Side::No, user),
        }
    }

    pub fn deposit_collateral(&self, from: &Address, amount: i128) {
        let contract_address = self.env.current_contract_address();
        token::TokenClient::new(self.env, &self.collateral).transfer(
            from,
            &contract_address,
            &amount,
        );
    }

    pub fn release_collateral(&self, to: &Address, amount: i128) {
        let contract_address = self.env.current_contract_address();
        token::TokenClient::new(self.env, &self.collateral).transfer(
            &contract_address,
            to,
            &amount,
        );
    }
}

/// True when `mint` is a Stellar Asset Contract administered by this contract,
/// i.e. host-implemented token logic whose supply only settlement can issue.
/// Wasm contracts answering `admin()` with our address are rejected.
pub fn is_mint_authority(env: &Env, mint: &Address) -> bool {
    if !matches!(mint.executable(), Some(Executable::StellarAsset)) {
        return false;
    }
    match token::StellarAssetClient::new(env, mint).try_admin() {
        Ok(Ok(admin)) => admin == env.current_contract_address(),
        _ => false,
    }
}
