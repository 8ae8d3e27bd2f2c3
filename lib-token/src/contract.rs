//! CappedToken - the crowdsale ledger
//!
//! A capped, mintable balance book with a single mint authority and a
//! one-way trading switch: transfers stay locked until the authority
//! declares minting finished, after which the supply is frozen.
//!
//! # Invariants
//!
//! - `total_supply <= cap`, always
//! - `sum(balances) == total_supply`
//! - supply is non-decreasing until minting is finished, frozen after
//! - `name` and `symbol` are non-empty (enforced at creation)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use lib_types::{Address, Amount};

use crate::errors::{TokenError, TokenResult};

/// The crowdsale ledger token.
///
/// All mutating operations take the caller's identity as their first
/// argument; the hosting substrate supplies it and serializes calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CappedToken {
    /// The ledger's own principal identity
    address: Address,
    /// Maximum total issuable supply (immutable)
    cap: Amount,
    /// Human-readable token name
    name: String,
    /// Token symbol
    symbol: String,
    /// Number of decimal places (display only)
    decimals: u8,
    /// Total supply in circulation
    total_supply: Amount,
    /// One-way flag: set by the mint authority, never cleared
    minting_finished: bool,
    /// The principal currently permitted to mint
    mint_authority: Address,
    /// Per-account balances
    balances: HashMap<Address, Amount>,
    /// Spending allowances: owner -> spender -> amount
    allowances: HashMap<Address, HashMap<Address, Amount>>,
}

impl CappedToken {
    /// Create the ledger. The creator becomes the initial mint authority.
    pub fn new(
        address: Address,
        creator: Address,
        cap: Amount,
        name: String,
        symbol: String,
        decimals: u8,
    ) -> TokenResult<Self> {
        if name.is_empty() {
            return Err(TokenError::InvalidMetadata("name cannot be empty".to_string()));
        }
        if symbol.is_empty() {
            return Err(TokenError::InvalidMetadata("symbol cannot be empty".to_string()));
        }

        Ok(Self {
            address,
            cap,
            name,
            symbol,
            decimals,
            total_supply: 0,
            minting_finished: false,
            mint_authority: creator,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        })
    }

    // =========================================================================
    // Minting
    // =========================================================================

    /// Credit newly issued tokens to `beneficiary`.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` unless the caller is the mint authority
    /// - `MintingClosed` once minting is finished
    /// - `CapExceeded` if the new supply would exceed the cap
    pub fn mint(&mut self, caller: Address, beneficiary: Address, amount: Amount) -> TokenResult<()> {
        self.require_authority(caller)?;
        if self.minting_finished {
            return Err(TokenError::MintingClosed);
        }

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        if new_supply > self.cap {
            return Err(TokenError::CapExceeded {
                max: self.cap,
                would_have: new_supply,
            });
        }

        self.credit(beneficiary, amount)?;
        self.total_supply = new_supply;
        Ok(())
    }

    /// Permanently freeze the supply and unlock transfers.
    ///
    /// Calling this again once finished is a no-op success.
    pub fn finish_minting(&mut self, caller: Address) -> TokenResult<()> {
        self.require_authority(caller)?;
        self.minting_finished = true;
        Ok(())
    }

    /// Reassign the mint authority. Callable in any state.
    pub fn transfer_authority(&mut self, caller: Address, new_authority: Address) -> TokenResult<()> {
        self.require_authority(caller)?;
        self.mint_authority = new_authority;
        Ok(())
    }

    // =========================================================================
    // Transfers (only once minting is finished)
    // =========================================================================

    /// Move `amount` from the caller's balance to `to`.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: Amount) -> TokenResult<()> {
        self.require_trading_open()?;
        self.move_balance(caller, to, amount)
    }

    /// Set `spender`'s allowance over the caller's balance.
    pub fn approve(&mut self, caller: Address, spender: Address, amount: Amount) -> TokenResult<()> {
        self.require_trading_open()?;
        self.allowances.entry(caller).or_default().insert(spender, amount);
        Ok(())
    }

    /// Move `amount` from `from` to `to` against the caller's allowance.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        self.require_trading_open()?;

        let allowed = self.allowance(from, caller);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                have: allowed,
                need: amount,
            });
        }

        self.move_balance(from, to, amount)?;
        if let Some(spenders) = self.allowances.get_mut(&from) {
            spenders.insert(caller, allowed - amount);
        }
        Ok(())
    }

    /// Reject a bare value transfer from the host.
    ///
    /// The ledger accounts tokens only; host currency sent directly to it
    /// is always refused.
    pub fn receive_value(&self, _from: Address, _amount: Amount) -> TokenResult<()> {
        Err(TokenError::ValueNotAccepted)
    }

    // =========================================================================
    // Reads (no authorization)
    // =========================================================================

    /// The ledger's own principal identity
    pub fn address(&self) -> Address {
        self.address
    }

    /// Maximum total issuable supply
    pub fn cap(&self) -> Amount {
        self.cap
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Total supply in circulation
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Whether minting has been finished
    pub fn minting_finished(&self) -> bool {
        self.minting_finished
    }

    /// The principal currently permitted to mint
    pub fn mint_authority(&self) -> Address {
        self.mint_authority
    }

    /// Balance of an account (zero if unknown)
    pub fn balance_of(&self, account: Address) -> Amount {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Remaining allowance of `spender` over `owner`'s balance
    pub fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&owner)
            .and_then(|spenders| spenders.get(&spender))
            .copied()
            .unwrap_or(0)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn require_authority(&self, caller: Address) -> TokenResult<()> {
        if caller != self.mint_authority {
            return Err(TokenError::Unauthorized(caller));
        }
        Ok(())
    }

    fn require_trading_open(&self) -> TokenResult<()> {
        if !self.minting_finished {
            return Err(TokenError::TradingLocked);
        }
        Ok(())
    }

    fn credit(&mut self, account: Address, amount: Amount) -> TokenResult<()> {
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
        Ok(())
    }

    /// Validate both sides of a movement, then apply in one step.
    fn move_balance(&mut self, from: Address, to: Address, amount: Amount) -> TokenResult<()> {
        let have = self.balance_of(from);
        if have < amount {
            return Err(TokenError::InsufficientBalance { have, need: amount });
        }
        if from == to {
            // Validated above; a self-transfer moves nothing.
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.balances.insert(from, have - amount);
        self.balances.insert(to, credited);
        Ok(())
    }
}
