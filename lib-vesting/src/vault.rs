//! TokenVault - time-locked custody of minted tokens
//!
//! The vault is itself a ledger principal: tokens vest by being minted
//! (or transferred) to the vault's own balance and then noted for a
//! beneficiary. Releasing moves them out through the ledger's ordinary
//! transfer operation, so a vault can never conjure or destroy value.
//!
//! # Invariants
//!
//! - `unlock_time` is monotonically non-increasing
//! - a beneficiary's noted amount grows only via `note_tokens` and drops
//!   to exactly zero only via `release_tokens`
//! - the vault's token balance always covers the sum of noted amounts

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

use lib_token::CappedToken;
use lib_types::{Address, Amount, Duration, Timestamp};

use crate::errors::{VaultError, VaultResult};

/// Time-locked vesting vault bound to one ledger token.
///
/// The owner is fixed at creation and is the only principal that may note
/// amounts or shrink the deadline; it need not be the principal that
/// administers the wider sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenVault {
    /// The vault's own principal identity (its ledger account)
    address: Address,
    /// Administrator, fixed at creation
    owner: Address,
    /// The ledger this vault custodies
    token_address: Address,
    /// Deadline after which releases are allowed; may only decrease
    unlock_time: Timestamp,
    /// Noted-but-unreleased amounts per beneficiary
    locked: HashMap<Address, Amount>,
}

impl TokenVault {
    /// Create a vault unlocking `lock_duration` seconds from `now`.
    pub fn new(
        address: Address,
        owner: Address,
        token: &CappedToken,
        now: Timestamp,
        lock_duration: Duration,
    ) -> Self {
        Self {
            address,
            owner,
            token_address: token.address(),
            unlock_time: now.saturating_add(lock_duration),
            locked: HashMap::new(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Record `amount` of the vault's token balance as vesting for
    /// `beneficiary`. Amounts accumulate across calls.
    ///
    /// The tokens must already sit in the vault's ledger balance: noting
    /// more than the balance not yet spoken for fails `InsufficientFunds`.
    pub fn note_tokens(
        &mut self,
        caller: Address,
        now: Timestamp,
        token: &CappedToken,
        beneficiary: Address,
        amount: Amount,
    ) -> VaultResult<()> {
        debug_assert_eq!(
            token.address(),
            self.token_address,
            "host must route the bound ledger"
        );
        if caller != self.owner {
            return Err(VaultError::Unauthorized(caller));
        }
        if now >= self.unlock_time {
            return Err(VaultError::Unlocked {
                unlock_time: self.unlock_time,
                now,
            });
        }

        let available = token
            .balance_of(self.address)
            .saturating_sub(self.total_noted());
        if available < amount {
            return Err(VaultError::InsufficientFunds {
                available,
                requested: amount,
            });
        }

        let noted = self.locked.entry(beneficiary).or_insert(0);
        *noted = noted.saturating_add(amount);
        debug!(
            "Noted {} vesting tokens for {} (locked until {})",
            amount, beneficiary, self.unlock_time
        );
        Ok(())
    }

    /// Move the beneficiary's noted amount out of custody, returning how
    /// much was released.
    ///
    /// Callable by the owner or the beneficiary, only after the deadline.
    /// Idempotent: once the entry is zero, further calls release zero.
    pub fn release_tokens(
        &mut self,
        caller: Address,
        now: Timestamp,
        token: &mut CappedToken,
        beneficiary: Address,
    ) -> VaultResult<Amount> {
        debug_assert_eq!(
            token.address(),
            self.token_address,
            "host must route the bound ledger"
        );
        if caller != self.owner && caller != beneficiary {
            return Err(VaultError::Unauthorized(caller));
        }
        if now < self.unlock_time {
            return Err(VaultError::Locked {
                unlock_time: self.unlock_time,
                now,
            });
        }

        let amount = self.balance_of(beneficiary);
        if amount > 0 {
            token.transfer(self.address, beneficiary, amount)?;
            self.locked.remove(&beneficiary);
        }
        info!("Released {} vested tokens to {}", amount, beneficiary);
        Ok(amount)
    }

    /// Shrink the unlock deadline. Extension is never allowed.
    ///
    /// The new deadline may be at or before `now`, unlocking immediately.
    pub fn reduce_locking_time(
        &mut self,
        caller: Address,
        new_unlock_time: Timestamp,
    ) -> VaultResult<()> {
        if caller != self.owner {
            return Err(VaultError::Unauthorized(caller));
        }
        if new_unlock_time > self.unlock_time {
            return Err(VaultError::InvalidExtension {
                current: self.unlock_time,
                requested: new_unlock_time,
            });
        }

        self.unlock_time = new_unlock_time;
        info!("Vault unlock time reduced to {}", new_unlock_time);
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Whether releases are still gated at `now`
    pub fn is_locked(&self, now: Timestamp) -> bool {
        now < self.unlock_time
    }

    /// Noted-but-unreleased amount for a beneficiary (zero if unknown)
    pub fn balance_of(&self, beneficiary: Address) -> Amount {
        self.locked.get(&beneficiary).copied().unwrap_or(0)
    }

    /// Sum of all noted-but-unreleased amounts
    pub fn total_noted(&self) -> Amount {
        self.locked.values().copied().sum()
    }

    /// The vault's own principal identity
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The ledger this vault custodies
    pub fn token_address(&self) -> Address {
        self.token_address
    }

    /// Deadline after which releases are allowed
    pub fn unlock_time(&self) -> Timestamp {
        self.unlock_time
    }
}
