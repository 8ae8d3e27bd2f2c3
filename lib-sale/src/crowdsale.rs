//! Crowdsale - the sale phase controller
//!
//! Mediates all minting on the ledger by sale phase and owns the vesting
//! vault it creates. The controller must hold the token's mint authority
//! for its minting entry points to succeed; the deploying principal hands
//! authority over after construction and can reclaim it at any time with
//! [`Crowdsale::transfer_token_ownership`].
//!
//! No minting entry point exists for the active phase: contribution-driven
//! issuance during the sale window happens outside this core.

use serde::{Deserialize, Serialize};
use tracing::info;

use lib_token::CappedToken;
use lib_types::{Address, Amount, Duration, Timestamp};
use lib_vesting::{TokenVault, VaultError};

use crate::errors::{SaleError, SaleResult};
use crate::phase::Phase;

/// Phase-gated sale controller bound to one ledger token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crowdsale {
    /// The controller's own principal identity
    address: Address,
    /// The only principal that may drive minting, fixed at creation
    owner: Address,
    /// The ledger this controller mints on
    token_address: Address,
    /// Sale window open, inclusive
    start_time: Timestamp,
    /// Sale window close, exclusive
    end_time: Timestamp,
    /// Vesting vault for locked mints, administered by this controller
    vault: TokenVault,
}

impl Crowdsale {
    /// Create the controller and its vesting vault.
    ///
    /// The vault is owned by the controller itself and unlocks
    /// `lock_duration` seconds from `now`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        address: Address,
        owner: Address,
        vault_address: Address,
        token: &CappedToken,
        now: Timestamp,
        start_time: Timestamp,
        end_time: Timestamp,
        lock_duration: Duration,
    ) -> SaleResult<Self> {
        if start_time >= end_time {
            return Err(SaleError::InvalidWindow {
                start: start_time,
                end: end_time,
            });
        }

        let vault = TokenVault::new(vault_address, address, token, now, lock_duration);
        Ok(Self {
            address,
            owner,
            token_address: token.address(),
            start_time,
            end_time,
            vault,
        })
    }

    // =========================================================================
    // Minting entry points (pre- and post-sale only)
    // =========================================================================

    /// Mint directly to `beneficiary` before the sale opens.
    pub fn mint_pre_sale(
        &self,
        caller: Address,
        now: Timestamp,
        token: &mut CappedToken,
        beneficiary: Address,
        amount: Amount,
    ) -> SaleResult<()> {
        self.mint_direct(caller, now, token, beneficiary, amount, Phase::Pre)
    }

    /// Mint into the vault before the sale opens, vesting for `beneficiary`.
    pub fn mint_pre_sale_locked(
        &mut self,
        caller: Address,
        now: Timestamp,
        token: &mut CappedToken,
        beneficiary: Address,
        amount: Amount,
    ) -> SaleResult<()> {
        self.mint_locked(caller, now, token, beneficiary, amount, Phase::Pre)
    }

    /// Mint directly to `beneficiary` after the sale closes.
    pub fn mint_post_sale(
        &self,
        caller: Address,
        now: Timestamp,
        token: &mut CappedToken,
        beneficiary: Address,
        amount: Amount,
    ) -> SaleResult<()> {
        self.mint_direct(caller, now, token, beneficiary, amount, Phase::Post)
    }

    /// Mint into the vault after the sale closes, vesting for `beneficiary`.
    pub fn mint_post_sale_locked(
        &mut self,
        caller: Address,
        now: Timestamp,
        token: &mut CappedToken,
        beneficiary: Address,
        amount: Amount,
    ) -> SaleResult<()> {
        self.mint_locked(caller, now, token, beneficiary, amount, Phase::Post)
    }

    /// Close the issuance permanently. Owner-only, post-sale only.
    pub fn finish_minting(
        &self,
        caller: Address,
        now: Timestamp,
        token: &mut CappedToken,
    ) -> SaleResult<()> {
        debug_assert_eq!(
            token.address(),
            self.token_address,
            "host must route the bound ledger"
        );
        self.require_owner(caller)?;
        self.require_phase(now, Phase::Post)?;
        token.finish_minting(self.address)?;
        info!("Minting finished at {}", now);
        Ok(())
    }

    /// Hand the token's mint authority back to the calling owner.
    ///
    /// Valid in any phase; the owner can always reclaim the ledger.
    pub fn transfer_token_ownership(
        &self,
        caller: Address,
        token: &mut CappedToken,
    ) -> SaleResult<()> {
        debug_assert_eq!(
            token.address(),
            self.token_address,
            "host must route the bound ledger"
        );
        self.require_owner(caller)?;
        token.transfer_authority(self.address, caller)?;
        info!("Token mint authority handed to {}", caller);
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Derive the sale phase for `now`
    pub fn phase(&self, now: Timestamp) -> Phase {
        Phase::of(now, self.start_time, self.end_time)
    }

    /// The controller's own principal identity
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The ledger this controller mints on
    pub fn token_address(&self) -> Address {
        self.token_address
    }

    /// The vesting vault's principal identity
    pub fn vault_address(&self) -> Address {
        self.vault.address()
    }

    /// The vesting vault holding locked mints
    pub fn vault(&self) -> &TokenVault {
        &self.vault
    }

    /// Mutable access for the host to route beneficiary-driven vault
    /// calls (the vault still checks its own authorization).
    pub fn vault_mut(&mut self) -> &mut TokenVault {
        &mut self.vault
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn end_time(&self) -> Timestamp {
        self.end_time
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn mint_direct(
        &self,
        caller: Address,
        now: Timestamp,
        token: &mut CappedToken,
        beneficiary: Address,
        amount: Amount,
        required: Phase,
    ) -> SaleResult<()> {
        debug_assert_eq!(
            token.address(),
            self.token_address,
            "host must route the bound ledger"
        );
        self.require_owner(caller)?;
        self.require_phase(now, required)?;
        token.mint(self.address, beneficiary, amount)?;
        info!("{} mint: {} tokens to {}", required, amount, beneficiary);
        Ok(())
    }

    fn mint_locked(
        &mut self,
        caller: Address,
        now: Timestamp,
        token: &mut CappedToken,
        beneficiary: Address,
        amount: Amount,
        required: Phase,
    ) -> SaleResult<()> {
        debug_assert_eq!(
            token.address(),
            self.token_address,
            "host must route the bound ledger"
        );
        self.require_owner(caller)?;
        self.require_phase(now, required)?;

        // The note below could only be rejected for an expired lock, so
        // check that before the mint: no failure may follow a committed
        // ledger mutation.
        if !self.vault.is_locked(now) {
            return Err(VaultError::Unlocked {
                unlock_time: self.vault.unlock_time(),
                now,
            }
            .into());
        }

        token.mint(self.address, self.vault.address(), amount)?;
        // Funds are guaranteed: the mint just credited the vault with `amount`.
        self.vault
            .note_tokens(self.address, now, token, beneficiary, amount)?;
        info!("{} locked mint: {} tokens vesting for {}", required, amount, beneficiary);
        Ok(())
    }

    fn require_owner(&self, caller: Address) -> SaleResult<()> {
        if caller != self.owner {
            return Err(SaleError::Unauthorized(caller));
        }
        Ok(())
    }

    fn require_phase(&self, now: Timestamp, required: Phase) -> SaleResult<()> {
        let current = self.phase(now);
        if current != required {
            return Err(SaleError::PhaseViolation { current, required });
        }
        Ok(())
    }
}
