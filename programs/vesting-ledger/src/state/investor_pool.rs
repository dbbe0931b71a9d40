use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{INVESTOR_INSTALMENTS, MAX_INVESTORS};
use crate::error::VestingError;
use crate::state::{AccessControl, HasRole, Role};
use crate::utils::digest;

/// A single investor entry stored in the pool roster.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvestorEntry {
    pub wallet: Pubkey,
    /// Total owed over all instalments.
    pub entitlement: u64,
    /// Share credited on each of the first 11 top-ups.
    pub instalment_amount: u64,
    /// Share credited on the last top-up (absorbs the division remainder).
    pub final_amount: u64,
    /// Sum of shares credited so far.
    pub credited: u64,
    /// Credited but not yet claimed.
    pub tokens_left: u64,
    pub claimed: u64,
    pub removed: bool,
}

impl InvestorEntry {
    pub const SIZE: usize =
        32 + // wallet
        8 +  // entitlement
        8 +  // instalment_amount
        8 +  // final_amount
        8 +  // credited
        8 +  // tokens_left
        8 +  // claimed
        1;   // removed

    fn new(wallet: Pubkey, entitlement: u64) -> Result<Self, VestingError> {
        let instalment_amount = entitlement / (INVESTOR_INSTALMENTS as u64);
        let remainder = entitlement % (INVESTOR_INSTALMENTS as u64);
        let final_amount = instalment_amount
            .checked_add(remainder)
            .ok_or(VestingError::MathOverflow)?;
        Ok(Self {
            wallet,
            entitlement,
            instalment_amount,
            final_amount,
            ..Self::default()
        })
    }
}

/// Instruction input (wallet + entitlement).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvestorInput {
    pub wallet: Pubkey,
    pub entitlement: u64,
}

/// Admin-funded distribution pool. Each `add_money` round credits every active investor
/// one twelfth of their entitlement; investors withdraw whatever has accumulated.
#[account]
pub struct InvestorPool {
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub access: AccessControl,
    pub investors: Vec<InvestorEntry>,
    pub total_entitlement: u64,
    /// Top-up rounds performed (<= INVESTOR_INSTALMENTS).
    pub instalments_added: u8,
    /// Tokens the pool believes it holds.
    pub pool_balance: u64,
    /// Roster is frozen; top-ups are only allowed once sealed.
    pub sealed: bool,
    /// blake3 commitment to the sealed roster.
    pub investors_digest: [u8; 32],
    pub bump: u8,
    pub vault_bump: u8,
}

impl InvestorPool {
    pub const fn space(max_investors: usize) -> usize {
        8 +                                    // discriminator
        32 +                                   // creator
        32 +                                   // mint
        AccessControl::SIZE +                  // access
        4 + max_investors * InvestorEntry::SIZE + // investors
        8 +                                    // total_entitlement
        1 +                                    // instalments_added
        8 +                                    // pool_balance
        1 +                                    // sealed
        32 +                                   // investors_digest
        1 +                                    // bump
        1                                      // vault_bump
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<(), VestingError> {
        if !self.access.has_role(Role::Admin, caller) {
            return Err(VestingError::NotAdmin);
        }
        Ok(())
    }

    /// Pools only gate on `Admin`; other roles have no meaning here.
    pub fn grant_role(&mut self, caller: &Pubkey, role: Role, account: Pubkey) -> Result<(), VestingError> {
        self.ensure_admin(caller)?;
        if role != Role::Admin {
            return Err(VestingError::InvalidParameters);
        }
        self.access.grant_role(role, account)
    }

    pub fn revoke_role(&mut self, caller: &Pubkey, role: Role, account: &Pubkey) -> Result<(), VestingError> {
        self.ensure_admin(caller)?;
        if role != Role::Admin {
            return Err(VestingError::InvalidParameters);
        }
        self.access.revoke_role(role, account)
    }

    pub fn add_investors(&mut self, inputs: &[InvestorInput]) -> Result<u8, VestingError> {
        if self.sealed {
            return Err(VestingError::RosterSealed);
        }
        let mut added: u8 = 0;
        for (i, input) in inputs.iter().enumerate() {
            if input.wallet == Pubkey::default() || input.entitlement == 0 {
                return Err(VestingError::InvalidParameters);
            }
            if self.investors.len() >= MAX_INVESTORS {
                return Err(VestingError::InvestorListFull);
            }
            // Reject duplicates vs the roster and within the batch itself.
            if self.position(&input.wallet).is_some()
                || inputs[..i].iter().any(|p| p.wallet == input.wallet)
            {
                return Err(VestingError::DuplicateInvestor);
            }
            self.investors.push(InvestorEntry::new(input.wallet, input.entitlement)?);
            self.total_entitlement = self
                .total_entitlement
                .checked_add(input.entitlement)
                .ok_or(VestingError::MathOverflow)?;
            added = added.checked_add(1).ok_or(VestingError::MathOverflow)?;
        }
        Ok(added)
    }

    pub fn seal(&mut self) -> Result<[u8; 32], VestingError> {
        if self.sealed {
            return Err(VestingError::RosterSealed);
        }
        if self.investors.is_empty() {
            return Err(VestingError::EmptyInvestorList);
        }
        self.sealed = true;
        self.investors_digest = digest::roster_digest(&self.investors);
        Ok(self.investors_digest)
    }

    /// Share the next top-up round credits to `entry`.
    fn next_share(&self, entry: &InvestorEntry) -> u64 {
        if entry.removed || self.instalments_added >= INVESTOR_INSTALMENTS {
            return 0;
        }
        if self.instalments_added + 1 == INVESTOR_INSTALMENTS {
            entry.final_amount
        } else {
            entry.instalment_amount
        }
    }

    /// Minimum top-up for the next round: the sum of every active investor's next share.
    pub fn min_amount_add(&self) -> Result<u64, VestingError> {
        self.investors.iter().try_fold(0u64, |acc, e| {
            acc.checked_add(self.next_share(e))
                .ok_or(VestingError::MathOverflow)
        })
    }

    /// Credits one instalment round. Returns the amount credited to investors.
    pub fn add_money(&mut self, amount: u64) -> Result<u64, VestingError> {
        if !self.sealed {
            return Err(VestingError::RosterNotSealed);
        }
        if self.instalments_added >= INVESTOR_INSTALMENTS {
            return Err(VestingError::NothingToDistribute);
        }
        let min = self.min_amount_add()?;
        if min == 0 {
            return Err(VestingError::NothingToDistribute);
        }
        if amount < min {
            return Err(VestingError::AmountLessThanTotalInvestorAmount);
        }

        let shares: Vec<u64> = self.investors.iter().map(|e| self.next_share(e)).collect();
        for (entry, share) in self.investors.iter_mut().zip(shares) {
            if share == 0 {
                continue;
            }
            entry.credited = entry
                .credited
                .checked_add(share)
                .ok_or(VestingError::MathOverflow)?;
            entry.tokens_left = entry
                .tokens_left
                .checked_add(share)
                .ok_or(VestingError::MathOverflow)?;
        }
        self.instalments_added += 1;
        self.pool_balance = self
            .pool_balance
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(min)
    }

    /// Pays out everything credited to `wallet` so far.
    pub fn claim(&mut self, wallet: &Pubkey) -> Result<u64, VestingError> {
        let idx = self.active_position(wallet)?;
        let amount = self.investors[idx].tokens_left;
        if amount == 0 {
            return Err(VestingError::AlreadyClaimed);
        }
        self.pool_balance = self
            .pool_balance
            .checked_sub(amount)
            .ok_or(VestingError::InsufficientVaultBalance)?;
        let entry = &mut self.investors[idx];
        entry.tokens_left = 0;
        entry.claimed = entry
            .claimed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(amount)
    }

    /// Drops investors from every future round and forfeits their unclaimed credit.
    pub fn remove_investors(&mut self, wallets: &[Pubkey]) -> Result<u64, VestingError> {
        let mut idxs = Vec::with_capacity(wallets.len());
        for (i, w) in wallets.iter().enumerate() {
            if wallets[..i].contains(w) {
                return Err(VestingError::DuplicateInvestor);
            }
            idxs.push(self.active_position(w)?);
        }
        let mut forfeited: u64 = 0;
        for idx in idxs {
            let entry = &mut self.investors[idx];
            forfeited = forfeited
                .checked_add(entry.tokens_left)
                .ok_or(VestingError::MathOverflow)?;
            entry.tokens_left = 0;
            entry.removed = true;
        }
        Ok(forfeited)
    }

    /// Moves an investor's entry, balances included, to a new wallet.
    pub fn replace_investor(&mut self, old: &Pubkey, new: Pubkey) -> Result<(), VestingError> {
        if new == Pubkey::default() {
            return Err(VestingError::InvalidParameters);
        }
        if self.position(&new).is_some() {
            return Err(VestingError::DuplicateInvestor);
        }
        let idx = self.active_position(old)?;
        self.investors[idx].wallet = new;
        if self.sealed {
            self.investors_digest = digest::roster_digest(&self.investors);
        }
        Ok(())
    }

    /// Fails while any active investor still has credit to withdraw.
    pub fn ensure_nothing_left(&self) -> Result<(), VestingError> {
        if self
            .investors
            .iter()
            .any(|e| !e.removed && e.tokens_left > 0)
        {
            return Err(VestingError::TokenLeftToClaim);
        }
        Ok(())
    }

    pub fn record_sweep(&mut self) {
        self.pool_balance = 0;
    }

    pub fn tokens_left(&self, wallet: &Pubkey) -> u64 {
        self.active_entry(wallet).map_or(0, |e| e.tokens_left)
    }

    /// Entitlement not yet withdrawn; zero once removed.
    pub fn total_claimable(&self, wallet: &Pubkey) -> u64 {
        self.active_entry(wallet)
            .map_or(0, |e| e.entitlement.saturating_sub(e.claimed))
    }

    pub fn claimed_tokens(&self, wallet: &Pubkey) -> u64 {
        self.position(wallet)
            .map_or(0, |i| self.investors[i].claimed)
    }

    fn position(&self, wallet: &Pubkey) -> Option<usize> {
        self.investors.iter().position(|e| e.wallet == *wallet)
    }

    fn active_entry(&self, wallet: &Pubkey) -> Option<&InvestorEntry> {
        self.investors
            .iter()
            .find(|e| e.wallet == *wallet && !e.removed)
    }

    fn active_position(&self, wallet: &Pubkey) -> Result<usize, VestingError> {
        self.investors
            .iter()
            .position(|e| e.wallet == *wallet && !e.removed)
            .ok_or(VestingError::NotInvestor)
    }
}
