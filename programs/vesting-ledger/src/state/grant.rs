use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_INSTALMENT_COUNT;
use crate::error::VestingError;
use crate::state::{HasRole, Role};
use crate::utils::time;
use crate::utils::VestingSchedule;

/// Instruction input for `add_grant`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrantParams {
    pub start_time: i64,
    pub cliff_period: i64,
    pub instalment_amount: u64,
    pub instalment_count: u16,
    pub instalment_period: i64,
}

impl GrantParams {
    /// Checks the parameters and returns the grant total (`instalment_amount * instalment_count`).
    pub fn validate(
        &self,
        token: &Pubkey,
        beneficiary: &Pubkey,
        now_ts: i64,
    ) -> Result<u64, VestingError> {
        if *token == Pubkey::default() || *beneficiary == Pubkey::default() {
            return Err(VestingError::InvalidParameters);
        }
        if self.instalment_amount == 0 {
            return Err(VestingError::InvalidParameters);
        }
        if self.instalment_count == 0 || self.instalment_count > MAX_INSTALMENT_COUNT {
            return Err(VestingError::InvalidParameters);
        }
        if self.instalment_period == 0 {
            return Err(VestingError::InvalidParameters);
        }
        time::ensure_period_within_horizon(self.cliff_period)?;
        time::ensure_period_within_horizon(self.instalment_period)?;
        time::ensure_start_within_horizon(self.start_time, now_ts)?;

        self.instalment_amount
            .checked_mul(self.instalment_count as u64)
            .ok_or(VestingError::MathOverflow)
    }
}

/// Revocable grant slot for one (mint, beneficiary) pair.
/// The PDA is reused after revocation, so a slot holds at most one active grant.
#[account]
pub struct Grant {
    pub token: Pubkey,
    pub beneficiary: Pubkey,
    /// Account that funded the grant; receives the remainder on revoke.
    pub manager: Pubkey,
    pub start_time: i64,
    pub cliff_period: i64,
    pub instalment_amount: u64,
    pub instalment_count: u16,
    pub instalment_period: i64,
    pub claimed: u64,
    pub active: bool,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Grant {
    pub const SIZE: usize =
        32 + // token
        32 + // beneficiary
        32 + // manager
        8 +  // start_time
        8 +  // cliff_period
        8 +  // instalment_amount
        2 +  // instalment_count
        8 +  // instalment_period
        8 +  // claimed
        1 +  // active
        1 +  // bump
        1;   // vault_bump

    pub fn open(
        &mut self,
        token: Pubkey,
        beneficiary: Pubkey,
        manager: Pubkey,
        params: &GrantParams,
    ) -> Result<(), VestingError> {
        if self.active {
            return Err(VestingError::GrantAlreadyActive);
        }
        self.token = token;
        self.beneficiary = beneficiary;
        self.manager = manager;
        self.start_time = params.start_time;
        self.cliff_period = params.cliff_period;
        self.instalment_amount = params.instalment_amount;
        self.instalment_count = params.instalment_count;
        self.instalment_period = params.instalment_period;
        self.claimed = 0;
        self.active = true;
        Ok(())
    }

    pub fn total(&self) -> Result<u64, VestingError> {
        self.instalment_amount
            .checked_mul(self.instalment_count as u64)
            .ok_or(VestingError::MathOverflow)
    }

    /// First instalment unlocks at `start_time + cliff_period`, one more per `instalment_period`.
    pub fn schedule(&self) -> Result<VestingSchedule, VestingError> {
        Ok(VestingSchedule {
            beneficiary: self.beneficiary,
            cliff_time: time::offset_ts(self.start_time, self.cliff_period)?,
            cliff_amount: self.instalment_amount,
            step_amount: self.instalment_amount,
            step_duration: self.instalment_period,
            num_steps: self.instalment_count.saturating_sub(1),
        })
    }

    pub fn unlocked_at(&self, now_ts: i64) -> Result<u64, VestingError> {
        self.schedule()?.unlocked_at(now_ts)
    }

    pub fn claimable(&self, now_ts: i64) -> Result<u64, VestingError> {
        if !self.active {
            return Err(VestingError::NoActiveGrant);
        }
        self.unlocked_at(now_ts)?
            .checked_sub(self.claimed)
            .ok_or(VestingError::MathOverflow)
    }

    /// Books a payout. Returns true when the grant is exhausted and the slot was released.
    pub fn record_claim(&mut self, amount: u64) -> Result<bool, VestingError> {
        let claimed = self
            .claimed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        let total = self.total()?;
        if claimed > total {
            return Err(VestingError::MathOverflow);
        }
        self.claimed = claimed;
        if claimed == total {
            self.active = false;
            return Ok(true);
        }
        Ok(false)
    }

    /// Deactivates the grant and returns the undrawn remainder owed to the manager.
    pub fn revoke(&mut self) -> Result<u64, VestingError> {
        if !self.active {
            return Err(VestingError::NoActiveGrant);
        }
        let remainder = self
            .total()?
            .checked_sub(self.claimed)
            .ok_or(VestingError::MathOverflow)?;
        self.active = false;
        Ok(remainder)
    }

    pub fn authorize_claim(&self, access: &impl HasRole, caller: &Pubkey) -> Result<(), VestingError> {
        if *caller == self.beneficiary || access.has_role(Role::GrantAdmin, caller) {
            return Ok(());
        }
        Err(VestingError::Unauthorized)
    }

    pub fn authorize_revoke(&self, access: &impl HasRole, caller: &Pubkey) -> Result<(), VestingError> {
        if *caller == self.beneficiary
            || *caller == self.manager
            || access.has_role(Role::GrantAdmin, caller)
        {
            return Ok(());
        }
        Err(VestingError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEN_YEARS;
    use crate::state::AccessControl;

    const START: i64 = 1_636_521_174;
    const DAY: i64 = 86_400;
    const HOUR: i64 = 3_600;

    fn params() -> GrantParams {
        GrantParams {
            start_time: START,
            cliff_period: DAY,
            instalment_amount: 10_000,
            instalment_count: 3,
            instalment_period: HOUR,
        }
    }

    fn empty_grant() -> Grant {
        Grant {
            token: Pubkey::default(),
            beneficiary: Pubkey::default(),
            manager: Pubkey::default(),
            start_time: 0,
            cliff_period: 0,
            instalment_amount: 0,
            instalment_count: 0,
            instalment_period: 0,
            claimed: 0,
            active: false,
            bump: 0,
            vault_bump: 0,
        }
    }

    fn opened(token: Pubkey, beneficiary: Pubkey, manager: Pubkey) -> Grant {
        let mut g = empty_grant();
        g.open(token, beneficiary, manager, &params()).unwrap();
        g
    }

    fn gate(grant_admin: Pubkey) -> AccessControl {
        let mut ac = AccessControl::with_admin(Pubkey::new_unique()).unwrap();
        ac.grant_role(Role::GrantAdmin, grant_admin).unwrap();
        ac
    }

    #[test]
    fn validate_returns_total() {
        let (t, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(params().validate(&t, &b, START + DAY).unwrap(), 30_000);
    }

    #[test]
    fn validate_rejects_bad_inputs() {
        let (t, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let now = START + DAY;
        let bad = |p: GrantParams, t: &Pubkey, b: &Pubkey| {
            matches!(p.validate(t, b, now), Err(VestingError::InvalidParameters))
        };

        assert!(bad(params(), &Pubkey::default(), &b));
        assert!(bad(params(), &t, &Pubkey::default()));
        assert!(bad(GrantParams { cliff_period: 315_600_000, ..params() }, &t, &b));
        assert!(bad(GrantParams { start_time: 315_600_000, ..params() }, &t, &b));
        assert!(bad(GrantParams { instalment_amount: 0, ..params() }, &t, &b));
        assert!(bad(GrantParams { instalment_count: 0, ..params() }, &t, &b));
        assert!(bad(GrantParams { instalment_count: 1201, ..params() }, &t, &b));
        assert!(bad(GrantParams { instalment_period: TEN_YEARS + 1, ..params() }, &t, &b));
        assert!(bad(GrantParams { instalment_period: 0, ..params() }, &t, &b));
        assert!(bad(GrantParams { cliff_period: -1, ..params() }, &t, &b));

        assert!(GrantParams { instalment_count: 1200, ..params() }
            .validate(&t, &b, now)
            .is_ok());
    }

    #[test]
    fn single_active_grant_per_slot() {
        let (t, b, m) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let mut g = opened(t, b, m);
        assert!(matches!(
            g.open(t, b, m, &params()),
            Err(VestingError::GrantAlreadyActive)
        ));

        // full undrawn total comes back before any claim
        assert_eq!(g.revoke().unwrap(), 30_000);
        assert!(!g.active);
        assert!(matches!(g.revoke(), Err(VestingError::NoActiveGrant)));

        g.open(t, b, m, &params()).unwrap();
        assert!(g.active);
        assert_eq!(g.claimed, 0);
    }

    #[test]
    fn instalments_unlock_from_cliff() {
        let g = opened(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let cliff = START + DAY;
        assert_eq!(g.claimable(cliff - 1).unwrap(), 0);
        assert_eq!(g.claimable(cliff).unwrap(), 10_000);
        assert_eq!(g.claimable(cliff + HOUR - 1).unwrap(), 10_000);
        assert_eq!(g.claimable(cliff + HOUR).unwrap(), 20_000);
        assert_eq!(g.claimable(cliff + 2 * HOUR).unwrap(), 30_000);
        assert_eq!(g.claimable(cliff + 100 * HOUR).unwrap(), 30_000);
    }

    #[test]
    fn claims_accumulate_and_exhaust_the_slot() {
        let mut g = opened(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let cliff = START + DAY;

        let first = g.claimable(cliff).unwrap();
        assert!(!g.record_claim(first).unwrap());
        assert_eq!(g.claimable(cliff + 10).unwrap(), 0);

        let rest = g.claimable(cliff + 2 * HOUR).unwrap();
        assert_eq!(rest, 20_000);
        assert!(g.record_claim(rest).unwrap());
        assert!(!g.active);
        assert!(matches!(g.claimable(cliff + 3 * HOUR), Err(VestingError::NoActiveGrant)));
    }

    #[test]
    fn revoke_after_partial_claim_returns_remainder() {
        let mut g = opened(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        g.record_claim(10_000).unwrap();
        assert_eq!(g.revoke().unwrap(), 20_000);
    }

    #[test]
    fn over_claim_is_rejected() {
        let mut g = opened(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        assert!(matches!(g.record_claim(30_001), Err(VestingError::MathOverflow)));
        assert_eq!(g.claimed, 0);
    }

    #[test]
    fn claim_and_revoke_authorization() {
        let (b, m, admin, other) = (
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );
        let g = opened(Pubkey::new_unique(), b, m);
        let ac = gate(admin);

        assert!(g.authorize_claim(&ac, &b).is_ok());
        assert!(g.authorize_claim(&ac, &admin).is_ok());
        assert!(matches!(g.authorize_claim(&ac, &m), Err(VestingError::Unauthorized)));
        assert!(matches!(g.authorize_claim(&ac, &other), Err(VestingError::Unauthorized)));

        assert!(g.authorize_revoke(&ac, &b).is_ok());
        assert!(g.authorize_revoke(&ac, &m).is_ok());
        assert!(g.authorize_revoke(&ac, &admin).is_ok());
        assert!(matches!(g.authorize_revoke(&ac, &other), Err(VestingError::Unauthorized)));
    }
}
