use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::VestingError;
use crate::utils::VestingSchedule;

/// Per-beneficiary vesting instance created by the orchestrator.
/// Its vault is minted exactly `schedule.total()` at deployment.
#[account]
pub struct StepVesting {
    pub orchestrator: Pubkey,
    pub mint: Pubkey,
    pub schedule: VestingSchedule,
    /// Total already paid out to the beneficiary.
    pub claimed: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl StepVesting {
    pub const SIZE: usize =
        32 +                    // orchestrator
        32 +                    // mint
        VestingSchedule::SIZE + // schedule
        8 +                     // claimed
        1 +                     // bump
        1;                      // vault_bump

    pub fn beneficiary(&self) -> Pubkey {
        self.schedule.beneficiary
    }

    /// Only the beneficiary may pull from its own instance.
    pub fn authorize_claim(&self, caller: &Pubkey) -> Result<(), VestingError> {
        if *caller != self.schedule.beneficiary {
            return Err(VestingError::AccessDenied);
        }
        Ok(())
    }

    /// unlocked(now) - claimed; zero before the cliff or between steps.
    pub fn claimable(&self, now_ts: i64) -> Result<u64, VestingError> {
        self.schedule
            .unlocked_at(now_ts)?
            .checked_sub(self.claimed)
            .ok_or(VestingError::MathOverflow)
    }

    pub fn record_claim(&mut self, amount: u64) -> Result<(), VestingError> {
        let claimed = self
            .claimed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if claimed > self.schedule.total()? {
            return Err(VestingError::MathOverflow);
        }
        self.claimed = claimed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const TOKEN: u64 = 1_000_000_000;
    const LISTING: i64 = 1_660_700_000;

    fn instance(cliff_amount: u64, step_amount: u64, num_steps: u16) -> StepVesting {
        StepVesting {
            orchestrator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            schedule: VestingSchedule {
                beneficiary: Pubkey::new_unique(),
                cliff_time: LISTING,
                cliff_amount,
                step_amount,
                step_duration: 30 * DAY,
                num_steps,
            },
            claimed: 0,
            bump: 255,
            vault_bump: 254,
        }
    }

    /// Mirrors the claim handler: pay out whatever is claimable.
    fn claim(sv: &mut StepVesting, now: i64) -> u64 {
        let amount = sv.claimable(now).unwrap();
        sv.record_claim(amount).unwrap();
        amount
    }

    #[test]
    fn claim_before_cliff_pays_zero() {
        let mut sv = instance(10_000_000 * TOKEN, 0, 0);
        assert_eq!(claim(&mut sv, LISTING - 2), 0);
        assert_eq!(sv.claimed, 0);
    }

    #[test]
    fn claim_on_cliff_pays_cliff_amount() {
        let mut sv = instance(10_000_000 * TOKEN, 0, 0);
        assert_eq!(claim(&mut sv, LISTING), 10_000_000 * TOKEN);
        assert_eq!(claim(&mut sv, LISTING + 365 * DAY), 0);
    }

    #[test]
    fn airdrop_end_to_end() {
        let mut sv = instance(5_000_000 * TOKEN, 5_000_000 * TOKEN, 5);

        assert_eq!(claim(&mut sv, LISTING), 5_000_000 * TOKEN);
        // not a full step yet
        assert_eq!(claim(&mut sv, LISTING + 29 * DAY), 0);
        assert_eq!(claim(&mut sv, LISTING + 30 * DAY - 2), 0);
        assert_eq!(claim(&mut sv, LISTING + 30 * DAY), 5_000_000 * TOKEN);
        assert_eq!(sv.claimed, 10_000_000 * TOKEN);

        // idempotent inside a step
        assert_eq!(claim(&mut sv, LISTING + 31 * DAY), 0);

        // skipping ahead pays all missed steps at once
        assert_eq!(claim(&mut sv, LISTING + 120 * DAY), 15_000_000 * TOKEN);
        assert_eq!(claim(&mut sv, LISTING + 10_000 * DAY), 5_000_000 * TOKEN);
        assert_eq!(sv.claimed, sv.schedule.total().unwrap());
    }

    #[test]
    fn only_beneficiary_claims() {
        let sv = instance(5, 5, 1);
        assert!(sv.authorize_claim(&sv.beneficiary()).is_ok());
        assert!(matches!(
            sv.authorize_claim(&sv.orchestrator),
            Err(VestingError::AccessDenied)
        ));
        assert!(matches!(
            sv.authorize_claim(&Pubkey::new_unique()),
            Err(VestingError::AccessDenied)
        ));
    }

    #[test]
    fn over_claim_is_rejected() {
        let mut sv = instance(5, 5, 1);
        assert!(matches!(sv.record_claim(11), Err(VestingError::MathOverflow)));
    }
}
