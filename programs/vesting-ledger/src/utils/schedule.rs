//! Cliff + stepped-instalment vesting math.
//! - before cliff_time nothing is unlocked
//! - at cliff_time cliff_amount unlocks
//! - every full step_duration after the cliff unlocks one step_amount, up to num_steps

use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::VestingError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub beneficiary: Pubkey,
    pub cliff_time: i64,
    pub cliff_amount: u64,
    pub step_amount: u64,
    pub step_duration: i64,
    pub num_steps: u16,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // cliff_time
        8 +  // cliff_amount
        8 +  // step_amount
        8 +  // step_duration
        2;   // num_steps

    pub fn validate(&self) -> Result<(), VestingError> {
        if self.beneficiary == Pubkey::default() || self.cliff_time < 0 {
            return Err(VestingError::InvalidParameters);
        }
        if self.step_duration < 0 || (self.num_steps > 0 && self.step_duration == 0) {
            return Err(VestingError::InvalidParameters);
        }
        if self.total()? == 0 {
            return Err(VestingError::InvalidParameters);
        }
        Ok(())
    }

    /// cliff_amount + step_amount * num_steps
    pub fn total(&self) -> Result<u64, VestingError> {
        self.amount_after_steps(self.num_steps as u64)
    }

    pub fn unlocked_at(&self, now: i64) -> Result<u64, VestingError> {
        if now < self.cliff_time {
            return Ok(0);
        }
        let steps = self.elapsed_steps(now)?;
        self.amount_after_steps(steps)
    }

    /// Full steps elapsed since the cliff, capped at num_steps.
    pub fn elapsed_steps(&self, now: i64) -> Result<u64, VestingError> {
        if now < self.cliff_time || self.num_steps == 0 {
            return Ok(0);
        }
        if self.step_duration <= 0 {
            return Err(VestingError::InvalidParameters);
        }
        let since_cliff = now as i128 - self.cliff_time as i128;
        let steps = since_cliff / self.step_duration as i128;
        Ok(steps.min(self.num_steps as i128) as u64)
    }

    /// Timestamp of the next unlock strictly after `now`, if any remain.
    pub fn next_unlock_at(&self, now: i64) -> Result<Option<i64>, VestingError> {
        if now < self.cliff_time {
            return Ok(Some(self.cliff_time));
        }
        let steps = self.elapsed_steps(now)?;
        if steps >= self.num_steps as u64 {
            return Ok(None);
        }
        let offset = self
            .step_duration
            .checked_mul((steps + 1) as i64)
            .ok_or(VestingError::MathOverflow)?;
        let next = self
            .cliff_time
            .checked_add(offset)
            .ok_or(VestingError::MathOverflow)?;
        Ok(Some(next))
    }

    fn amount_after_steps(&self, steps: u64) -> Result<u64, VestingError> {
        let v = (self.step_amount as u128)
            .checked_mul(steps as u128)
            .ok_or(VestingError::MathOverflow)?
            .checked_add(self.cliff_amount as u128)
            .ok_or(VestingError::MathOverflow)?;
        u64::try_from(v).map_err(|_| VestingError::MathOverflow)
    }
}
