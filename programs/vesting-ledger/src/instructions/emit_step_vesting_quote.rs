use anchor_lang::prelude::*;

use crate::constants::STEP_VESTING_SEED;
use crate::state::StepVesting;
use crate::utils::time;

pub fn emit_step_vesting_quote(ctx: Context<EmitStepVestingQuote>) -> Result<()> {
    let sv = &ctx.accounts.step_vesting;
    let now = time::now()?;

    emit!(StepVestingQuote {
        beneficiary: sv.beneficiary(),
        unlocked: sv.schedule.unlocked_at(now)?,
        claimed: sv.claimed,
        claimable: sv.claimable(now)?,
        next_unlock_ts: sv.schedule.next_unlock_at(now)?,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitStepVestingQuote<'info> {
    #[account(
        seeds = [
            STEP_VESTING_SEED,
            step_vesting.orchestrator.as_ref(),
            step_vesting.schedule.beneficiary.as_ref(),
        ],
        bump = step_vesting.bump
    )]
    pub step_vesting: Box<Account<'info, StepVesting>>,
}

#[event]
pub struct StepVestingQuote {
    pub beneficiary: Pubkey,
    pub unlocked: u64,
    pub claimed: u64,
    pub claimable: u64,
    pub next_unlock_ts: Option<i64>,
}
