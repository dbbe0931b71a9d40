use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{STEP_VAULT_SEED, STEP_VESTING_SEED};
use crate::error::VestingError;
use crate::state::StepVesting;
use crate::utils::time;

pub fn claim_step_vesting(ctx: Context<ClaimStepVesting>) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let step_vesting_ai = ctx.accounts.step_vesting.to_account_info();

    let sv = &mut ctx.accounts.step_vesting;
    let beneficiary = sv.beneficiary();
    sv.authorize_claim(&ctx.accounts.beneficiary.key())?;
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        sv.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        beneficiary,
        VestingError::InvalidTokenAccount
    );

    let now = time::now()?;
    let amount = sv.claimable(now)?;
    if amount == 0 {
        // Before the cliff or between steps: nothing to pay, not an error.
        msg!("Nothing to claim at {}", now);
        return Ok(());
    }

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );
    sv.record_claim(amount)?;
    let claimed_total = sv.claimed;

    let orchestrator = sv.orchestrator;
    let signer_seeds: &[&[&[u8]]] = &[&[
        STEP_VESTING_SEED,
        orchestrator.as_ref(),
        beneficiary.as_ref(),
        &[sv.bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: step_vesting_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(StepVestingClaimed {
        beneficiary,
        amount,
        claimed_total,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimStepVesting<'info> {
    #[account(
        mut,
        seeds = [
            STEP_VESTING_SEED,
            step_vesting.orchestrator.as_ref(),
            step_vesting.schedule.beneficiary.as_ref(),
        ],
        bump = step_vesting.bump
    )]
    pub step_vesting: Box<Account<'info, StepVesting>>,

    #[account(
        mut,
        seeds = [STEP_VAULT_SEED, step_vesting.key().as_ref()],
        bump = step_vesting.vault_bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub beneficiary_token_account: Box<Account<'info, TokenAccount>>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct StepVestingClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
}
