use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::{ORCHESTRATOR_SEED, STEP_VAULT_SEED, STEP_VESTING_SEED};
use crate::error::VestingError;
use crate::state::{Orchestrator, StepVesting};

pub fn deploy_step_vesting(ctx: Context<DeployStepVesting>, beneficiary: Pubkey) -> Result<()> {
    let orchestrator_ai = ctx.accounts.orchestrator.to_account_info();
    let orchestrator_key = ctx.accounts.orchestrator.key();
    let mint_key = ctx.accounts.mint.key();

    let o = &mut ctx.accounts.orchestrator;
    o.ensure_owner(&ctx.accounts.owner.key())?;

    let schedule = o.take_for_deploy(&beneficiary)?;
    let amount = schedule.total()?;
    let orchestrator_bump = o.bump;
    let deployed_count = o.deployed_count;
    if o.fully_deployed() {
        msg!("All {} vesting infos deployed", deployed_count);
    }

    let sv = &mut ctx.accounts.step_vesting;
    sv.orchestrator = orchestrator_key;
    sv.mint = mint_key;
    sv.schedule = schedule;
    sv.claimed = 0;
    sv.bump = ctx.bumps.step_vesting;
    sv.vault_bump = ctx.bumps.vault;

    let signer_seeds: &[&[&[u8]]] =
        &[&[ORCHESTRATOR_SEED, mint_key.as_ref(), &[orchestrator_bump]]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: orchestrator_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(StepVestingDeployed {
        beneficiary,
        step_vesting: ctx.accounts.step_vesting.key(),
        amount,
        deployed_count,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct DeployStepVesting<'info> {
    #[account(
        mut,
        seeds = [ORCHESTRATOR_SEED, mint.key().as_ref()],
        bump = orchestrator.bump,
        has_one = mint @ VestingError::InvalidTokenMint,
    )]
    pub orchestrator: Box<Account<'info, Orchestrator>>,

    #[account(
        init,
        payer = owner,
        space = 8 + StepVesting::SIZE,
        seeds = [STEP_VESTING_SEED, orchestrator.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub step_vesting: Box<Account<'info, StepVesting>>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = step_vesting,
        seeds = [STEP_VAULT_SEED, step_vesting.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct StepVestingDeployed {
    pub beneficiary: Pubkey,
    pub step_vesting: Pubkey,
    pub amount: u64,
    pub deployed_count: u8,
}
