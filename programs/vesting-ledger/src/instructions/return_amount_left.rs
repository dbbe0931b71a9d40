use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{INVESTOR_POOL_SEED, POOL_VAULT_SEED};
use crate::error::VestingError;
use crate::state::InvestorPool;

pub fn return_amount_left(ctx: Context<ReturnAmountLeft>) -> Result<()> {
    let pool_ai = ctx.accounts.pool.to_account_info();
    let admin = ctx.accounts.admin.key();

    let pool = &mut ctx.accounts.pool;
    pool.ensure_admin(&admin)?;
    pool.ensure_nothing_left()?;

    require_keys_eq!(
        ctx.accounts.admin_destination.mint,
        pool.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_destination.owner,
        admin,
        VestingError::InvalidTokenAccount
    );

    // Excess top-ups and forfeited credit; everything in the vault goes back.
    let amount = ctx.accounts.vault.amount;
    pool.record_sweep();
    if amount == 0 {
        emit!(AmountLeftReturned { admin, amount: 0 });
        return Ok(());
    }

    let (mint, creator, bump) = (pool.mint, pool.creator, pool.bump);
    let signer_seeds: &[&[&[u8]]] = &[&[
        INVESTOR_POOL_SEED,
        mint.as_ref(),
        creator.as_ref(),
        &[bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: pool_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(AmountLeftReturned { admin, amount });
    Ok(())
}

#[derive(Accounts)]
pub struct ReturnAmountLeft<'info> {
    #[account(
        mut,
        seeds = [INVESTOR_POOL_SEED, pool.mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, InvestorPool>>,

    #[account(
        mut,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump = pool.vault_bump,
        constraint = vault.mint == pool.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub admin_destination: Box<Account<'info, TokenAccount>>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AmountLeftReturned {
    pub admin: Pubkey,
    pub amount: u64,
}
