use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{INVESTOR_POOL_SEED, POOL_VAULT_SEED};
use crate::error::VestingError;
use crate::state::InvestorPool;

pub fn add_money(ctx: Context<AddMoney>, amount: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let pool = &mut ctx.accounts.pool;
    pool.ensure_admin(&admin)?;

    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        pool.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        admin,
        VestingError::InvalidTokenAccount
    );

    let credited = pool.add_money(amount)?;
    require!(
        ctx.accounts.admin_token_account.amount >= amount,
        VestingError::InsufficientBalance
    );
    let instalment = pool.instalments_added;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(MoneyAdded {
        admin,
        amount,
        credited,
        instalment,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddMoney<'info> {
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
    pub admin_token_account: Box<Account<'info, TokenAccount>>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct MoneyAdded {
    pub admin: Pubkey,
    pub amount: u64,
    pub credited: u64,
    pub instalment: u8,
}
