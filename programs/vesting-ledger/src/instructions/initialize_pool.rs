use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{INVESTOR_POOL_SEED, MAX_INVESTORS, POOL_VAULT_SEED};
use crate::state::{AccessControl, InvestorPool};

pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let creator = ctx.accounts.creator.key();
    let mint = ctx.accounts.mint.key();

    let pool = &mut ctx.accounts.pool;
    pool.creator = creator;
    pool.mint = mint;
    pool.access = AccessControl::with_admin(creator)?;
    pool.investors = Vec::new();
    pool.total_entitlement = 0;
    pool.instalments_added = 0;
    pool.pool_balance = 0;
    pool.sealed = false;
    pool.investors_digest = [0u8; 32];
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.vault;

    emit!(PoolInitialized {
        pool: pool_key,
        admin: creator,
        mint,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = creator,
        space = InvestorPool::space(MAX_INVESTORS),
        seeds = [INVESTOR_POOL_SEED, mint.key().as_ref(), creator.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, InvestorPool>>,

    #[account(
        init,
        payer = creator,
        token::mint = mint,
        token::authority = pool,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
}
