use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{INVESTOR_POOL_SEED, POOL_VAULT_SEED};
use crate::error::VestingError;
use crate::state::InvestorPool;

pub fn claim_investor(ctx: Context<ClaimInvestor>) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let pool_ai = ctx.accounts.pool.to_account_info();
    let investor = ctx.accounts.investor.key();

    let pool = &mut ctx.accounts.pool;
    let amount = pool.claim(&investor)?;
    let claimed_total = pool.claimed_tokens(&investor);

    require_keys_eq!(
        ctx.accounts.investor_token_account.mint,
        pool.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.investor_token_account.owner,
        investor,
        VestingError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

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
                to: ctx.accounts.investor_token_account.to_account_info(),
                authority: pool_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(InvestorClaimed {
        investor,
        amount,
        claimed_total,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimInvestor<'info> {
    #[account(
        mut,
        seeds = [INVESTOR_POOL_SEED, pool.mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, InvestorPool>>,

    #[account(
        mut,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump = pool.vault_bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub investor_token_account: Box<Account<'info, TokenAccount>>,

    pub investor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct InvestorClaimed {
    pub investor: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
}
