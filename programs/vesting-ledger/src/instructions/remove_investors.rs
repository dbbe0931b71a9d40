use anchor_lang::prelude::*;

use crate::constants::INVESTOR_POOL_SEED;
use crate::error::VestingError;
use crate::state::InvestorPool;

/// Forfeited credit stays in the vault and is recovered by `return_amount_left`.
pub fn remove_investors(ctx: Context<RemoveInvestors>, wallets: Vec<Pubkey>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let pool = &mut ctx.accounts.pool;
    pool.ensure_admin(&admin)?;
    require!(!wallets.is_empty(), VestingError::InvalidParameters);

    let forfeited = pool.remove_investors(&wallets)?;

    emit!(InvestorsRemoved {
        admin,
        wallets,
        forfeited,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveInvestors<'info> {
    #[account(
        mut,
        seeds = [INVESTOR_POOL_SEED, pool.mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, InvestorPool>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct InvestorsRemoved {
    pub admin: Pubkey,
    pub wallets: Vec<Pubkey>,
    pub forfeited: u64,
}
