use anchor_lang::prelude::*;

use crate::constants::INVESTOR_POOL_SEED;
use crate::state::InvestorPool;

pub fn replace_investor(
    ctx: Context<ReplaceInvestor>,
    old_wallet: Pubkey,
    new_wallet: Pubkey,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let pool = &mut ctx.accounts.pool;
    pool.ensure_admin(&admin)?;

    pool.replace_investor(&old_wallet, new_wallet)?;

    emit!(InvestorReplaced {
        admin,
        old_wallet,
        new_wallet,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ReplaceInvestor<'info> {
    #[account(
        mut,
        seeds = [INVESTOR_POOL_SEED, pool.mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, InvestorPool>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct InvestorReplaced {
    pub admin: Pubkey,
    pub old_wallet: Pubkey,
    pub new_wallet: Pubkey,
}
