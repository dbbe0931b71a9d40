use anchor_lang::prelude::*;

use crate::constants::INVESTOR_POOL_SEED;
use crate::error::VestingError;
use crate::state::{InvestorInput, InvestorPool};

pub fn add_investors(
    ctx: Context<AddInvestors>,
    inputs: Vec<InvestorInput>,
    seal: bool,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.ensure_admin(&ctx.accounts.admin.key())?;

    let count_added = pool.add_investors(&inputs)?;
    let digest = if seal { pool.seal()? } else { [0u8; 32] };
    let new_total = u8::try_from(pool.investors.len()).map_err(|_| VestingError::MathOverflow)?;

    emit!(InvestorsAdded {
        count_added,
        new_total,
        sealed: pool.sealed,
        digest,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddInvestors<'info> {
    #[account(
        mut,
        seeds = [INVESTOR_POOL_SEED, pool.mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, InvestorPool>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct InvestorsAdded {
    pub count_added: u8,
    pub new_total: u8,
    pub sealed: bool,
    pub digest: [u8; 32],
}
