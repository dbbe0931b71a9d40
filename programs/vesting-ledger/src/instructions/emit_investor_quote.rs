use anchor_lang::prelude::*;

use crate::constants::INVESTOR_POOL_SEED;
use crate::state::InvestorPool;

pub fn emit_investor_quote(ctx: Context<EmitInvestorQuote>, wallet: Pubkey) -> Result<()> {
    let pool = &ctx.accounts.pool;

    emit!(InvestorQuote {
        wallet,
        tokens_left: pool.tokens_left(&wallet),
        total_claimable: pool.total_claimable(&wallet),
        claimed_tokens: pool.claimed_tokens(&wallet),
        min_amount_add: pool.min_amount_add()?,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitInvestorQuote<'info> {
    #[account(
        seeds = [INVESTOR_POOL_SEED, pool.mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, InvestorPool>>,
}

#[event]
pub struct InvestorQuote {
    pub wallet: Pubkey,
    pub tokens_left: u64,
    pub total_claimable: u64,
    pub claimed_tokens: u64,
    pub min_amount_add: u64,
}
