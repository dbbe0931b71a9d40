use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::GRANT_SEED;
use crate::state::Grant;
use crate::utils::time;

pub fn emit_grant_quote(ctx: Context<EmitGrantQuote>, beneficiary: Pubkey) -> Result<()> {
    let grant = &ctx.accounts.grant;
    let now = time::now()?;

    let unlocked = grant.unlocked_at(now)?;
    let claimable = if grant.active { grant.claimable(now)? } else { 0 };

    emit!(GrantQuote {
        token: grant.token,
        beneficiary,
        unlocked,
        claimed: grant.claimed,
        claimable,
        active: grant.active,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct EmitGrantQuote<'info> {
    #[account(
        seeds = [GRANT_SEED, mint.key().as_ref(), beneficiary.as_ref()],
        bump = grant.bump
    )]
    pub grant: Box<Account<'info, Grant>>,

    pub mint: Box<Account<'info, Mint>>,
}

#[event]
pub struct GrantQuote {
    pub token: Pubkey,
    pub beneficiary: Pubkey,
    pub unlocked: u64,
    pub claimed: u64,
    pub claimable: u64,
    pub active: bool,
}
