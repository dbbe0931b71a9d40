use anchor_lang::prelude::*;

use crate::constants::INVESTOR_POOL_SEED;
use crate::events;
use crate::state::{InvestorPool, Role};

pub fn grant_pool_role(ctx: Context<ManagePoolRoles>, role: Role, account: Pubkey) -> Result<()> {
    let sender = ctx.accounts.admin.key();
    ctx.accounts.pool.grant_role(&sender, role, account)?;

    emit!(events::RoleGranted {
        role,
        account,
        sender,
    });
    Ok(())
}

pub fn revoke_pool_role(ctx: Context<ManagePoolRoles>, role: Role, account: Pubkey) -> Result<()> {
    let sender = ctx.accounts.admin.key();
    ctx.accounts.pool.revoke_role(&sender, role, &account)?;

    emit!(events::RoleRevoked {
        role,
        account,
        sender,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ManagePoolRoles<'info> {
    #[account(
        mut,
        seeds = [INVESTOR_POOL_SEED, pool.mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, InvestorPool>>,

    pub admin: Signer<'info>,
}
