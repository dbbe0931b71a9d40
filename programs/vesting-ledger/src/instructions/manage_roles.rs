use anchor_lang::prelude::*;

use crate::constants::GRANT_REGISTRY_SEED;
use crate::events;
use crate::state::{GrantRegistry, Role};

pub fn grant_role(ctx: Context<ManageRoles>, role: Role, account: Pubkey) -> Result<()> {
    let sender = ctx.accounts.admin.key();
    let registry = &mut ctx.accounts.registry;
    registry.ensure_role(Role::Admin, &sender)?;
    registry.access.grant_role(role, account)?;

    emit!(events::RoleGranted {
        role,
        account,
        sender,
    });
    Ok(())
}

pub fn revoke_role(ctx: Context<ManageRoles>, role: Role, account: Pubkey) -> Result<()> {
    let sender = ctx.accounts.admin.key();
    let registry = &mut ctx.accounts.registry;
    registry.ensure_role(Role::Admin, &sender)?;
    registry.access.revoke_role(role, &account)?;

    emit!(events::RoleRevoked {
        role,
        account,
        sender,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ManageRoles<'info> {
    #[account(mut, seeds = [GRANT_REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, GrantRegistry>,

    pub admin: Signer<'info>,
}
