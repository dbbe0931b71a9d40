use anchor_lang::prelude::*;

use crate::constants::GRANT_REGISTRY_SEED;
use crate::error::VestingError;
use crate::state::{AccessControl, GrantRegistry, Role};

pub fn initialize_registry(
    ctx: Context<InitializeRegistry>,
    pause_admin: Pubkey,
    grant_admin: Pubkey,
) -> Result<()> {
    require!(pause_admin != Pubkey::default(), VestingError::InvalidParameters);
    require!(grant_admin != Pubkey::default(), VestingError::InvalidParameters);

    let mut access = AccessControl::with_admin(pause_admin)?;
    access.grant_role(Role::PauseAdmin, pause_admin)?;
    access.grant_role(Role::GrantAdmin, grant_admin)?;

    let registry = &mut ctx.accounts.registry;
    registry.access = access;
    registry.paused = false;
    registry.active_grants = 0;
    registry.bump = ctx.bumps.registry;

    emit!(RegistryInitialized {
        pause_admin,
        grant_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + GrantRegistry::SIZE,
        seeds = [GRANT_REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, GrantRegistry>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RegistryInitialized {
    pub pause_admin: Pubkey,
    pub grant_admin: Pubkey,
}
