use anchor_lang::prelude::*;

use crate::constants::GRANT_REGISTRY_SEED;
use crate::state::GrantRegistry;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.registry.set_paused(&admin, true)?;
    emit!(RegistryPaused { admin });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [GRANT_REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, GrantRegistry>,
    pub admin: Signer<'info>,
}

#[event]
pub struct RegistryPaused {
    pub admin: Pubkey,
}
