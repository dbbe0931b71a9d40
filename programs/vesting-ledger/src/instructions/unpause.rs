use anchor_lang::prelude::*;

use crate::constants::GRANT_REGISTRY_SEED;
use crate::state::GrantRegistry;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.registry.set_paused(&admin, false)?;
    emit!(RegistryUnpaused { admin });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [GRANT_REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, GrantRegistry>,
    pub admin: Signer<'info>,
}

#[event]
pub struct RegistryUnpaused {
    pub admin: Pubkey,
}
