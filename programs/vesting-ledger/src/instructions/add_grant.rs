use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{GRANT_REGISTRY_SEED, GRANT_SEED, GRANT_VAULT_SEED};
use crate::error::VestingError;
use crate::events;
use crate::state::{Grant, GrantParams, GrantRegistry, Role};
use crate::utils::time;

pub fn add_grant(ctx: Context<AddGrant>, beneficiary: Pubkey, params: GrantParams) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    let token = ctx.accounts.mint.key();

    let registry = &ctx.accounts.registry;
    registry.ensure_active()?;
    registry.ensure_role(Role::GrantAdmin, &manager)?;

    let now = time::now()?;
    let total = params.validate(&token, &beneficiary, now)?;

    require_keys_eq!(
        ctx.accounts.manager_token_account.mint,
        token,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.manager_token_account.owner,
        manager,
        VestingError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.manager_token_account.amount >= total,
        VestingError::InsufficientBalance
    );

    let grant = &mut ctx.accounts.grant;
    grant.open(token, beneficiary, manager, &params)?;
    grant.bump = ctx.bumps.grant;
    grant.vault_bump = ctx.bumps.grant_vault;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.manager_token_account.to_account_info(),
                to: ctx.accounts.grant_vault.to_account_info(),
                authority: ctx.accounts.manager.to_account_info(),
            },
        ),
        total,
    )?;

    let registry = &mut ctx.accounts.registry;
    registry.active_grants = registry
        .active_grants
        .checked_add(1)
        .ok_or(VestingError::MathOverflow)?;

    emit!(events::AddGrant {
        token,
        beneficiary,
        manager,
        instalment_amount: params.instalment_amount,
        instalment_count: params.instalment_count,
        total,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct AddGrant<'info> {
    #[account(mut, seeds = [GRANT_REGISTRY_SEED], bump = registry.bump)]
    pub registry: Box<Account<'info, GrantRegistry>>,

    #[account(
        init_if_needed,
        payer = manager,
        space = 8 + Grant::SIZE,
        seeds = [GRANT_SEED, mint.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub grant: Box<Account<'info, Grant>>,

    #[account(
        init_if_needed,
        payer = manager,
        token::mint = mint,
        token::authority = grant,
        seeds = [GRANT_VAULT_SEED, grant.key().as_ref()],
        bump
    )]
    pub grant_vault: Box<Account<'info, TokenAccount>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub manager_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub manager: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
