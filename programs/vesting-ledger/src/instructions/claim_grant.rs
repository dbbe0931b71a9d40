use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{GRANT_REGISTRY_SEED, GRANT_SEED, GRANT_VAULT_SEED};
use crate::error::VestingError;
use crate::events;
use crate::state::{Grant, GrantRegistry};
use crate::utils::time;

pub fn claim_grant(ctx: Context<ClaimGrant>, beneficiary: Pubkey) -> Result<()> {
    let grant_ai = ctx.accounts.grant.to_account_info();
    let token = ctx.accounts.mint.key();
    let caller = ctx.accounts.authority.key();

    ctx.accounts.registry.ensure_active()?;
    ctx.accounts
        .grant
        .authorize_claim(&ctx.accounts.registry.access, &caller)?;

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        token,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        beneficiary,
        VestingError::InvalidTokenAccount
    );

    let now = time::now()?;
    let grant = &mut ctx.accounts.grant;
    let amount = grant.claimable(now)?;
    let bump = grant.bump;

    if amount == 0 {
        msg!("Nothing unlocked yet for {}", beneficiary);
        emit!(events::ClaimGrant {
            token,
            account_address: beneficiary,
            amount: 0,
        });
        return Ok(());
    }

    require!(
        ctx.accounts.grant_vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );
    let exhausted = grant.record_claim(amount)?;

    let signer_seeds: &[&[&[u8]]] =
        &[&[GRANT_SEED, token.as_ref(), beneficiary.as_ref(), &[bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.grant_vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: grant_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    if exhausted {
        let registry = &mut ctx.accounts.registry;
        registry.active_grants = registry.active_grants.saturating_sub(1);
    }

    emit!(events::ClaimGrant {
        token,
        account_address: beneficiary,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct ClaimGrant<'info> {
    #[account(mut, seeds = [GRANT_REGISTRY_SEED], bump = registry.bump)]
    pub registry: Box<Account<'info, GrantRegistry>>,

    #[account(
        mut,
        seeds = [GRANT_SEED, mint.key().as_ref(), beneficiary.as_ref()],
        bump = grant.bump
    )]
    pub grant: Box<Account<'info, Grant>>,

    #[account(
        mut,
        seeds = [GRANT_VAULT_SEED, grant.key().as_ref()],
        bump = grant.vault_bump
    )]
    pub grant_vault: Box<Account<'info, TokenAccount>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub beneficiary_token_account: Box<Account<'info, TokenAccount>>,

    /// Beneficiary or a grant admin.
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
