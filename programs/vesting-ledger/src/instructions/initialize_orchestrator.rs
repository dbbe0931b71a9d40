use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{self, Mint, SetAuthority, Token};

use crate::constants::{MAX_VESTING_INFOS, ORCHESTRATOR_SEED};
use crate::state::Orchestrator;
use crate::utils::VestingSchedule;

pub fn initialize_orchestrator(
    ctx: Context<InitializeOrchestrator>,
    vesting_infos: Vec<VestingSchedule>,
) -> Result<()> {
    let orchestrator_key = ctx.accounts.orchestrator.key();
    Orchestrator::ensure_mint_authority(
        ctx.accounts.mint.mint_authority.into(),
        &ctx.accounts.mint_authority.key(),
    )?;

    let (infos, total_supply) = Orchestrator::prepare_infos(&vesting_infos)?;
    let vesting_count = infos.len() as u8;

    // Authority moves in the same instruction so no one else can claim the fresh PDA.
    token::set_authority(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            SetAuthority {
                current_authority: ctx.accounts.mint_authority.to_account_info(),
                account_or_mint: ctx.accounts.mint.to_account_info(),
            },
        ),
        AuthorityType::MintTokens,
        Some(orchestrator_key),
    )?;

    let o = &mut ctx.accounts.orchestrator;
    o.owner = ctx.accounts.owner.key();
    o.mint = ctx.accounts.mint.key();
    o.vesting_infos = infos;
    o.total_supply = total_supply;
    o.deployed_count = 0;
    o.bump = ctx.bumps.orchestrator;

    emit!(OrchestratorInitialized {
        owner: o.owner,
        mint: o.mint,
        vesting_count,
        total_supply,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeOrchestrator<'info> {
    #[account(
        init,
        payer = owner,
        space = Orchestrator::space(MAX_VESTING_INFOS),
        seeds = [ORCHESTRATOR_SEED, mint.key().as_ref()],
        bump
    )]
    pub orchestrator: Box<Account<'info, Orchestrator>>,

    #[account(mut)]
    pub mint: Box<Account<'info, Mint>>,

    /// Current mint authority; hands minting over to the orchestrator PDA.
    pub mint_authority: Signer<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct OrchestratorInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vesting_count: u8,
    pub total_supply: u64,
}
