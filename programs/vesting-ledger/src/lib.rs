use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::{GrantParams, InvestorInput, Role};
pub use utils::VestingSchedule;

declare_id!("BcKLu6kYCmvYZMuG3XwntpT3URhgW7bPUPd5Usb3jyZy");

#[program]
pub mod vesting_ledger {
    use super::*;

    // Grant registry

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        pause_admin: Pubkey,
        grant_admin: Pubkey,
    ) -> Result<()> {
        instructions::initialize_registry::initialize_registry(ctx, pause_admin, grant_admin)
    }

    pub fn grant_role(ctx: Context<ManageRoles>, role: Role, account: Pubkey) -> Result<()> {
        instructions::manage_roles::grant_role(ctx, role, account)
    }

    pub fn revoke_role(ctx: Context<ManageRoles>, role: Role, account: Pubkey) -> Result<()> {
        instructions::manage_roles::revoke_role(ctx, role, account)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    pub fn add_grant(ctx: Context<AddGrant>, beneficiary: Pubkey, params: GrantParams) -> Result<()> {
        instructions::add_grant::add_grant(ctx, beneficiary, params)
    }

    pub fn revoke_grant(ctx: Context<RevokeGrant>, beneficiary: Pubkey) -> Result<()> {
        instructions::revoke_grant::revoke_grant(ctx, beneficiary)
    }

    pub fn claim_grant(ctx: Context<ClaimGrant>, beneficiary: Pubkey) -> Result<()> {
        instructions::claim_grant::claim_grant(ctx, beneficiary)
    }

    pub fn emit_grant_quote(ctx: Context<EmitGrantQuote>, beneficiary: Pubkey) -> Result<()> {
        instructions::emit_grant_quote::emit_grant_quote(ctx, beneficiary)
    }

    // Orchestrator and step vesting

    pub fn initialize_orchestrator(
        ctx: Context<InitializeOrchestrator>,
        vesting_infos: Vec<VestingSchedule>,
    ) -> Result<()> {
        instructions::initialize_orchestrator::initialize_orchestrator(ctx, vesting_infos)
    }

    pub fn deploy_step_vesting(ctx: Context<DeployStepVesting>, beneficiary: Pubkey) -> Result<()> {
        instructions::deploy_step_vesting::deploy_step_vesting(ctx, beneficiary)
    }

    pub fn claim_step_vesting(ctx: Context<ClaimStepVesting>) -> Result<()> {
        instructions::claim_step_vesting::claim_step_vesting(ctx)
    }

    pub fn emit_step_vesting_quote(ctx: Context<EmitStepVestingQuote>) -> Result<()> {
        instructions::emit_step_vesting_quote::emit_step_vesting_quote(ctx)
    }

    // Investor pool

    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        instructions::initialize_pool::initialize_pool(ctx)
    }

    pub fn add_investors(
        ctx: Context<AddInvestors>,
        investors: Vec<InvestorInput>,
        seal: bool,
    ) -> Result<()> {
        instructions::add_investors::add_investors(ctx, investors, seal)
    }

    pub fn grant_pool_role(ctx: Context<ManagePoolRoles>, role: Role, account: Pubkey) -> Result<()> {
        instructions::manage_pool_roles::grant_pool_role(ctx, role, account)
    }

    pub fn revoke_pool_role(ctx: Context<ManagePoolRoles>, role: Role, account: Pubkey) -> Result<()> {
        instructions::manage_pool_roles::revoke_pool_role(ctx, role, account)
    }

    pub fn add_money(ctx: Context<AddMoney>, amount: u64) -> Result<()> {
        instructions::add_money::add_money(ctx, amount)
    }

    pub fn claim_investor(ctx: Context<ClaimInvestor>) -> Result<()> {
        instructions::claim_investor::claim_investor(ctx)
    }

    pub fn remove_investors(ctx: Context<RemoveInvestors>, wallets: Vec<Pubkey>) -> Result<()> {
        instructions::remove_investors::remove_investors(ctx, wallets)
    }

    pub fn replace_investor(
        ctx: Context<ReplaceInvestor>,
        old_wallet: Pubkey,
        new_wallet: Pubkey,
    ) -> Result<()> {
        instructions::replace_investor::replace_investor(ctx, old_wallet, new_wallet)
    }

    pub fn return_amount_left(ctx: Context<ReturnAmountLeft>) -> Result<()> {
        instructions::return_amount_left::return_amount_left(ctx)
    }

    pub fn emit_investor_quote(ctx: Context<EmitInvestorQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_investor_quote::emit_investor_quote(ctx, wallet)
    }
}
