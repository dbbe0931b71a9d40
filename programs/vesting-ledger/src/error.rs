use anchor_lang::prelude::*;

/// Custom error codes for the vesting ledger program.
#[error_code]
pub enum VestingError {
    #[msg("Invalid parameters")]
    InvalidParameters,

    #[msg("Unauthorized: missing role or not a party to the grant")]
    Unauthorized,

    #[msg("access denied")]
    AccessDenied,

    #[msg("NotAdmin")]
    NotAdmin,

    #[msg("NotInvestor")]
    NotInvestor,

    #[msg("An active grant already exists for this token and beneficiary")]
    GrantAlreadyActive,

    #[msg("No active grant for this token and beneficiary")]
    NoActiveGrant,

    #[msg("Grant registry is paused")]
    RegistryPaused,

    #[msg("Grant registry is not paused")]
    RegistryNotPaused,

    #[msg("Role already granted to this account")]
    RoleAlreadyGranted,

    #[msg("Role not held by this account")]
    RoleNotFound,

    #[msg("Role table is full")]
    RoleListFull,

    #[msg("Cannot revoke the last admin")]
    LastAdmin,

    #[msg("AlreadyClaimed")]
    AlreadyClaimed,

    #[msg("AmountLessThanTotalInvestorAmount")]
    AmountLessThanTotalInvestorAmount,

    #[msg("TokenLeftToClaim")]
    TokenLeftToClaim,

    #[msg("All instalments have been distributed")]
    NothingToDistribute,

    #[msg("Investor list is empty")]
    EmptyInvestorList,

    #[msg("Investor list is full")]
    InvestorListFull,

    #[msg("Investor roster is sealed")]
    RosterSealed,

    #[msg("Investor roster is not sealed")]
    RosterNotSealed,

    #[msg("Duplicate investor wallet")]
    DuplicateInvestor,

    #[msg("Vesting info list is empty or full")]
    InvalidVestingInfoCount,

    #[msg("Duplicate vesting beneficiary")]
    DuplicateBeneficiary,

    #[msg("No vesting info for this beneficiary")]
    VestingInfoNotFound,

    #[msg("Vesting instance already deployed")]
    AlreadyDeployed,

    #[msg("Mint authority must be the orchestrator")]
    InvalidMintAuthority,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
