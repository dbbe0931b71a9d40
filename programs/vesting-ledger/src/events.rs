use anchor_lang::prelude::*;

use crate::state::Role;

// Shared by the registry and pool role handlers

#[event]
pub struct RoleGranted {
    pub role: Role,
    pub account: Pubkey,
    pub sender: Pubkey,
}

#[event]
pub struct RoleRevoked {
    pub role: Role,
    pub account: Pubkey,
    pub sender: Pubkey,
}

// Named after their instructions, so kept apart from the accounts structs

#[event]
pub struct AddGrant {
    pub token: Pubkey,
    pub beneficiary: Pubkey,
    pub manager: Pubkey,
    pub instalment_amount: u64,
    pub instalment_count: u16,
    pub total: u64,
}

#[event]
pub struct RevokeGrant {
    pub token: Pubkey,
    pub beneficiary: Pubkey,
    pub tokens: u64,
}

#[event]
pub struct ClaimGrant {
    pub token: Pubkey,
    pub account_address: Pubkey,
    pub amount: u64,
}
