//! Program-wide constants.

/// Upper bound for cliff periods, instalment periods and start-time drift (3650 days).
pub const TEN_YEARS: i64 = 315_360_000;

/// Max instalments a single grant may be split into.
pub const MAX_INSTALMENT_COUNT: u16 = 1200;

/// Number of top-up rounds an investor pool distributes entitlements over.
pub const INVESTOR_INSTALMENTS: u8 = 12;

/// Max investors stored in a pool roster.
pub const MAX_INVESTORS: usize = 35;

/// Max vesting infos an orchestrator can deploy.
pub const MAX_VESTING_INFOS: usize = 10;

/// Max members of a role table.
pub const MAX_ROLE_MEMBERS: usize = 16;

pub const GRANT_REGISTRY_SEED: &[u8] = b"grant_registry";
pub const GRANT_SEED: &[u8] = b"grant";
pub const GRANT_VAULT_SEED: &[u8] = b"grant_vault";
pub const ORCHESTRATOR_SEED: &[u8] = b"orchestrator";
pub const STEP_VESTING_SEED: &[u8] = b"step_vesting";
pub const STEP_VAULT_SEED: &[u8] = b"step_vault";
pub const INVESTOR_POOL_SEED: &[u8] = b"investor_pool";
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";
