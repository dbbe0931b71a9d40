pub mod initialize_registry;
pub mod manage_roles;
pub mod pause;
pub mod unpause;
pub mod add_grant;
pub mod revoke_grant;
pub mod claim_grant;
pub mod emit_grant_quote;
pub mod initialize_orchestrator;
pub mod deploy_step_vesting;
pub mod claim_step_vesting;
pub mod emit_step_vesting_quote;
pub mod initialize_pool;
pub mod add_investors;
pub mod manage_pool_roles;
pub mod add_money;
pub mod claim_investor;
pub mod remove_investors;
pub mod replace_investor;
pub mod return_amount_left;
pub mod emit_investor_quote;

pub use initialize_registry::*;
pub use manage_roles::*;
pub use pause::*;
pub use unpause::*;
pub use add_grant::*;
pub use revoke_grant::*;
pub use claim_grant::*;
pub use emit_grant_quote::*;
pub use initialize_orchestrator::*;
pub use deploy_step_vesting::*;
pub use claim_step_vesting::*;
pub use emit_step_vesting_quote::*;
pub use initialize_pool::*;
pub use add_investors::*;
pub use manage_pool_roles::*;
pub use add_money::*;
pub use claim_investor::*;
pub use remove_investors::*;
pub use replace_investor::*;
pub use return_amount_left::*;
pub use emit_investor_quote::*;
