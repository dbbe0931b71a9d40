pub mod access_control;
pub mod grant;
pub mod investor_pool;
pub mod orchestrator;
pub mod registry;
pub mod step_vesting;

pub use access_control::*;
pub use grant::*;
pub use investor_pool::*;
pub use orchestrator::*;
pub use registry::*;
pub use step_vesting::*;
