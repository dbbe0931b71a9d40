pub mod digest;
pub mod schedule;
pub mod time;

pub use schedule::VestingSchedule;
