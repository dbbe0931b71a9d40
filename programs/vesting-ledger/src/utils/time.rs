//! Clock access and plausibility bounds for caller-supplied times.

use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::TEN_YEARS;
use crate::error::VestingError;

/// Current cluster time (Unix seconds).
pub fn now() -> anchor_lang::Result<i64> {
    Ok(Clock::get()?.unix_timestamp)
}

/// A duration must be non-negative and no longer than ten years.
pub fn ensure_period_within_horizon(period: i64) -> Result<(), VestingError> {
    if !(0..=TEN_YEARS).contains(&period) {
        return Err(VestingError::InvalidParameters);
    }
    Ok(())
}

/// A start time must lie within ten years of `now`, in either direction.
pub fn ensure_start_within_horizon(start_ts: i64, now_ts: i64) -> Result<(), VestingError> {
    let drift = (start_ts as i128 - now_ts as i128).unsigned_abs();
    if drift > TEN_YEARS as u128 {
        return Err(VestingError::InvalidParameters);
    }
    Ok(())
}

/// `base + offset`, rejecting overflow.
pub fn offset_ts(base: i64, offset: i64) -> Result<i64, VestingError> {
    base.checked_add(offset).ok_or(VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_760_400_000;

    #[test]
    fn period_bounds_inclusive() {
        assert!(ensure_period_within_horizon(0).is_ok());
        assert!(ensure_period_within_horizon(86_400).is_ok());
        assert!(ensure_period_within_horizon(TEN_YEARS).is_ok());
        assert!(ensure_period_within_horizon(TEN_YEARS + 1).is_err());
        // 315_600_000 is just over ten years
        assert!(ensure_period_within_horizon(315_600_000).is_err());
        assert!(ensure_period_within_horizon(-1).is_err());
    }

    #[test]
    fn start_time_drift_both_directions() {
        assert!(ensure_start_within_horizon(NOW, NOW).is_ok());
        assert!(ensure_start_within_horizon(NOW + TEN_YEARS, NOW).is_ok());
        assert!(ensure_start_within_horizon(NOW - TEN_YEARS, NOW).is_ok());
        assert!(ensure_start_within_horizon(NOW + TEN_YEARS + 1, NOW).is_err());
        // a 1980 start time is far outside the horizon
        assert!(ensure_start_within_horizon(315_600_000, NOW).is_err());
        assert!(ensure_start_within_horizon(i64::MIN, i64::MAX).is_err());
    }

    #[test]
    fn offset_rejects_overflow() {
        assert_eq!(offset_ts(NOW, 60).unwrap(), NOW + 60);
        assert!(offset_ts(i64::MAX, 1).is_err());
    }
}
