//! Offset planner and horizon sizing.
//!
//! # Policies
//!
//! | Policy | S1 | S2 | S3 |
//! |--------|----|----|----|
//! | StaggeredThirds | 0 | ⌊C/3⌋ | ⌊2C/3⌋ |
//! | SynchronizedPair | 0 | 0 | ⌊N/2⌋ + 1 |
//!
//! where `C = work_days + rest_days` and `N = work_days`.
//!
//! # Horizon
//! The generation buffer is overprovisioned to
//! `C * (⌈1.5 · quota / N⌉ + 5)` days, then trimmed to the last drilling
//! day plus one rest period and a ten-day margin.

use crate::models::{OffsetPolicy, Offsets, RegimeConfig};

/// Days kept after the last rest tail when trimming.
pub const TRIM_MARGIN_DAYS: usize = 10;

/// Extra cycles added on top of the quota estimate.
const SPARE_CYCLES: usize = 5;

/// Plans first-cycle start days for S1, S2 and S3.
pub fn plan_offsets(policy: OffsetPolicy, work_days: usize, rest_days: usize) -> Offsets {
    match policy {
        OffsetPolicy::StaggeredThirds => {
            let cycle = work_days + rest_days;
            Offsets::new(0, cycle / 3, cycle * 2 / 3)
        }
        OffsetPolicy::SynchronizedPair => Offsets::new(0, 0, work_days / 2 + 1),
    }
}

/// Length of the generation buffer.
///
/// Requires `work_days > 0`.
pub fn horizon_days(config: &RegimeConfig) -> usize {
    // ceil(quota * 1.5 / work) in integer arithmetic
    let estimated = (config.total_drilling_days * 3).div_ceil(config.work_days * 2);
    config.cycle_length() * (estimated + SPARE_CYCLES)
}

/// Trimmed schedule length, never past the horizon.
pub fn trimmed_days(last_drilling_day: Option<usize>, rest_days: usize, horizon: usize) -> usize {
    (last_drilling_day.unwrap_or(0) + rest_days + TRIM_MARGIN_DAYS).min(horizon)
}
