//! Cycle generator.
//!
//! Simulates one supervisor's personal timeline from a start day, repeating
//! work/rest cycles until the drilling quota is met.
//!
//! # Algorithm
//!
//! Per repetition, starting at `day = start_day`:
//! 1. One RISE day.
//! 2. First repetition only (if induction applies): `induction_days` INDUCTION days.
//! 3. DRILLING days: `work_days - induction_days` on the induction cycle,
//!    `work_days` otherwise, clamped to the remaining quota.
//! 4. One DESCENT day.
//! 5. `rest_days - 2` REST days (zero when `rest_days <= 2`).
//!
//! A repetition only starts while the buffer still holds a full cycle, so
//! trailing cells may stay EMPTY.
//!
//! # Complexity
//! O(horizon) per supervisor.

use crate::models::{DayStatus, RegimeConfig, SupervisorTimeline, TRANSITION_DAYS};

/// Inputs for one supervisor's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSpec {
    /// Day of the first RISE.
    pub start_day: usize,
    /// Work days per cycle.
    pub work_days: usize,
    /// Rest days per cycle, rise and descent included.
    pub rest_days: usize,
    /// Induction days on the first cycle.
    pub induction_days: usize,
    /// Drilling days to deliver.
    pub drilling_quota: usize,
    /// Whether the first cycle starts with induction.
    pub include_induction: bool,
}

impl CycleSpec {
    /// Builds a spec from a regime config. Induction is included.
    pub fn from_config(config: &RegimeConfig, start_day: usize) -> Self {
        Self {
            start_day,
            work_days: config.work_days,
            rest_days: config.rest_days,
            induction_days: config.induction_days,
            drilling_quota: config.total_drilling_days,
            include_induction: true,
        }
    }

    /// Sets whether the first cycle carries induction.
    pub fn with_induction(mut self, include_induction: bool) -> Self {
        self.include_induction = include_induction;
        self
    }

    /// Largest number of days one repetition can write.
    ///
    /// Equals `work_days + rest_days` whenever `rest_days >= 2`.
    pub fn cycle_span(&self) -> usize {
        let work = if self.include_induction {
            self.work_days.max(self.induction_days)
        } else {
            self.work_days
        };
        work + self.rest_days.max(TRANSITION_DAYS)
    }
}

/// Writes one supervisor's cycles into `days`.
///
/// Only the cells covered by generated cycles are overwritten.
///
/// # Returns
/// Number of drilling days written.
pub fn generate_supervisor_timeline(days: &mut [DayStatus], spec: &CycleSpec) -> usize {
    let span = spec.cycle_span();
    let rest = spec.rest_days.saturating_sub(TRANSITION_DAYS);
    let mut day = spec.start_day;
    let mut drilled = 0;
    let mut first_cycle = true;

    while drilled < spec.drilling_quota && days.len().saturating_sub(day) >= span {
        day = fill(days, day, DayStatus::Rise, 1);

        let inducting = first_cycle && spec.include_induction;
        if inducting {
            day = fill(days, day, DayStatus::Induction, spec.induction_days);
        }

        let block = if inducting {
            spec.work_days.saturating_sub(spec.induction_days)
        } else {
            spec.work_days
        };
        let block = block.min(spec.drilling_quota - drilled);
        day = fill(days, day, DayStatus::Drilling, block);
        drilled += block;

        day = fill(days, day, DayStatus::Descent, 1);
        day = fill(days, day, DayStatus::Rest, rest);

        first_cycle = false;
    }

    drilled
}

/// Generates a fresh timeline of `len` days.
pub fn generate_timeline(len: usize, spec: &CycleSpec) -> SupervisorTimeline {
    let mut timeline = SupervisorTimeline::new(len);
    generate_supervisor_timeline(timeline.as_mut_slice(), spec);
    timeline
}

fn fill(days: &mut [DayStatus], from: usize, status: DayStatus, count: usize) -> usize {
    let to = from + count;
    days[from..to].fill(status);
    to
}
