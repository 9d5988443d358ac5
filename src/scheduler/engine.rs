//! Rotation engine entry point.
//!
//! # Algorithm
//!
//! 1. Check the regime preconditions.
//! 2. Size an overprovisioned horizon and plan the three start offsets.
//! 3. Run the cycle generator once per supervisor into its own buffer.
//! 4. Trim to the last drilling day plus a rest tail and margin.
//! 5. Validate against the policy's concurrency rule.
//!
//! Each call is independent: no state is shared between invocations.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::cycle::{generate_supervisor_timeline, CycleSpec};
use super::kpi::ScheduleStats;
use super::offsets::{horizon_days, plan_offsets, trimmed_days};
use crate::error::RotationResult;
use crate::models::{Offsets, RegimeConfig, Schedule, SupervisorId, SupervisorTimeline};
use crate::validation::{validate_schedule, ValidationResult};

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    /// Config the schedule was generated from.
    pub config: RegimeConfig,
    /// Trimmed three-supervisor schedule.
    pub schedule: Schedule,
    /// Validation under the config's policy.
    pub validation: ValidationResult,
    /// Schedule length after trimming.
    pub total_days: usize,
    /// Buffer length before trimming.
    pub horizon_days: usize,
    /// Planned start day per supervisor.
    pub offsets: Offsets,
}

impl GeneratedSchedule {
    /// Summary statistics of the schedule.
    pub fn stats(&self) -> ScheduleStats {
        ScheduleStats::calculate(&self.schedule)
    }

    /// Validates the schedule again under the same policy.
    pub fn revalidate(&self) -> ValidationResult {
        validate_schedule(&self.schedule, self.config.policy)
    }
}

/// Generates and validates a rotation schedule.
///
/// # Errors
/// Returns [`RotationError::InvalidConfig`](crate::error::RotationError::InvalidConfig)
/// when the config breaks a precondition (zero durations, induction not
/// shorter than the work block). Concurrency violations are reported in
/// the returned [`ValidationResult`], not as errors.
///
/// # Example
///
/// ```
/// use u_rotation::models::{RegimeConfig, SupervisorId};
/// use u_rotation::scheduler::generate_schedule;
///
/// let generated = generate_schedule(&RegimeConfig::new(14, 7, 5, 30)).unwrap();
/// assert!(generated.validation.is_valid);
/// assert_eq!(generated.schedule.len(), generated.total_days);
/// assert_eq!(
///     generated.schedule.timeline(SupervisorId::S1).drilling_days(),
///     30
/// );
/// ```
pub fn generate_schedule(config: &RegimeConfig) -> RotationResult<GeneratedSchedule> {
    config.validate()?;

    let horizon = horizon_days(config);
    let offsets = plan_offsets(config.policy, config.work_days, config.rest_days);

    let [s1, s2, s3] = SupervisorId::ALL.map(|id| {
        let spec = CycleSpec::from_config(config, offsets.get(id));
        let mut timeline = SupervisorTimeline::new(horizon);
        let drilled = generate_supervisor_timeline(timeline.as_mut_slice(), &spec);
        if drilled < spec.drilling_quota {
            warn!(
                supervisor = %id,
                drilled,
                quota = spec.drilling_quota,
                horizon,
                "supervisor quota not reached within horizon"
            );
        } else {
            debug!(supervisor = %id, start_day = spec.start_day, drilled, "timeline generated");
        }
        timeline
    });

    let mut schedule = Schedule::new(s1, s2, s3)?;
    let total_days = trimmed_days(schedule.last_drilling_day(), config.rest_days, horizon);
    schedule.truncate(total_days);

    let validation = validate_schedule(&schedule, config.policy);

    info!(
        regime = %config.label(),
        policy = %config.policy,
        horizon,
        total_days,
        violations = validation.errors.len(),
        warnings = validation.warnings.len(),
        "rotation schedule generated"
    );

    Ok(GeneratedSchedule {
        config: config.clone(),
        schedule,
        validation,
        total_days,
        horizon_days: horizon,
        offsets,
    })
}
