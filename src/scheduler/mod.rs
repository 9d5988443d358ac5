//! Rotation generation and statistics.
//!
//! Provides the cycle generator, the offset planner, the engine entry point
//! that ties them to the validator, and schedule statistics.
//!
//! # Pipeline
//!
//! `RegimeConfig` → offsets → three timelines → trimmed `Schedule` →
//! `ValidationResult`, with `ScheduleStats` derived on demand.
//!
//! # Complexity
//! Linear in the horizon, which is bounded by the configuration
//! (typically a few hundred days).

mod cycle;
mod engine;
mod kpi;
mod offsets;

pub use cycle::{generate_supervisor_timeline, generate_timeline, CycleSpec};
pub use engine::{generate_schedule, GeneratedSchedule};
pub use kpi::{schedule_stats, ScheduleStats};
pub use offsets::{horizon_days, plan_offsets, trimmed_days, TRIM_MARGIN_DAYS};
