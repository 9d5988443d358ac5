//! Rotation domain models.
//!
//! Provides the data types exchanged between the cycle generator, the
//! offset planner, and the validator. All of them are created fresh per
//! generation run and never mutated once returned.
//!
//! # Domain Mappings
//!
//! | u-rotation | Drilling campaign |
//! |------------|-------------------|
//! | RegimeConfig | NxM work/rest regime |
//! | SupervisorTimeline | One supervisor's roster |
//! | Schedule | Crew roster for S1, S2, S3 |
//! | OffsetPolicy | Crew staggering strategy |

mod policy;
mod regime;
mod schedule;
mod status;

pub use policy::{ConcurrencyRule, OffsetPolicy, Offsets};
pub use regime::{InputBounds, RegimeConfig, TRANSITION_DAYS};
pub use schedule::{ConcurrencyDistribution, Schedule, SupervisorId, SupervisorTimeline};
pub use status::DayStatus;
