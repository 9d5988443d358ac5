//! Schedule statistics.
//!
//! Aggregates a merged schedule into display figures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total days | Schedule length after trimming |
//! | Total drilling days | DRILLING cells across all supervisors |
//! | Distribution | Days with exactly 0/1/2/3 drillers |
//! | Contract clause | No day with 3 drillers |
//! | Violation days | Days with 3 drillers |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ConcurrencyDistribution, Schedule, SupervisorId};

/// Summary statistics of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Number of days in the schedule.
    pub total_days: usize,
    /// Drilling cells summed over all supervisors.
    pub total_drilling_days: usize,
    /// Drilling cells per supervisor.
    pub drilling_days_by_supervisor: BTreeMap<SupervisorId, usize>,
    /// Day counts by concurrency level.
    pub distribution: ConcurrencyDistribution,
    /// Whether no day has three drillers.
    pub meets_contract_clause: bool,
    /// Days with three drillers.
    pub violation_days: usize,
}

impl ScheduleStats {
    /// Computes statistics in one pass over the schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let drilling_days_by_supervisor: BTreeMap<SupervisorId, usize> = schedule
            .iter()
            .map(|(id, timeline)| (id, timeline.drilling_days()))
            .collect();
        let total_drilling_days = drilling_days_by_supervisor.values().sum();
        let distribution = schedule.concurrency_distribution();

        Self {
            total_days: schedule.len(),
            total_drilling_days,
            drilling_days_by_supervisor,
            distribution,
            meets_contract_clause: distribution.three == 0,
            violation_days: distribution.three,
        }
    }

    /// Drilling days delivered by one supervisor.
    pub fn drilling_days_of(&self, id: SupervisorId) -> usize {
        self.drilling_days_by_supervisor
            .get(&id)
            .copied()
            .unwrap_or(0)
    }

    /// Fraction of days with at least one driller (0.0..1.0).
    pub fn coverage_rate(&self) -> f64 {
        if self.total_days == 0 {
            0.0
        } else {
            (self.total_days - self.distribution.zero) as f64 / self.total_days as f64
        }
    }
}

/// Computes statistics for a schedule.
pub fn schedule_stats(schedule: &Schedule) -> ScheduleStats {
    ScheduleStats::calculate(schedule)
}
