//! Schedule validation.
//!
//! Scans a merged schedule day by day and reports:
//! - Concurrency violations under the policy's rule-set
//!   (`THREE_DRILLING` always; `ZERO_DRILLING` / `ONE_DRILLING` once S3 is
//!   active under the synchronized-pair rule)
//! - Per-supervisor pattern warnings (rise followed by rise, rise followed
//!   by descent)
//!
//! Violations are data: validation never fails, it returns a
//! [`ValidationResult`] for display.
//!
//! # Exactly-two window
//! Under [`ConcurrencyRule::ExactlyTwoAfterS3Active`] the rule covers every
//! day from S3's first drilling day to the end of the schedule, the trimmed
//! tail included.

use serde::{Deserialize, Serialize};
use std::ops::RangeFrom;
use tracing::{debug, warn};

use crate::models::{
    ConcurrencyDistribution, ConcurrencyRule, DayStatus, OffsetPolicy, Schedule, SupervisorId,
};

/// Outcome of validating a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff no violation was recorded.
    pub is_valid: bool,
    /// Concurrency violations in day order.
    pub errors: Vec<Violation>,
    /// Pattern warnings in day order.
    pub warnings: Vec<Warning>,
    /// First day S3 drills.
    pub s3_active_day: Option<usize>,
    /// Day counts by concurrency level.
    pub distribution: ConcurrencyDistribution,
    /// Policy whose rule-set was applied.
    pub policy: OffsetPolicy,
}

/// A concurrency violation on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub day: usize,
    pub violation_type: ViolationType,
    pub message: String,
    /// Supervisors drilling that day.
    pub supervisors: Vec<SupervisorId>,
}

/// Classification of concurrency violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationType {
    /// Nobody drilling while exactly two are required.
    ZeroDrilling,
    /// One driller while exactly two are required.
    OneDrilling,
    /// Three simultaneous drillers: breaks the contractual clause.
    ThreeDrilling,
}

/// A non-fatal pattern warning for one supervisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub day: usize,
    pub warning_type: WarningType,
    pub supervisor: SupervisorId,
    pub message: String,
}

/// Classification of pattern warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningType {
    /// RISE followed by RISE.
    ConsecutiveRise,
    /// RISE followed by DESCENT, a work block without drilling.
    RiseThenDescent,
}

impl ViolationType {
    /// Severity (0-100, higher = worse).
    pub fn severity(self) -> i32 {
        match self {
            ViolationType::ThreeDrilling => 100,
            ViolationType::ZeroDrilling => 80,
            ViolationType::OneDrilling => 60,
        }
    }

    fn for_count(count: usize) -> Option<Self> {
        match count {
            0 => Some(ViolationType::ZeroDrilling),
            1 => Some(ViolationType::OneDrilling),
            2 => None,
            _ => Some(ViolationType::ThreeDrilling),
        }
    }
}

impl ValidationResult {
    /// `s3_active_day` with `-1` standing in for "never".
    pub fn s3_active_day_or_minus_one(&self) -> i64 {
        self.s3_active_day.map_or(-1, |day| day as i64)
    }

    /// Whether no day has three drillers.
    pub fn meets_contract_clause(&self) -> bool {
        self.distribution.three == 0
    }

    /// Number of violations of the given type.
    pub fn count_of(&self, violation_type: ViolationType) -> usize {
        self.errors
            .iter()
            .filter(|v| v.violation_type == violation_type)
            .count()
    }

    /// Highest severity among the recorded violations, 0 if none.
    pub fn max_severity(&self) -> i32 {
        self.errors
            .iter()
            .map(|v| v.violation_type.severity())
            .max()
            .unwrap_or(0)
    }

    /// One-line compliance statement for the contractual clause.
    pub fn compliance_message(&self) -> String {
        match self.distribution.three {
            0 => "Meets clause: never 3 supervisors drilling simultaneously".to_string(),
            days => format!("Breaks clause: {days} day(s) with 3 supervisors drilling"),
        }
    }
}

/// Validates a schedule against the rule-set of `policy`.
///
/// Single pass, O(days × 3). Calling it twice on the same schedule yields
/// identical results.
pub fn validate_schedule(schedule: &Schedule, policy: OffsetPolicy) -> ValidationResult {
    let rule = policy.concurrency_rule();
    let s3_active_day = schedule.timeline(SupervisorId::S3).first_drilling_day();
    let exact_two = match rule {
        ConcurrencyRule::NeverThree => None,
        ConcurrencyRule::ExactlyTwoAfterS3Active => exactly_two_window(schedule),
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut distribution = ConcurrencyDistribution::default();

    for day in 0..schedule.len() {
        let drillers = schedule.drillers_on(day);
        let count = drillers.len();
        distribution.record(count);

        let in_window = exact_two.as_ref().is_some_and(|w| w.contains(&day));
        let violation_type = match ViolationType::for_count(count) {
            Some(ViolationType::ThreeDrilling) => Some(ViolationType::ThreeDrilling),
            Some(other) if in_window => Some(other),
            _ => None,
        };
        if let Some(violation_type) = violation_type {
            errors.push(Violation {
                day,
                violation_type,
                message: violation_message(day, violation_type, &drillers),
                supervisors: drillers,
            });
        }

        collect_pattern_warnings(schedule, day, &mut warnings);
    }

    if errors.is_empty() {
        debug!(policy = %policy, days = schedule.len(), "schedule passes concurrency rule");
    } else {
        warn!(
            policy = %policy,
            violations = errors.len(),
            three_drilling_days = distribution.three,
            "schedule breaks concurrency rule"
        );
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        s3_active_day,
        distribution,
        policy,
    }
}

/// Days on which exactly two drillers are required.
fn exactly_two_window(schedule: &Schedule) -> Option<RangeFrom<usize>> {
    schedule
        .timeline(SupervisorId::S3)
        .first_drilling_day()
        .map(|start| start..)
}

fn collect_pattern_warnings(schedule: &Schedule, day: usize, warnings: &mut Vec<Warning>) {
    for (id, timeline) in schedule.iter() {
        if timeline.get(day) != Some(DayStatus::Rise) {
            continue;
        }
        let (warning_type, message) = match timeline.get(day + 1) {
            Some(DayStatus::Rise) => (
                WarningType::ConsecutiveRise,
                format!("{id} day {day}: consecutive rise (S-S)"),
            ),
            Some(DayStatus::Descent) => (
                WarningType::RiseThenDescent,
                format!("{id} day {day}: rise followed by descent without drilling (S-B)"),
            ),
            _ => continue,
        };
        warnings.push(Warning {
            day,
            warning_type,
            supervisor: id,
            message,
        });
    }
}

fn violation_message(
    day: usize,
    violation_type: ViolationType,
    drillers: &[SupervisorId],
) -> String {
    let names = drillers
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    match violation_type {
        ViolationType::ThreeDrilling => {
            format!("Day {day}: 3 supervisors drilling ({names}), breaks contractual clause")
        }
        ViolationType::OneDrilling => {
            format!("Day {day}: only {names} drilling, 2 required once S3 is active")
        }
        ViolationType::ZeroDrilling => {
            format!("Day {day}: no supervisor drilling, 2 required once S3 is active")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(s1: &str, s2: &str, s3: &str) -> Schedule {
        Schedule::from_codes(s1, s2, s3).unwrap()
    }

    fn kinds(result: &ValidationResult) -> Vec<(usize, ViolationType)> {
        result
            .errors
            .iter()
            .map(|v| (v.day, v.violation_type))
            .collect()
    }

    #[test]
    fn test_three_drilling_flagged() {
        let s = schedule("PPP-", "PP--", "P---");
        let result = validate_schedule(&s, OffsetPolicy::StaggeredThirds);
        assert!(!result.is_valid);
        assert_eq!(kinds(&result), vec![(0, ViolationType::ThreeDrilling)]);
        assert_eq!(
            result.errors[0].supervisors,
            vec![SupervisorId::S1, SupervisorId::S2, SupervisorId::S3]
        );
        assert!(result.errors[0].message.contains("breaks contractual clause"));
        assert_eq!(result.s3_active_day, Some(0));
        assert!(!result.meets_contract_clause());
        assert_eq!(result.max_severity(), 100);
    }

    #[test]
    fn test_never_three_accepts_zero_and_one() {
        let s = schedule("PP--", "-P--", "----");
        let result = validate_schedule(&s, OffsetPolicy::StaggeredThirds);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.distribution.zero, 2);
        assert_eq!(result.distribution.one, 1);
        assert_eq!(result.distribution.two, 1);
        assert_eq!(result.s3_active_day, None);
        assert_eq!(result.s3_active_day_or_minus_one(), -1);
    }

    #[test]
    fn test_exactly_two_after_s3() {
        let s = schedule("PPPP-PP", "P----PP", "--PPP-P");
        let result = validate_schedule(&s, OffsetPolicy::SynchronizedPair);
        assert_eq!(result.s3_active_day, Some(2));
        // day 1 has a single driller but precedes S3's activation
        assert_eq!(
            kinds(&result),
            vec![
                (4, ViolationType::OneDrilling),
                (6, ViolationType::ThreeDrilling)
            ]
        );
        assert_eq!(result.errors[0].supervisors, vec![SupervisorId::S3]);
        assert_eq!(result.count_of(ViolationType::OneDrilling), 1);

        let relaxed = validate_schedule(&s, OffsetPolicy::StaggeredThirds);
        assert_eq!(kinds(&relaxed), vec![(6, ViolationType::ThreeDrilling)]);
    }

    #[test]
    fn test_zero_drilling_after_s3() {
        let s = schedule("PP-P", "-P-P", "P--P");
        let result = validate_schedule(&s, OffsetPolicy::SynchronizedPair);
        assert_eq!(
            kinds(&result),
            vec![
                (2, ViolationType::ZeroDrilling),
                (3, ViolationType::ThreeDrilling)
            ]
        );
        assert!(result.errors[0].supervisors.is_empty());
    }

    #[test]
    fn test_exactly_two_runs_to_end_of_schedule() {
        let s = schedule("P-----", "PPPPPP", "-P----");
        let result = validate_schedule(&s, OffsetPolicy::SynchronizedPair);
        assert_eq!(result.s3_active_day, Some(1));
        assert!(!result.is_valid);
        assert_eq!(
            kinds(&result),
            vec![
                (2, ViolationType::OneDrilling),
                (3, ViolationType::OneDrilling),
                (4, ViolationType::OneDrilling),
                (5, ViolationType::OneDrilling)
            ]
        );
        assert!(result
            .errors
            .iter()
            .all(|v| v.supervisors == vec![SupervisorId::S2]));
    }

    #[test]
    fn test_exactly_two_covers_idle_tail() {
        // S1 and S3 are done by day 3; the empty tail still counts
        let s = schedule("PPPP--", "PP---P", "--PP--");
        let result = validate_schedule(&s, OffsetPolicy::SynchronizedPair);
        assert_eq!(
            kinds(&result),
            vec![
                (4, ViolationType::ZeroDrilling),
                (5, ViolationType::OneDrilling)
            ]
        );
    }

    #[test]
    fn test_s3_never_drills() {
        let s = schedule("PP", "P-", "--");
        let result = validate_schedule(&s, OffsetPolicy::SynchronizedPair);
        assert!(result.is_valid);
        assert_eq!(result.s3_active_day, None);
    }

    #[test]
    fn test_pattern_warnings() {
        let s = schedule("SSPB", "SBDD", "---S");
        let result = validate_schedule(&s, OffsetPolicy::StaggeredThirds);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);

        assert_eq!(result.warnings[0].day, 0);
        assert_eq!(result.warnings[0].supervisor, SupervisorId::S1);
        assert_eq!(result.warnings[0].warning_type, WarningType::ConsecutiveRise);

        assert_eq!(result.warnings[1].supervisor, SupervisorId::S2);
        assert_eq!(result.warnings[1].warning_type, WarningType::RiseThenDescent);
        assert_eq!(
            result.warnings[1].message,
            "S2 day 0: rise followed by descent without drilling (S-B)"
        );
    }

    #[test]
    fn test_idempotent() {
        let s = schedule("PPPP-PP", "P----PP", "--PPP-P");
        let first = validate_schedule(&s, OffsetPolicy::SynchronizedPair);
        let second = validate_schedule(&s, OffsetPolicy::SynchronizedPair);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compliance_message() {
        let ok = validate_schedule(&schedule("P", "P", "-"), OffsetPolicy::StaggeredThirds);
        assert!(ok.compliance_message().starts_with("Meets clause"));

        let bad = validate_schedule(&schedule("PP", "PP", "PP"), OffsetPolicy::StaggeredThirds);
        assert_eq!(
            bad.compliance_message(),
            "Breaks clause: 2 day(s) with 3 supervisors drilling"
        );
    }

    #[test]
    fn test_empty_schedule() {
        let result = validate_schedule(&schedule("", "", ""), OffsetPolicy::SynchronizedPair);
        assert!(result.is_valid);
        assert_eq!(result.distribution.total(), 0);
        assert_eq!(result.max_severity(), 0);
    }

    #[test]
    fn test_serde_tags() {
        let result = validate_schedule(&schedule("P", "P", "P"), OffsetPolicy::StaggeredThirds);
        let json = serde_json::to_string(&result.errors[0]).unwrap();
        assert!(json.contains("\"violation_type\":\"THREE_DRILLING\""));
        assert!(json.contains("\"supervisors\":[\"S1\",\"S2\",\"S3\"]"));
    }
}
