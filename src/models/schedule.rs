//! Rotation schedule model.
//!
//! A schedule holds one day-by-day timeline per supervisor. All three
//! timelines share the same length; day `d` of every timeline refers to the
//! same calendar day.
//!
//! Timelines serialize as strings of single-letter status codes, e.g.
//! `"SIIIIIPPPPPPPPPBDDDDD"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use super::DayStatus;
use crate::error::{RotationError, RotationResult};

/// Supervisor identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SupervisorId {
    S1,
    S2,
    S3,
}

impl SupervisorId {
    /// All supervisors in order.
    pub const ALL: [SupervisorId; 3] = [SupervisorId::S1, SupervisorId::S2, SupervisorId::S3];

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            SupervisorId::S1 => "S1",
            SupervisorId::S2 => "S2",
            SupervisorId::S3 => "S3",
        }
    }
}

impl fmt::Display for SupervisorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One supervisor's status for each day of the horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupervisorTimeline {
    days: Vec<DayStatus>,
}

impl SupervisorTimeline {
    /// Creates a timeline of `len` empty days.
    pub fn new(len: usize) -> Self {
        Self {
            days: vec![DayStatus::Empty; len],
        }
    }

    /// Parses a timeline from status codes.
    pub fn from_codes(codes: &str) -> RotationResult<Self> {
        let days = codes
            .chars()
            .map(DayStatus::from_code)
            .collect::<RotationResult<Vec<_>>>()?;
        Ok(Self { days })
    }

    /// Status codes, one character per day.
    pub fn codes(&self) -> String {
        self.days.iter().map(|s| s.code()).collect()
    }

    /// Number of days.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the timeline has no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Status on a day, `None` past the end.
    #[inline]
    pub fn get(&self, day: usize) -> Option<DayStatus> {
        self.days.get(day).copied()
    }

    /// All days as a slice.
    pub fn as_slice(&self) -> &[DayStatus] {
        &self.days
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [DayStatus] {
        &mut self.days
    }

    /// Number of drilling days.
    pub fn drilling_days(&self) -> usize {
        self.days.iter().filter(|s| s.is_drilling()).count()
    }

    /// First drilling day.
    pub fn first_drilling_day(&self) -> Option<usize> {
        self.days.iter().position(|s| s.is_drilling())
    }

    /// Last drilling day.
    pub fn last_drilling_day(&self) -> Option<usize> {
        self.days.iter().rposition(|s| s.is_drilling())
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.days.truncate(len);
    }
}

impl Index<usize> for SupervisorTimeline {
    type Output = DayStatus;

    fn index(&self, day: usize) -> &DayStatus {
        &self.days[day]
    }
}

impl From<Vec<DayStatus>> for SupervisorTimeline {
    fn from(days: Vec<DayStatus>) -> Self {
        Self { days }
    }
}

impl TryFrom<String> for SupervisorTimeline {
    type Error = RotationError;

    fn try_from(codes: String) -> Result<Self, Self::Error> {
        Self::from_codes(&codes)
    }
}

impl From<SupervisorTimeline> for String {
    fn from(timeline: SupervisorTimeline) -> Self {
        timeline.codes()
    }
}

/// Merged three-supervisor schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSchedule")]
pub struct Schedule {
    #[serde(rename = "S1")]
    s1: SupervisorTimeline,
    #[serde(rename = "S2")]
    s2: SupervisorTimeline,
    #[serde(rename = "S3")]
    s3: SupervisorTimeline,
}

#[derive(Deserialize)]
struct RawSchedule {
    #[serde(rename = "S1")]
    s1: SupervisorTimeline,
    #[serde(rename = "S2")]
    s2: SupervisorTimeline,
    #[serde(rename = "S3")]
    s3: SupervisorTimeline,
}

impl TryFrom<RawSchedule> for Schedule {
    type Error = RotationError;

    fn try_from(raw: RawSchedule) -> Result<Self, Self::Error> {
        Schedule::new(raw.s1, raw.s2, raw.s3)
    }
}

impl Schedule {
    /// Creates a schedule, checking that all timelines have equal length.
    pub fn new(
        s1: SupervisorTimeline,
        s2: SupervisorTimeline,
        s3: SupervisorTimeline,
    ) -> RotationResult<Self> {
        if s1.len() != s2.len() || s1.len() != s3.len() {
            return Err(RotationError::TimelineLengthMismatch {
                s1: s1.len(),
                s2: s2.len(),
                s3: s3.len(),
            });
        }
        Ok(Self { s1, s2, s3 })
    }

    /// Parses a schedule from three code strings.
    pub fn from_codes(s1: &str, s2: &str, s3: &str) -> RotationResult<Self> {
        Self::new(
            SupervisorTimeline::from_codes(s1)?,
            SupervisorTimeline::from_codes(s2)?,
            SupervisorTimeline::from_codes(s3)?,
        )
    }

    /// Timeline of one supervisor.
    pub fn timeline(&self, id: SupervisorId) -> &SupervisorTimeline {
        match id {
            SupervisorId::S1 => &self.s1,
            SupervisorId::S2 => &self.s2,
            SupervisorId::S3 => &self.s3,
        }
    }

    /// Iterates `(id, timeline)` pairs in supervisor order.
    pub fn iter(&self) -> impl Iterator<Item = (SupervisorId, &SupervisorTimeline)> {
        SupervisorId::ALL
            .into_iter()
            .map(move |id| (id, self.timeline(id)))
    }

    /// Number of days in the schedule.
    #[inline]
    pub fn len(&self) -> usize {
        self.s1.len()
    }

    /// Whether the schedule has no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.s1.is_empty()
    }

    /// Status of a supervisor on a day (`Empty` past the end).
    pub fn status(&self, id: SupervisorId, day: usize) -> DayStatus {
        self.timeline(id).get(day).unwrap_or_default()
    }

    /// Supervisors drilling on a day.
    pub fn drillers_on(&self, day: usize) -> Vec<SupervisorId> {
        SupervisorId::ALL
            .into_iter()
            .filter(|&id| self.status(id, day).is_drilling())
            .collect()
    }

    /// Number of supervisors drilling on a day.
    pub fn drilling_count(&self, day: usize) -> usize {
        SupervisorId::ALL
            .into_iter()
            .filter(|&id| self.status(id, day).is_drilling())
            .count()
    }

    /// Drilling count for every day.
    pub fn concurrency_row(&self) -> Vec<usize> {
        (0..self.len()).map(|day| self.drilling_count(day)).collect()
    }

    /// Day counts by concurrency level.
    pub fn concurrency_distribution(&self) -> ConcurrencyDistribution {
        let mut distribution = ConcurrencyDistribution::default();
        for day in 0..self.len() {
            distribution.record(self.drilling_count(day));
        }
        distribution
    }

    /// Last day any supervisor drills.
    pub fn last_drilling_day(&self) -> Option<usize> {
        self.iter().filter_map(|(_, t)| t.last_drilling_day()).max()
    }

    /// Text grid: one row per supervisor and a final concurrency row.
    pub fn render_grid(&self) -> String {
        let mut out = String::new();
        for (id, timeline) in self.iter() {
            out.push_str(id.as_str());
            out.push(' ');
            out.push_str(&timeline.codes());
            out.push('\n');
        }
        out.push_str("#  ");
        for count in self.concurrency_row() {
            out.push(char::from_digit(count as u32, 10).unwrap_or('?'));
        }
        out.push('\n');
        out
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.s1.truncate(len);
        self.s2.truncate(len);
        self.s3.truncate(len);
    }
}

/// Number of days at each concurrency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcurrencyDistribution {
    pub zero: usize,
    pub one: usize,
    pub two: usize,
    pub three: usize,
}

impl ConcurrencyDistribution {
    /// Records one day with `count` drillers.
    pub fn record(&mut self, count: usize) {
        match count {
            0 => self.zero += 1,
            1 => self.one += 1,
            2 => self.two += 1,
            _ => self.three += 1,
        }
    }

    /// Days with exactly `count` drillers.
    pub fn days_with(&self, count: usize) -> usize {
        match count {
            0 => self.zero,
            1 => self.one,
            2 => self.two,
            3 => self.three,
            _ => 0,
        }
    }

    /// Total days recorded.
    pub fn total(&self) -> usize {
        self.zero + self.one + self.two + self.three
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        Schedule::from_codes("SPPB", "-SPP", "SPPP").unwrap()
    }

    #[test]
    fn test_length_mismatch() {
        let err = Schedule::from_codes("SPP", "SP", "SPP").unwrap_err();
        assert!(matches!(
            err,
            RotationError::TimelineLengthMismatch { s1: 3, s2: 2, s3: 3 }
        ));
    }

    #[test]
    fn test_concurrency() {
        let schedule = sample();
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule.concurrency_row(), vec![0, 2, 3, 2]);
        assert_eq!(
            schedule.drillers_on(3),
            vec![SupervisorId::S2, SupervisorId::S3]
        );
        assert_eq!(schedule.status(SupervisorId::S1, 99), DayStatus::Empty);

        let dist = schedule.concurrency_distribution();
        assert_eq!(dist.zero, 1);
        assert_eq!(dist.one, 0);
        assert_eq!(dist.two, 2);
        assert_eq!(dist.three, 1);
        assert_eq!(dist.total(), 4);
        assert_eq!(dist.days_with(2), 2);
    }

    #[test]
    fn test_drilling_bounds() {
        let schedule = sample();
        let s2 = schedule.timeline(SupervisorId::S2);
        assert_eq!(s2.first_drilling_day(), Some(2));
        assert_eq!(s2.last_drilling_day(), Some(3));
        assert_eq!(s2.drilling_days(), 2);
        assert_eq!(schedule.last_drilling_day(), Some(3));

        let idle = SupervisorTimeline::new(5);
        assert_eq!(idle.first_drilling_day(), None);
        assert_eq!(idle[4], DayStatus::Empty);
    }

    #[test]
    fn test_render_grid() {
        let grid = sample().render_grid();
        assert_eq!(grid, "S1 SPPB\nS2 -SPP\nS3 SPPP\n#  0232\n");
    }

    #[test]
    fn test_serde_codes() {
        let schedule = sample();
        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, r#"{"S1":"SPPB","S2":"-SPP","S3":"SPPP"}"#);

        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }

    #[test]
    fn test_serde_rejects_bad_input() {
        assert!(serde_json::from_str::<Schedule>(r#"{"S1":"SP","S2":"S","S3":"SP"}"#).is_err());
        assert!(serde_json::from_str::<Schedule>(r#"{"S1":"SX","S2":"SP","S3":"SP"}"#).is_err());
    }
}
