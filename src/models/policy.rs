//! Offset policies and their concurrency rule-sets.
//!
//! A policy decides when each supervisor starts its first cycle and which
//! concurrency rule the validator enforces. The two are bound together:
//! a schedule planned with one policy is always judged by that policy's rule.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SupervisorId;

/// Strategy for staggering the three supervisors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetPolicy {
    /// S1 at 0, S2 at a third of the cycle, S3 at two thirds.
    ///
    /// Concurrency may vary across 0, 1 and 2; only 3 is forbidden.
    #[default]
    StaggeredThirds,
    /// S1 and S2 start together, S3 joins mid work block.
    ///
    /// Once S3 drills, exactly two drillers are required every day.
    SynchronizedPair,
}

/// Concurrency rule enforced by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyRule {
    /// Three simultaneous drillers is the only violation.
    NeverThree,
    /// From S3's first drilling day, anything other than two is a violation.
    ExactlyTwoAfterS3Active,
}

impl OffsetPolicy {
    /// Rule-set paired with this policy.
    pub fn concurrency_rule(self) -> ConcurrencyRule {
        match self {
            OffsetPolicy::StaggeredThirds => ConcurrencyRule::NeverThree,
            OffsetPolicy::SynchronizedPair => ConcurrencyRule::ExactlyTwoAfterS3Active,
        }
    }

    /// Short machine name.
    pub fn name(self) -> &'static str {
        match self {
            OffsetPolicy::StaggeredThirds => "staggered_thirds",
            OffsetPolicy::SynchronizedPair => "synchronized_pair",
        }
    }
}

impl fmt::Display for OffsetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First-cycle start day of each supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offsets {
    #[serde(rename = "S1")]
    pub s1: usize,
    #[serde(rename = "S2")]
    pub s2: usize,
    #[serde(rename = "S3")]
    pub s3: usize,
}

impl Offsets {
    /// Creates an offset triple.
    pub fn new(s1: usize, s2: usize, s3: usize) -> Self {
        Self { s1, s2, s3 }
    }

    /// Start day of the given supervisor.
    pub fn get(&self, id: SupervisorId) -> usize {
        match id {
            SupervisorId::S1 => self.s1,
            SupervisorId::S2 => self.s2,
            SupervisorId::S3 => self.s3,
        }
    }
}
