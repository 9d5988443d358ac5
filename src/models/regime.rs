//! Regime configuration.
//!
//! A regime `NxM` is N work days followed by M rest days. The rest count
//! includes the rise and descent days that bracket each work block, so a
//! supervisor only spends `M - 2` days actually resting.
//!
//! # Loading
//!
//! ```
//! use u_rotation::models::{OffsetPolicy, RegimeConfig};
//!
//! let config = RegimeConfig::from_toml_str(
//!     r#"
//!     work_days = 14
//!     rest_days = 7
//!     induction_days = 5
//!     total_drilling_days = 30
//!     policy = "synchronized_pair"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.label(), "14x7");
//! assert_eq!(config.policy, OffsetPolicy::SynchronizedPair);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::OffsetPolicy;
use crate::error::{ConfigError, RotationError};

/// Rise and descent days absorbed by every rest period.
pub const TRANSITION_DAYS: usize = 2;

/// Parameters of one rotation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    /// Work days per cycle (N).
    pub work_days: usize,
    /// Rest days per cycle including rise and descent (M).
    pub rest_days: usize,
    /// Induction days carved out of the first work block.
    pub induction_days: usize,
    /// Drilling days each supervisor must accumulate.
    pub total_drilling_days: usize,
    /// Offset policy (and matching concurrency rule).
    #[serde(default)]
    pub policy: OffsetPolicy,
}

impl RegimeConfig {
    /// Creates a config with the default offset policy.
    pub fn new(
        work_days: usize,
        rest_days: usize,
        induction_days: usize,
        total_drilling_days: usize,
    ) -> Self {
        Self {
            work_days,
            rest_days,
            induction_days,
            total_drilling_days,
            policy: OffsetPolicy::default(),
        }
    }

    /// Sets the offset policy.
    pub fn with_policy(mut self, policy: OffsetPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, RotationError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RotationError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks the engine preconditions.
    ///
    /// All durations must be positive and the work block must outlast
    /// induction. Returns the first failure found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("work_days", self.work_days),
            ("rest_days", self.rest_days),
            ("induction_days", self.induction_days),
            ("total_drilling_days", self.total_drilling_days),
        ];
        if let Some((field, _)) = positive.into_iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::NotPositive { field });
        }
        if self.work_days <= self.induction_days {
            return Err(ConfigError::InductionExceedsWork {
                work_days: self.work_days,
                induction_days: self.induction_days,
            });
        }
        Ok(())
    }

    /// Regime label, e.g. `"14x7"`.
    pub fn label(&self) -> String {
        format!("{}x{}", self.work_days, self.rest_days)
    }

    /// Full cycle length (work + rest).
    #[inline]
    pub fn cycle_length(&self) -> usize {
        self.work_days + self.rest_days
    }

    /// Days actually spent resting per cycle.
    #[inline]
    pub fn effective_rest_days(&self) -> usize {
        self.rest_days.saturating_sub(TRANSITION_DAYS)
    }

    /// Drilling days in the first (induction) cycle.
    #[inline]
    pub fn first_cycle_drilling_days(&self) -> usize {
        self.work_days.saturating_sub(self.induction_days)
    }

    /// Rough cycle count needed to reach the quota, as shown to operators.
    ///
    /// Uses the first-cycle drilling length for every cycle, so it is an
    /// upper estimate. Zero when induction consumes the work block.
    pub fn estimated_cycles(&self) -> usize {
        match self.first_cycle_drilling_days() {
            0 => 0,
            per_cycle => self.total_drilling_days.div_ceil(per_cycle),
        }
    }
}

/// Accepted input ranges for interactive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBounds {
    pub work_days: (usize, usize),
    pub rest_days: (usize, usize),
    pub induction_days: (usize, usize),
    pub total_drilling_days: (usize, usize),
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            work_days: (1, 30),
            rest_days: (1, 30),
            induction_days: (1, 5),
            total_drilling_days: (1, 365),
        }
    }
}

impl InputBounds {
    /// Checks every field against its range and the engine preconditions.
    ///
    /// # Returns
    /// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
    pub fn check(&self, config: &RegimeConfig) -> Result<(), Vec<ConfigError>> {
        let fields = [
            ("work_days", config.work_days, self.work_days),
            ("rest_days", config.rest_days, self.rest_days),
            ("induction_days", config.induction_days, self.induction_days),
            (
                "total_drilling_days",
                config.total_drilling_days,
                self.total_drilling_days,
            ),
        ];

        let mut errors: Vec<ConfigError> = fields
            .into_iter()
            .filter(|(_, value, (min, max))| value < min || value > max)
            .map(|(field, value, (min, max))| ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            })
            .collect();

        if config.work_days <= config.induction_days {
            errors.push(ConfigError::InductionExceedsWork {
                work_days: config.work_days,
                induction_days: config.induction_days,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        assert!(RegimeConfig::new(14, 7, 5, 30).validate().is_ok());
        assert!(RegimeConfig::new(2, 1, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_field() {
        assert_eq!(
            RegimeConfig::new(14, 0, 5, 30).validate(),
            Err(ConfigError::NotPositive { field: "rest_days" })
        );
        assert_eq!(
            RegimeConfig::new(14, 7, 5, 0).validate(),
            Err(ConfigError::NotPositive {
                field: "total_drilling_days"
            })
        );
    }

    #[test]
    fn test_validate_induction_consumes_work() {
        assert_eq!(
            RegimeConfig::new(5, 7, 5, 30).validate(),
            Err(ConfigError::InductionExceedsWork {
                work_days: 5,
                induction_days: 5
            })
        );
    }

    #[test]
    fn test_derived_figures() {
        let config = RegimeConfig::new(14, 7, 5, 30);
        assert_eq!(config.label(), "14x7");
        assert_eq!(config.cycle_length(), 21);
        assert_eq!(config.effective_rest_days(), 5);
        assert_eq!(config.first_cycle_drilling_days(), 9);
        assert_eq!(config.estimated_cycles(), 4); // ceil(30 / 9)

        let short_rest = RegimeConfig::new(4, 1, 1, 10);
        assert_eq!(short_rest.effective_rest_days(), 0);

        let degenerate = RegimeConfig::new(3, 7, 3, 10);
        assert_eq!(degenerate.first_cycle_drilling_days(), 0);
        assert_eq!(degenerate.estimated_cycles(), 0);
    }

    #[test]
    fn test_bounds_ok() {
        let bounds = InputBounds::default();
        assert!(bounds.check(&RegimeConfig::new(30, 30, 5, 365)).is_ok());
    }

    #[test]
    fn test_bounds_collects_all() {
        let bounds = InputBounds::default();
        let errors = bounds.check(&RegimeConfig::new(31, 0, 6, 400)).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ConfigError::OutOfRange {
            field: "induction_days",
            value: 6,
            min: 1,
            max: 5
        }));
    }

    #[test]
    fn test_bounds_induction_gap() {
        let bounds = InputBounds::default();
        let errors = bounds.check(&RegimeConfig::new(3, 7, 3, 30)).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigError::InductionExceedsWork {
                work_days: 3,
                induction_days: 3
            }]
        );
    }

    #[test]
    fn test_from_toml_default_policy() {
        let config = RegimeConfig::from_toml_str(
            "work_days = 10\nrest_days = 5\ninduction_days = 2\ntotal_drilling_days = 30\n",
        )
        .unwrap();
        assert_eq!(config, RegimeConfig::new(10, 5, 2, 30));
        assert_eq!(config.policy, OffsetPolicy::StaggeredThirds);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = RegimeConfig::from_toml_str("work_days = \"many\"").unwrap_err();
        assert!(matches!(err, RotationError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RegimeConfig::load("/nonexistent/regime.toml").unwrap_err();
        assert!(matches!(err, RotationError::Io(_)));
    }
}
