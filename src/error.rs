//! Error types.
//!
//! Only precondition failures are errors. Contractual rule violations found
//! in a generated schedule are reported as data through
//! [`ValidationResult`](crate::validation::ValidationResult).

use thiserror::Error;

/// A regime configuration that the engine refuses to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A duration that must be positive is zero.
    #[error("{field} must be greater than zero")]
    NotPositive {
        /// Offending field name.
        field: &'static str,
    },
    /// Induction would consume the whole first work block.
    #[error("work_days ({work_days}) must exceed induction_days ({induction_days})")]
    InductionExceedsWork {
        /// Configured work days.
        work_days: usize,
        /// Configured induction days.
        induction_days: usize,
    },
    /// A field lies outside the accepted input bounds.
    #[error("{field} = {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        /// Offending field name.
        field: &'static str,
        /// Supplied value.
        value: usize,
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
}

/// Errors returned by the rotation engine.
#[derive(Debug, Error)]
pub enum RotationError {
    /// The regime breaks an engine precondition.
    #[error("invalid regime configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// TOML config text could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Supervisor timelines of a schedule differ in length.
    #[error("timeline length mismatch: S1={s1}, S2={s2}, S3={s3}")]
    TimelineLengthMismatch {
        /// Length of S1's timeline.
        s1: usize,
        /// Length of S2's timeline.
        s2: usize,
        /// Length of S3's timeline.
        s3: usize,
    },

    /// A character is not a day status code.
    #[error("unknown day status code '{0}'")]
    UnknownStatusCode(char),
}

/// Result alias for rotation engine operations.
pub type RotationResult<T> = Result<T, RotationError>;
