//! Supervisor rotation engine.
//!
//! Assigns three rotating supervisors to a recurring work/rest regime so
//! that drilling stays staffed while never exceeding two simultaneous
//! drillers. The engine is a pure transformation from a [`RegimeConfig`]
//! to a schedule, its validation, and summary statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `RegimeConfig`, `DayStatus`,
//!   `SupervisorTimeline`, `Schedule`, `OffsetPolicy`
//! - **`scheduler`**: Cycle generator, offset planner, engine entry point,
//!   statistics
//! - **`validation`**: Concurrency rules and pattern warnings
//! - **`error`**: Precondition errors
//!
//! # Example
//!
//! ```
//! use u_rotation::models::{OffsetPolicy, RegimeConfig};
//! use u_rotation::scheduler::generate_schedule;
//! use u_rotation::validation::validate_schedule;
//!
//! let config = RegimeConfig::new(10, 5, 2, 30);
//! let generated = generate_schedule(&config).unwrap();
//! assert!(generated.stats().meets_contract_clause);
//!
//! let again = validate_schedule(&generated.schedule, OffsetPolicy::StaggeredThirds);
//! assert_eq!(again, generated.validation);
//! ```
//!
//! [`RegimeConfig`]: models::RegimeConfig

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ConfigError, RotationError, RotationResult};
