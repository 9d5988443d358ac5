//! Day status model.
//!
//! Every calendar day of a supervisor's timeline carries exactly one
//! [`DayStatus`]. Single-letter codes exist only for display and text
//! interchange; the engine itself works on the enum.
//!
//! | Status | Code | Meaning |
//! |--------|------|---------|
//! | Rise | `S` | Travel to site, opens a work block |
//! | Induction | `I` | Training, first work block only |
//! | Drilling | `P` | Counts toward the drilling quota |
//! | Descent | `B` | Travel from site, closes a work block |
//! | Rest | `D` | Off site |
//! | Empty | `-` | Unallocated slot |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RotationError;

/// Status of one supervisor on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    /// Travel day into the site.
    Rise,
    /// First-cycle training day.
    Induction,
    /// Active drilling day.
    Drilling,
    /// Travel day out of the site.
    Descent,
    /// Rest day.
    Rest,
    /// No state assigned.
    #[default]
    Empty,
}

impl DayStatus {
    /// All statuses in display order.
    pub const ALL: [DayStatus; 6] = [
        DayStatus::Rise,
        DayStatus::Induction,
        DayStatus::Drilling,
        DayStatus::Descent,
        DayStatus::Rest,
        DayStatus::Empty,
    ];

    /// Single-letter display code.
    pub fn code(self) -> char {
        match self {
            DayStatus::Rise => 'S',
            DayStatus::Induction => 'I',
            DayStatus::Drilling => 'P',
            DayStatus::Descent => 'B',
            DayStatus::Rest => 'D',
            DayStatus::Empty => '-',
        }
    }

    /// Parses a single-letter display code.
    pub fn from_code(code: char) -> Result<Self, RotationError> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(RotationError::UnknownStatusCode(code))
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            DayStatus::Rise => "Rise",
            DayStatus::Induction => "Induction",
            DayStatus::Drilling => "Drilling",
            DayStatus::Descent => "Descent",
            DayStatus::Rest => "Rest",
            DayStatus::Empty => "Empty",
        }
    }

    /// Whether this day counts toward the drilling quota.
    #[inline]
    pub fn is_drilling(self) -> bool {
        self == DayStatus::Drilling
    }

    /// Whether the supervisor is on site (rise through descent).
    #[inline]
    pub fn is_on_site(self) -> bool {
        matches!(
            self,
            DayStatus::Rise | DayStatus::Induction | DayStatus::Drilling | DayStatus::Descent
        )
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        for a in DayStatus::ALL {
            for b in DayStatus::ALL {
                if a != b {
                    assert_ne!(a.code(), b.code());
                }
            }
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(DayStatus::from_code('P').unwrap(), DayStatus::Drilling);
        assert_eq!(DayStatus::from_code('-').unwrap(), DayStatus::Empty);
        assert!(matches!(
            DayStatus::from_code('X'),
            Err(RotationError::UnknownStatusCode('X'))
        ));
    }

    #[test]
    fn test_on_site() {
        assert!(DayStatus::Rise.is_on_site());
        assert!(DayStatus::Descent.is_on_site());
        assert!(!DayStatus::Rest.is_on_site());
        assert!(!DayStatus::Empty.is_on_site());
        assert!(DayStatus::Drilling.is_drilling());
        assert!(!DayStatus::Induction.is_drilling());
    }

    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&DayStatus::Drilling).unwrap();
        assert_eq!(json, "\"DRILLING\"");
        assert_eq!(DayStatus::default(), DayStatus::Empty);
    }
}
