//! Status taxonomies
//!
//! The healing backend speaks a four-valued vocabulary; the dashboard only
//! ever shows three. `NO_CHANGE` collapses into `PASSED`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raw status as reported by the healing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RawStatus {
    /// Original selector still matched
    Passed,
    /// A replacement selector was found
    Healed,
    /// No working selector could be found
    Failed,
    /// Nothing needed to change
    NoChange,
}

impl RawStatus {
    /// All raw statuses, in wire order
    pub const ALL: [RawStatus; 4] = [
        RawStatus::Passed,
        RawStatus::Healed,
        RawStatus::Failed,
        RawStatus::NoChange,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RawStatus::Passed => "PASSED",
            RawStatus::Healed => "HEALED",
            RawStatus::Failed => "FAILED",
            RawStatus::NoChange => "NO_CHANGE",
        }
    }

    /// Map onto the display taxonomy
    pub fn to_display(self) -> OutcomeStatus {
        match self {
            RawStatus::Passed | RawStatus::NoChange => OutcomeStatus::Passed,
            RawStatus::Healed => OutcomeStatus::Healed,
            RawStatus::Failed => OutcomeStatus::Failed,
        }
    }
}

impl fmt::Display for RawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the raw taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for RawStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASSED" => Ok(RawStatus::Passed),
            "HEALED" => Ok(RawStatus::Healed),
            "FAILED" => Ok(RawStatus::Failed),
            "NO_CHANGE" => Ok(RawStatus::NoChange),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Display status (also the verdict vocabulary of a single healing attempt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeStatus {
    Passed,
    Healed,
    Failed,
}

impl OutcomeStatus {
    /// All display statuses, in chart order
    pub const ALL: [OutcomeStatus; 3] = [
        OutcomeStatus::Passed,
        OutcomeStatus::Healed,
        OutcomeStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Passed => "PASSED",
            OutcomeStatus::Healed => "HEALED",
            OutcomeStatus::Failed => "FAILED",
        }
    }

    /// Human label used for chart axes and cards
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeStatus::Passed => "Passed",
            OutcomeStatus::Healed => "Healed",
            OutcomeStatus::Failed => "Failed",
        }
    }

    /// Whether this status counts towards the success rate
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeStatus::Passed | OutcomeStatus::Healed)
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
