//! Result aggregation
//!
//! Turns the raw outcome list reported by a source into the normalized list
//! the dashboard renders, plus its summary. Both steps are pure.

use crate::error::InvalidStatusError;
use healwatch_types::{DisplayOutcome, OutcomeStatus, Summary, TestOutcome};
use serde::Serialize;

/// Output of [`normalize`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Normalized {
    /// Accepted records, in input order
    pub outcomes: Vec<DisplayOutcome>,
    /// Records excluded because of an unknown status
    pub rejected: Vec<InvalidStatusError>,
}

/// Normalize a single raw record.
///
/// `NO_CHANGE` is reported as PASSED. A healed selector only survives on
/// HEALED records.
pub fn normalize_outcome(raw: &TestOutcome) -> Result<DisplayOutcome, InvalidStatusError> {
    let status = raw
        .raw_status()
        .map_err(|unknown| InvalidStatusError {
            name: raw.name.clone(),
            status: unknown.0,
        })?
        .to_display();

    let healed_selector = match status {
        OutcomeStatus::Healed => raw.healed_selector.clone(),
        OutcomeStatus::Passed | OutcomeStatus::Failed => None,
    };

    Ok(DisplayOutcome {
        name: raw.name.clone(),
        status,
        original_selector: raw.original_selector.clone(),
        healed_selector,
        explanation: raw.explanation.clone(),
        error: raw.error.clone(),
        jira_url: raw.jira_url.clone(),
        info: raw.info.clone(),
    })
}

/// Normalize a raw outcome list, collecting rejected records
pub fn normalize(raw: &[TestOutcome]) -> Normalized {
    let mut normalized = Normalized {
        outcomes: Vec::with_capacity(raw.len()),
        rejected: Vec::new(),
    };

    for record in raw {
        match normalize_outcome(record) {
            Ok(outcome) => normalized.outcomes.push(outcome),
            Err(err) => normalized.rejected.push(err),
        }
    }

    normalized
}

/// Count outcomes by status
pub fn summarize(records: &[DisplayOutcome]) -> Summary {
    let (mut passed, mut healed, mut failed) = (0, 0, 0);
    for record in records {
        match record.status {
            OutcomeStatus::Passed => passed += 1,
            OutcomeStatus::Healed => healed += 1,
            OutcomeStatus::Failed => failed += 1,
        }
    }

    Summary::from_counts(passed, healed, failed)
}
