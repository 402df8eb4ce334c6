//! Dashboard state
//!
//! The state keeps the last successful snapshot separately from the last
//! failure, so a failed cycle never erases results that were already shown.

use crate::aggregate::{normalize, summarize};
use crate::error::{FetchError, InvalidStatusError};
use chrono::{DateTime, Utc};
use healwatch_types::{DisplayOutcome, Summary, TestOutcome};
use serde::Serialize;

/// Results of one successful cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Cycle that produced the snapshot
    pub cycle: u64,
    pub fetched_at: DateTime<Utc>,
    pub outcomes: Vec<DisplayOutcome>,
    pub summary: Summary,
    /// Records dropped because of an unknown status
    pub rejected: Vec<InvalidStatusError>,
}

impl Snapshot {
    /// Normalize and summarize a raw outcome list
    pub fn build(raw: &[TestOutcome], cycle: u64, fetched_at: DateTime<Utc>) -> Self {
        let normalized = normalize(raw);
        let summary = summarize(&normalized.outcomes);

        Self {
            cycle,
            fetched_at,
            outcomes: normalized.outcomes,
            summary,
            rejected: normalized.rejected,
        }
    }
}

/// A failed cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleFailure {
    pub cycle: u64,
    pub at: DateTime<Utc>,
    pub error: FetchError,
}

/// Cycle counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CycleStats {
    /// Cycles started
    pub attempted: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Triggers dropped because a fetch was already in flight
    pub skipped: u64,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    /// Last known good results
    pub snapshot: Option<Snapshot>,
    /// Set by a failed cycle, cleared by the next successful one
    pub last_error: Option<CycleFailure>,
    pub stats: CycleStats,
}

/// What the dashboard should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardView<'a> {
    /// No cycle has completed yet
    Loading,
    /// Every cycle so far has failed
    Unavailable(&'a CycleFailure),
    /// Results are available; `stale` is set when the latest cycle failed
    Ready {
        snapshot: &'a Snapshot,
        stale: Option<&'a CycleFailure>,
    },
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle and return its number
    pub fn begin_cycle(&mut self) -> u64 {
        self.stats.attempted += 1;
        self.stats.attempted
    }

    /// Replace the snapshot with the results of the current cycle
    pub fn apply_success(&mut self, raw: &[TestOutcome], now: DateTime<Utc>) -> &Snapshot {
        self.stats.succeeded += 1;
        self.last_error = None;
        self.snapshot
            .insert(Snapshot::build(raw, self.stats.attempted, now))
    }

    /// Record a failed cycle, keeping the last known good snapshot
    pub fn apply_failure(&mut self, error: FetchError, now: DateTime<Utc>) -> &CycleFailure {
        self.stats.failed += 1;
        self.last_error.insert(CycleFailure {
            cycle: self.stats.attempted,
            at: now,
            error,
        })
    }

    pub fn record_skip(&mut self) {
        self.stats.skipped += 1;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view(), DashboardView::Loading)
    }

    pub fn view(&self) -> DashboardView<'_> {
        match (&self.snapshot, &self.last_error) {
            (Some(snapshot), stale) => DashboardView::Ready {
                snapshot,
                stale: stale.as_ref(),
            },
            (None, Some(failure)) => DashboardView::Unavailable(failure),
            (None, None) => DashboardView::Loading,
        }
    }
}
