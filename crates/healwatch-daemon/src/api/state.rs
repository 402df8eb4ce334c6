//! Application state for API handlers

use healwatch_engine::IssueTracker;
use healwatch_types::{TestCase, TestOutcome};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Cases run by `POST /api/test-healing`
    pub suite: Arc<Vec<TestCase>>,

    /// Issue tracker used for failure links
    pub tracker: Arc<IssueTracker>,

    /// Outcomes of the most recent suite run
    pub latest: Arc<RwLock<Option<Vec<TestOutcome>>>>,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(suite: Vec<TestCase>, tracker: IssueTracker) -> Self {
        Self {
            suite: Arc::new(suite),
            tracker: Arc::new(tracker),
            latest: Arc::new(RwLock::new(None)),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let secs = (chrono::Utc::now() - self.started_at).num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}
