//! Service status types

use serde::{Deserialize, Serialize};

/// Health check response of the healing backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    /// Number of test cases in the configured suite
    pub suite_size: usize,
    /// Whether a suite run is available from `GET /api/test-results`
    #[serde(default)]
    pub has_results: bool,
}
