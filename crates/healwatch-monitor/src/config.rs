//! Source and polling configuration

use crate::error::{MonitorError, MonitorResult};
use crate::source::{FetchMode, HttpSource, MockSource, OutcomeSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Where outcomes come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The healing daemon over HTTP
    #[default]
    Live,
    /// Built-in suite healed in-process
    Mock,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Live => f.write_str("live"),
            SourceKind::Mock => f.write_str("mock"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(SourceKind::Live),
            "mock" => Ok(SourceKind::Mock),
            other => Err(format!("unknown source '{}' (expected live or mock)", other)),
        }
    }
}

/// Outcome source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,

    /// Healing daemon base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub mode: FetchMode,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            endpoint: default_endpoint(),
            mode: FetchMode::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the configured source
    pub fn build(&self) -> MonitorResult<Arc<dyn OutcomeSource>> {
        match self.kind {
            SourceKind::Live => {
                if self.endpoint.trim().is_empty() {
                    return Err(MonitorError::Config("endpoint must not be empty".into()));
                }
                if self.timeout_secs == 0 {
                    return Err(MonitorError::Config("timeout must be positive".into()));
                }
                Ok(Arc::new(HttpSource::new(
                    &self.endpoint,
                    self.mode,
                    self.timeout(),
                )?))
            }
            SourceKind::Mock => Ok(Arc::new(MockSource::builtin())),
        }
    }
}

/// Polling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Seconds between cycles
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    30
}

impl PollConfig {
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval_secs: interval.as_secs(),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn validate(&self) -> MonitorResult<()> {
        if self.interval_secs == 0 {
            return Err(MonitorError::Config(
                "poll interval must be at least one second".into(),
            ));
        }
        Ok(())
    }
}
