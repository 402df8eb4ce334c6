//! Outcome sources
//!
//! A source produces the raw outcome list for one poll cycle. The live
//! source talks to the healing backend over HTTP; the mock source serves a
//! fixed list, by default the built-in suite healed in-process.

use crate::error::{FetchError, FetchResult, MonitorResult};
use async_trait::async_trait;
use healwatch_engine::{builtin_cases, run_suite, IssueTracker};
use healwatch_types::TestOutcome;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Anything that can report the current test outcomes
#[async_trait]
pub trait OutcomeSource: Send + Sync {
    /// Fetch the current raw outcome list
    async fn fetch(&self) -> FetchResult<Vec<TestOutcome>>;

    /// Human-readable description, used in logs and the dashboard header
    fn describe(&self) -> String;
}

/// Which backend endpoint the live source polls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Run the suite on every fetch (`POST /api/test-healing`)
    #[default]
    Run,
    /// Read the most recent run (`GET /api/test-results`)
    Latest,
}

impl FetchMode {
    pub fn path(&self) -> &'static str {
        match self {
            FetchMode::Run => "/api/test-healing",
            FetchMode::Latest => "/api/test-results",
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Run => f.write_str("run"),
            FetchMode::Latest => f.write_str("latest"),
        }
    }
}

impl FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "run" => Ok(FetchMode::Run),
            "latest" => Ok(FetchMode::Latest),
            other => Err(format!("unknown fetch mode '{}' (expected run or latest)", other)),
        }
    }
}

/// Live source backed by the healing daemon
pub struct HttpSource {
    client: Client,
    base_url: String,
    mode: FetchMode,
}

impl HttpSource {
    /// Create a source for `endpoint` with a per-request timeout
    pub fn new(endpoint: &str, mode: FetchMode, timeout: Duration) -> MonitorResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
            mode,
        })
    }

    /// Full URL polled by this source
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.mode.path())
    }

    async fn handle_response(response: Response) -> FetchResult<Vec<TestOutcome>> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl OutcomeSource for HttpSource {
    async fn fetch(&self) -> FetchResult<Vec<TestOutcome>> {
        let url = self.url();
        debug!(url = %url, mode = %self.mode, "Fetching test outcomes");

        let request = match self.mode {
            FetchMode::Run => self.client.post(&url),
            FetchMode::Latest => self.client.get(&url),
        };

        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        Self::handle_response(response).await
    }

    fn describe(&self) -> String {
        let method = match self.mode {
            FetchMode::Run => "POST",
            FetchMode::Latest => "GET",
        };
        format!("{} {}", method, self.url())
    }
}

/// Source serving a fixed outcome list
#[derive(Debug, Clone)]
pub struct MockSource {
    outcomes: Vec<TestOutcome>,
}

impl MockSource {
    pub fn new(outcomes: Vec<TestOutcome>) -> Self {
        Self { outcomes }
    }

    /// Outcomes of the built-in suite, healed in-process
    pub fn builtin() -> Self {
        Self::new(run_suite(&builtin_cases(), &IssueTracker::default()))
    }
}

#[async_trait]
impl OutcomeSource for MockSource {
    async fn fetch(&self) -> FetchResult<Vec<TestOutcome>> {
        Ok(self.outcomes.clone())
    }

    fn describe(&self) -> String {
        format!("mock data ({} outcomes)", self.outcomes.len())
    }
}
