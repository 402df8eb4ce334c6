//! Test outcome records
//!
//! A [`TestOutcome`] is what the backend sends. Its status is kept as text so
//! that one record with an unexpected status can be rejected on its own
//! instead of failing the whole response body. That includes statuses that
//! are missing or not text at all.

use crate::status::{OutcomeStatus, RawStatus, UnknownStatus};
use serde::{Deserialize, Deserializer, Serialize};

/// Raw outcome of one healing test, as reported on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Test case name (not necessarily unique)
    pub name: String,

    /// Raw status text, expected to be one of the raw taxonomy.
    /// A missing or `null` status decodes as empty text; any other non-text
    /// value decodes as its JSON rendering.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: String,

    /// Selector the test was written against
    #[serde(alias = "originalSelector")]
    pub original_selector: String,

    /// Replacement selector (HEALED only)
    #[serde(default, alias = "healedSelector", skip_serializing_if = "Option::is_none")]
    pub healed_selector: Option<String>,

    /// Explanation of the healing attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// Failure description (FAILED only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Issue tracker link for a failure or heal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_url: Option<String>,

    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl TestOutcome {
    /// Create a record with a known raw status and no optional fields
    pub fn new(
        name: impl Into<String>,
        status: RawStatus,
        original_selector: impl Into<String>,
    ) -> Self {
        Self::with_raw_status(name, status.as_str(), original_selector)
    }

    /// Create a record with arbitrary status text
    pub fn with_raw_status(
        name: impl Into<String>,
        status: impl Into<String>,
        original_selector: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            original_selector: original_selector.into(),
            healed_selector: None,
            explanation: None,
            error: None,
            jira_url: None,
            info: None,
        }
    }

    pub fn healed_selector(mut self, selector: impl Into<String>) -> Self {
        self.healed_selector = Some(selector.into());
        self
    }

    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn jira_url(mut self, url: impl Into<String>) -> Self {
        self.jira_url = Some(url.into());
        self
    }

    /// Parse the raw status text
    pub fn raw_status(&self) -> Result<RawStatus, UnknownStatus> {
        self.status.parse()
    }
}

fn lenient_status<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Normalized outcome consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOutcome {
    pub name: String,
    pub status: OutcomeStatus,
    pub original_selector: String,
    /// Only ever set when `status` is HEALED
    pub healed_selector: Option<String>,
    pub explanation: Option<String>,
    pub error: Option<String>,
    pub jira_url: Option<String>,
    pub info: Option<String>,
}
