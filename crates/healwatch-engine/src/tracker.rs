//! Issue tracker links for healing failures
//!
//! Issues are not actually filed; the link is derived from a digest of the
//! issue description so the same failure always maps to the same key.

use healwatch_types::ElementData;
use serde::{Deserialize, Serialize};

/// Issue tracker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTracker {
    /// Tracker base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Project key prefixed to issue numbers
    #[serde(default = "default_project")]
    pub project: String,
}

impl Default for IssueTracker {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            project: default_project(),
        }
    }
}

fn default_base_url() -> String {
    "https://jira.example.com".to_string()
}

fn default_project() -> String {
    "TEST".to_string()
}

impl IssueTracker {
    pub fn new(base_url: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            project: project.into(),
        }
    }

    /// Link for an issue describing a healing failure
    pub fn issue_url(&self, test_name: &str, error: &str, data: &ElementData) -> String {
        let description = describe_issue(test_name, error, data);
        let digest = blake3::hash(description.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest.as_bytes()[..8]);
        let number = u64::from_le_bytes(prefix) % 1000;

        format!(
            "{}/browse/{}-{}",
            self.base_url.trim_end_matches('/'),
            self.project,
            number
        )
    }
}

fn describe_issue(test_name: &str, error: &str, data: &ElementData) -> String {
    format!(
        "Test: {}\nOriginal Selector: {}\nError: {}\nElement State:\n- Exists: {}\n- Visible: {}\n- Attributes: {:?}\nHTML Context: {}",
        test_name,
        data.original_selector,
        error,
        data.exists,
        data.is_visible,
        data.element_attributes,
        data.html_content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_url_is_deterministic() {
        let tracker = IssueTracker::default();
        let data = ElementData::new("#oldButton").missing();

        let first = tracker.issue_url("Element Healing", "gone", &data);
        let second = tracker.issue_url("Element Healing", "gone", &data);
        assert_eq!(first, second);
        assert!(first.starts_with("https://jira.example.com/browse/TEST-"));
    }

    #[test]
    fn test_issue_number_in_range() {
        let tracker = IssueTracker::new("https://issues.internal/", "UI");
        let url = tracker.issue_url("t", "e", &ElementData::new("#a"));

        let number: u64 = url
            .strip_prefix("https://issues.internal/browse/UI-")
            .unwrap()
            .parse()
            .unwrap();
        assert!(number < 1000);
    }
}
