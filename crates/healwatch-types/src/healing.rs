//! Element healing request and response types

use crate::status::OutcomeStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of a UI element as captured by the test harness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementData {
    /// Selector the test was written against
    pub original_selector: String,

    /// Surrounding HTML
    #[serde(default)]
    pub html_content: String,

    /// Attributes of the element as found in the DOM
    #[serde(default)]
    pub element_attributes: BTreeMap<String, String>,

    /// Whether the element is visible
    #[serde(default = "default_true")]
    pub is_visible: bool,

    /// Whether the element exists at all
    #[serde(default = "default_true")]
    pub exists: bool,
}

fn default_true() -> bool {
    true
}

impl ElementData {
    /// Element that exists and is visible, with no attributes yet
    pub fn new(original_selector: impl Into<String>) -> Self {
        Self {
            original_selector: original_selector.into(),
            html_content: String::new(),
            element_attributes: BTreeMap::new(),
            is_visible: true,
            exists: true,
        }
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html_content = html.into();
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.element_attributes.insert(key.into(), value.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    pub fn missing(mut self) -> Self {
        self.exists = false;
        self
    }

    /// Look up an attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.element_attributes.get(key).map(String::as_str)
    }
}

/// A named element scenario in a healing suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub data: ElementData,
}

impl TestCase {
    pub fn new(name: impl Into<String>, data: ElementData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Result of one element healing attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealingResponse {
    /// Whether a working selector is available
    pub success: bool,

    /// Verdict
    pub status: OutcomeStatus,

    /// Working selector (original one for PASSED)
    #[serde(default)]
    pub healed_selector: Option<String>,

    #[serde(default)]
    pub explanation: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    /// Issue filed for a failure
    #[serde(default)]
    pub jira_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_defaults() {
        let json = r##"{"original_selector": "#loginButton"}"##;
        let data: ElementData = serde_json::from_str(json).unwrap();

        assert!(data.exists);
        assert!(data.is_visible);
        assert!(data.element_attributes.is_empty());
        assert_eq!(data, ElementData::new("#loginButton"));
    }

    #[test]
    fn test_element_builder() {
        let data = ElementData::new("#oldId")
            .attr("id", "newId")
            .attr("data-testid", "submit-button")
            .hidden();

        assert_eq!(data.attribute("id"), Some("newId"));
        assert_eq!(data.attribute("class"), None);
        assert!(!data.is_visible);
        assert!(data.exists);
    }
}
