//! Selector heuristic

use healwatch_types::{ElementData, OutcomeStatus};

/// Error reported when the element is absent from the DOM
pub const ELEMENT_MISSING: &str = "Element does not exist in the DOM";

/// Error reported when no usable attribute was found
pub const NO_RELIABLE_SELECTOR: &str = "Could not find a reliable selector";

/// Verdict of the selector heuristic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorVerdict {
    pub status: OutcomeStatus,
    pub selector: Option<String>,
    pub error: Option<String>,
}

impl SelectorVerdict {
    fn passed(selector: &str) -> Self {
        Self {
            status: OutcomeStatus::Passed,
            selector: Some(selector.to_string()),
            error: None,
        }
    }

    fn healed(selector: String) -> Self {
        Self {
            status: OutcomeStatus::Healed,
            selector: Some(selector),
            error: None,
        }
    }

    fn failed(error: &str) -> Self {
        Self {
            status: OutcomeStatus::Failed,
            selector: None,
            error: Some(error.to_string()),
        }
    }
}

/// Pick the most reliable selector for an element.
///
/// Visibility does not influence the verdict; a hidden element whose id
/// still matches passes.
pub fn find_best_selector(data: &ElementData) -> SelectorVerdict {
    if !data.exists {
        return SelectorVerdict::failed(ELEMENT_MISSING);
    }

    let current_id = data.attribute("id").unwrap_or("");
    if let Some(original_id) = data
        .original_selector
        .strip_prefix('#')
        .filter(|id| !id.is_empty())
    {
        if current_id.contains(original_id) {
            return SelectorVerdict::passed(&data.original_selector);
        }
    }

    if let Some(test_id) = data.attribute("data-testid") {
        return SelectorVerdict::healed(format!("[data-testid=\"{}\"]", test_id));
    }

    if let Some(id) = data.attribute("id") {
        return SelectorVerdict::healed(format!("#{}", id));
    }

    if let Some(class) = data
        .attribute("class")
        .and_then(|classes| classes.split_whitespace().next())
    {
        return SelectorVerdict::healed(format!(".{}", class));
    }

    SelectorVerdict::failed(NO_RELIABLE_SELECTOR)
}
