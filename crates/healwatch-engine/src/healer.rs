//! Single-element healing

use crate::heuristic::{find_best_selector, NO_RELIABLE_SELECTOR};
use crate::tracker::IssueTracker;
use healwatch_types::{ElementData, HealingResponse, OutcomeStatus};
use tracing::debug;

/// Name under which standalone healing failures are filed
const ISSUE_TEST_NAME: &str = "Element Healing";

/// Heal one element and build the response reported to clients
pub fn heal_element(data: &ElementData, tracker: &IssueTracker) -> HealingResponse {
    let verdict = find_best_selector(data);

    debug!(
        original = %data.original_selector,
        status = %verdict.status,
        selector = ?verdict.selector,
        "Selector heuristic verdict"
    );

    match verdict.status {
        OutcomeStatus::Failed => {
            let error = verdict
                .error
                .unwrap_or_else(|| NO_RELIABLE_SELECTOR.to_string());
            let jira_url = tracker.issue_url(ISSUE_TEST_NAME, &error, data);

            HealingResponse {
                success: false,
                status: OutcomeStatus::Failed,
                healed_selector: None,
                explanation: Some(error.clone()),
                error: Some(error),
                jira_url: Some(jira_url),
            }
        }
        OutcomeStatus::Healed => {
            let explanation = verdict.selector.as_ref().map(|selector| {
                format!(
                    "Original selector '{}' was updated to '{}'",
                    data.original_selector, selector
                )
            });

            HealingResponse {
                success: true,
                status: OutcomeStatus::Healed,
                healed_selector: verdict.selector,
                explanation,
                error: None,
                jira_url: None,
            }
        }
        OutcomeStatus::Passed => HealingResponse {
            success: true,
            status: OutcomeStatus::Passed,
            healed_selector: verdict.selector,
            explanation: None,
            error: None,
            jira_url: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::ELEMENT_MISSING;

    #[test]
    fn test_failure_files_issue() {
        let data = ElementData::new("#oldButton").missing();
        let response = heal_element(&data, &IssueTracker::default());

        assert!(!response.success);
        assert_eq!(response.status, OutcomeStatus::Failed);
        assert_eq!(response.error.as_deref(), Some(ELEMENT_MISSING));
        assert_eq!(response.explanation, response.error);
        assert!(response.healed_selector.is_none());
        assert!(response
            .jira_url
            .as_deref()
            .unwrap()
            .contains("/browse/TEST-"));
    }

    #[test]
    fn test_heal_explains_change() {
        let data = ElementData::new("#missingId").attr("class", "btn-primary submit-btn");
        let response = heal_element(&data, &IssueTracker::default());

        assert!(response.success);
        assert_eq!(response.healed_selector.as_deref(), Some(".btn-primary"));
        assert_eq!(
            response.explanation.as_deref(),
            Some("Original selector '#missingId' was updated to '.btn-primary'")
        );
        assert!(response.jira_url.is_none());
    }

    #[test]
    fn test_pass_keeps_original_selector() {
        let data = ElementData::new("#loginBtn").attr("id", "loginBtn");
        let response = heal_element(&data, &IssueTracker::default());

        assert!(response.success);
        assert_eq!(response.status, OutcomeStatus::Passed);
        assert_eq!(response.healed_selector.as_deref(), Some("#loginBtn"));
        assert!(response.explanation.is_none());
    }
}
