//! Healing suites
//!
//! A suite is a list of named element scenarios. Running it heals every
//! element and reports one [`TestOutcome`] per case, in suite order.

use crate::error::{EngineError, EngineResult};
use crate::healer::heal_element;
use crate::tracker::IssueTracker;
use healwatch_types::{ElementData, TestCase, TestOutcome};
use std::path::Path;
use tracing::{info, instrument};

/// Run every case of a suite through the healer
#[instrument(skip_all, fields(cases = cases.len()))]
pub fn run_suite(cases: &[TestCase], tracker: &IssueTracker) -> Vec<TestOutcome> {
    let outcomes: Vec<TestOutcome> = cases
        .iter()
        .map(|case| {
            let response = heal_element(&case.data, tracker);
            TestOutcome {
                name: case.name.clone(),
                status: response.status.as_str().to_string(),
                original_selector: case.data.original_selector.clone(),
                healed_selector: response.healed_selector,
                explanation: response.explanation,
                error: response.error,
                jira_url: response.jira_url,
                info: None,
            }
        })
        .collect();

    info!(outcomes = outcomes.len(), "Healing suite finished");
    outcomes
}

/// Load a suite from a JSON array of test cases
pub fn load_suite(path: impl AsRef<Path>) -> EngineResult<Vec<TestCase>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| EngineError::SuiteIo {
        path: path.to_path_buf(),
        source,
    })?;

    let cases: Vec<TestCase> =
        serde_json::from_str(&contents).map_err(|source| EngineError::SuiteParse {
            path: path.to_path_buf(),
            source,
        })?;

    if cases.is_empty() {
        return Err(EngineError::EmptySuite);
    }

    Ok(cases)
}

/// The built-in element scenarios
pub fn builtin_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(
            "Case 1: No Change Needed (Original selector still valid)",
            ElementData::new("#loginBtn")
                .html(r#"<button id="loginBtn" type="submit">Login</button>"#)
                .attr("id", "loginBtn")
                .attr("type", "submit"),
        ),
        TestCase::new(
            "Case 1B: Element with Dynamic ID (React-style)",
            ElementData::new("#login-button-abc123")
                .html(r#"<button id="login-button-xyz789" class="login-btn" type="submit">Login</button>"#)
                .attr("id", "login-button-xyz789")
                .attr("class", "login-btn")
                .attr("type", "submit"),
        ),
        TestCase::new(
            "Case 2: Element Hidden",
            ElementData::new("#submitButton")
                .html(r#"<button id="submitButton" style="display: none">Submit</button>"#)
                .attr("id", "submitButton")
                .attr("style", "display: none")
                .hidden(),
        ),
        TestCase::new(
            "Case 3: Element Not Found",
            ElementData::new("#oldButton")
                .html(r#"<button id="newButton">Click Me</button>"#)
                .missing(),
        ),
        TestCase::new(
            "Case 4: Successful Healing (ID changed)",
            ElementData::new("#oldId")
                .html(r#"<button id="newId" data-testid="submit-button">Submit</button>"#)
                .attr("id", "newId")
                .attr("data-testid", "submit-button"),
        ),
        TestCase::new(
            "Case 5: Healing with Class",
            ElementData::new("#missingId")
                .html(r#"<button class="btn-primary submit-btn">Submit</button>"#)
                .attr("class", "btn-primary submit-btn"),
        ),
        TestCase::new(
            "Case 6: Element in Shadow DOM",
            ElementData::new("#shadowBtn")
                .html(r#"<div id="host"><shadow-root><button class="shadow-btn">Click</button></shadow-root></div>"#)
                .attr("class", "shadow-btn"),
        ),
        TestCase::new(
            "Case 7: Element in iframe",
            ElementData::new("#frame-button")
                .html(r#"<iframe id="myFrame"><button class="frame-btn">Submit</button></iframe>"#)
                .attr("class", "frame-btn"),
        ),
        TestCase::new(
            "Case 8: Element with Multiple Classes",
            ElementData::new(".old-class")
                .html(r#"<button class="btn primary-btn large-btn submit-btn">Submit</button>"#)
                .attr("class", "btn primary-btn large-btn submit-btn"),
        ),
        TestCase::new(
            "Case 9: Disabled Element",
            ElementData::new("#submitBtn")
                .html(r#"<button id="submitBtn" disabled>Submit</button>"#)
                .attr("id", "submitBtn")
                .attr("disabled", "true"),
        ),
        TestCase::new(
            "Case 10: Element with Special Characters",
            ElementData::new("#user@name")
                .html(r#"<input name="user@domain.com" id="user@name" type="email">"#)
                .attr("id", "user@name")
                .attr("name", "user@domain.com")
                .attr("type", "email"),
        ),
        TestCase::new(
            "Case 11: Element with aria-label",
            ElementData::new("#closeBtn")
                .html(r#"<button aria-label="Close dialog" class="close-btn">×</button>"#)
                .attr("aria-label", "Close dialog")
                .attr("class", "close-btn"),
        ),
        TestCase::new(
            "Case 12: Element Inside Complex Nested Structure",
            ElementData::new("#nestedBtn")
                .html(concat!(
                    r#"<div class="modal"><div class="modal-dialog"><div class="modal-content">"#,
                    r#"<div class="modal-body"><button class="nested-btn">Click</button></div>"#,
                    r#"</div></div></div>"#
                ))
                .attr("class", "nested-btn"),
        ),
        TestCase::new(
            "Case 13: Element with Overlay (Not actually visible)",
            ElementData::new("#coveredBtn")
                .html(concat!(
                    r#"<div><button id="coveredBtn">Click Me</button>"#,
                    r#"<div style="position: absolute; top: 0; left: 0; right: 0; bottom: 0;">Loading...</div></div>"#
                ))
                .attr("id", "coveredBtn")
                .hidden(),
        ),
        TestCase::new(
            "Case 14: Element in Responsive Layout (Mobile vs Desktop)",
            ElementData::new("#menuBtn")
                .html(concat!(
                    r#"<div class="navbar"><button class="hamburger-menu d-block d-md-none">☰</button>"#,
                    r#"<nav class="nav-links d-none d-md-flex">Menu Items</nav></div>"#
                ))
                .attr("class", "hamburger-menu d-block d-md-none"),
        ),
    ]
}
