//! End-to-end dashboard scenarios driven through `run_cycle`

use async_trait::async_trait;
use healwatch_monitor::{
    run_cycle, DashboardState, DashboardView, FetchError, FetchResult, OutcomeSource,
};
use healwatch_types::{OutcomeStatus, RawStatus, Summary, TestOutcome};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Source replaying a fixed sequence of fetch results
struct ReplaySource {
    script: Mutex<VecDeque<FetchResult<Vec<TestOutcome>>>>,
}

impl ReplaySource {
    fn new(script: Vec<FetchResult<Vec<TestOutcome>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

#[async_trait]
impl OutcomeSource for ReplaySource {
    async fn fetch(&self) -> FetchResult<Vec<TestOutcome>> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn describe(&self) -> String {
        "replay".to_string()
    }
}

fn ready(state: &DashboardState) -> (&Summary, bool) {
    match state.view() {
        DashboardView::Ready { snapshot, stale } => (&snapshot.summary, stale.is_some()),
        other => panic!("expected results, got {:?}", other),
    }
}

fn scenario_c() -> Vec<TestOutcome> {
    vec![
        TestOutcome::new("t3", RawStatus::Healed, "#c").healed_selector("#c2"),
        TestOutcome::new("t4", RawStatus::Failed, "#d").error("not found"),
    ]
}

#[tokio::test]
async fn scenario_a_single_pass() {
    let source = ReplaySource::new(vec![Ok(vec![TestOutcome::new(
        "t1",
        RawStatus::Passed,
        "#a",
    )])]);
    let mut state = DashboardState::new();
    run_cycle(&source, &mut state).await.unwrap();

    let (summary, stale) = ready(&state);
    assert_eq!(summary.total, 1);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.healed, 0);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.success_rate_percent(), 100);
    assert!(!stale);
}

#[tokio::test]
async fn scenario_b_no_change_shown_as_passed() {
    let source = ReplaySource::new(vec![Ok(vec![TestOutcome::new(
        "t2",
        RawStatus::NoChange,
        "#b",
    )])]);
    let mut state = DashboardState::new();
    run_cycle(&source, &mut state).await.unwrap();

    let snapshot = state.snapshot.as_ref().unwrap();
    assert_eq!(snapshot.outcomes[0].status, OutcomeStatus::Passed);
    assert_eq!(snapshot.summary, Summary::from_counts(1, 0, 0));
    assert_eq!(snapshot.summary.success_rate_percent(), 100);
}

#[tokio::test]
async fn scenario_c_mixed_results() {
    let source = ReplaySource::new(vec![Ok(scenario_c())]);
    let mut state = DashboardState::new();
    run_cycle(&source, &mut state).await.unwrap();

    let (summary, _) = ready(&state);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.passed, 0);
    assert_eq!(summary.healed, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.success_rate, 50.0);

    let healed = &state.snapshot.as_ref().unwrap().outcomes[0];
    assert_eq!(healed.healed_selector.as_deref(), Some("#c2"));
}

#[tokio::test]
async fn scenario_d_first_cycle_fails() {
    let source = ReplaySource::new(vec![Err(FetchError::Network(
        "connection refused".into(),
    ))]);
    let mut state = DashboardState::new();
    assert!(run_cycle(&source, &mut state).await.is_err());

    match state.view() {
        DashboardView::Unavailable(failure) => {
            assert_eq!(failure.cycle, 1);
            assert!(matches!(failure.error, FetchError::Network(_)));
        }
        other => panic!("expected unavailable view, got {:?}", other),
    }
    assert!(state.snapshot.is_none());
}

#[tokio::test]
async fn scenario_e_failure_keeps_last_results() {
    let source = ReplaySource::new(vec![
        Ok(scenario_c()),
        Err(FetchError::Status {
            status: 500,
            message: "Internal Server Error".into(),
        }),
    ]);
    let mut state = DashboardState::new();

    run_cycle(&source, &mut state).await.unwrap();
    let before = state.snapshot.clone();
    assert!(run_cycle(&source, &mut state).await.is_err());

    assert_eq!(state.snapshot, before);
    let (summary, stale) = ready(&state);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.success_rate, 50.0);
    assert!(stale);
    assert_eq!(state.last_error.as_ref().unwrap().cycle, 2);
}

#[tokio::test]
async fn empty_result_replaces_previous_results() {
    let source = ReplaySource::new(vec![Ok(scenario_c()), Ok(Vec::new())]);
    let mut state = DashboardState::new();

    run_cycle(&source, &mut state).await.unwrap();
    run_cycle(&source, &mut state).await.unwrap();

    let (summary, stale) = ready(&state);
    assert_eq!(*summary, Summary::default());
    assert!(!stale);
}
