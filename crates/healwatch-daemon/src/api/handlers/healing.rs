//! Healing handlers

use crate::api::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use healwatch_engine::{heal_element as heal, run_suite};
use healwatch_types::{ElementData, HealingResponse, TestOutcome};
use tracing::{info, instrument};

/// Heal a single element
#[instrument(skip_all)]
pub async fn heal_element(
    State(state): State<AppState>,
    body: Result<Json<ElementData>, JsonRejection>,
) -> ApiResult<Json<HealingResponse>> {
    let Json(data) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let response = heal(&data, &state.tracker);
    info!(
        selector = %data.original_selector,
        status = %response.status,
        healed = ?response.healed_selector,
        "Element healed"
    );

    Ok(Json(response))
}

/// Run the configured suite and keep its outcomes
#[instrument(skip_all)]
pub async fn run_test_healing(State(state): State<AppState>) -> ApiResult<Json<Vec<TestOutcome>>> {
    if state.suite.is_empty() {
        return Err(ApiError::NotFound("No test cases found".to_string()));
    }

    let outcomes = run_suite(&state.suite, &state.tracker);
    *state.latest.write().await = Some(outcomes.clone());

    Ok(Json(outcomes))
}

/// Outcomes of the most recent suite run
pub async fn latest_results(State(state): State<AppState>) -> ApiResult<Json<Vec<TestOutcome>>> {
    state
        .latest
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No test results available yet".to_string()))
}
