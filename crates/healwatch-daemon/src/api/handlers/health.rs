//! Health handler

use crate::api::state::AppState;
use axum::{extract::State, Json};
use healwatch_types::ServiceHealth;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<ServiceHealth> {
    let has_results = state.latest.read().await.is_some();

    Json(ServiceHealth {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
        started_at: state.started_at,
        suite_size: state.suite.len(),
        has_results,
    })
}
