//! API Router configuration

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/heal-element", post(handlers::heal_element))
        .route("/test-healing", post(handlers::run_test_healing))
        .route("/test-results", get(handlers::latest_results));

    let router = Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    let router = if enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use healwatch_engine::{builtin_cases, IssueTracker};
    use healwatch_types::{
        ElementData, HealingResponse, OutcomeStatus, ServiceHealth, TestCase, TestOutcome,
    };
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(AppState::new(builtin_cases(), IssueTracker::default()), true)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = app.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    fn json<T: DeserializeOwned>(bytes: &[u8]) -> T {
        serde_json::from_slice(bytes).unwrap()
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_returns_200() {
        let app = test_router();
        let (status, body) = send(&app, get("/api/health")).await;

        assert_eq!(status, StatusCode::OK);
        let health: ServiceHealth = json(&body);
        assert_eq!(health.status, "healthy");
        assert_eq!(health.suite_size, 15);
        assert!(!health.has_results);
    }

    #[tokio::test]
    async fn test_healing_runs_suite_and_stores_results() {
        let app = test_router();

        let (status, _) = send(&app, get("/api/test-results")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, post_empty("/api/test-healing")).await;
        assert_eq!(status, StatusCode::OK);
        let outcomes: Vec<TestOutcome> = json(&body);
        assert_eq!(outcomes.len(), 15);
        assert_eq!(outcomes[0].status, "PASSED");

        let (status, body) = send(&app, get("/api/test-results")).await;
        assert_eq!(status, StatusCode::OK);
        let latest: Vec<TestOutcome> = json(&body);
        assert_eq!(latest, outcomes);

        let (_, body) = send(&app, get("/api/health")).await;
        assert!(json::<ServiceHealth>(&body).has_results);
    }

    #[tokio::test]
    async fn test_healing_wire_format() {
        let app = test_router();
        let (_, body) = send(&app, post_empty("/api/test-healing")).await;
        let raw: serde_json::Value = json(&body);

        let first = &raw[0];
        assert!(first.get("name").is_some());
        assert!(first.get("original_selector").is_some());
        assert_eq!(first["healed_selector"], "#loginBtn");
    }

    #[tokio::test]
    async fn empty_suite_is_not_found() {
        let app = create_router(AppState::new(Vec::new(), IssueTracker::default()), false);
        let (status, body) = send(&app, post_empty("/api/test-healing")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: serde_json::Value = json(&body);
        assert_eq!(error["code"], "NOT_FOUND");
        assert_eq!(error["error"], "Not found: No test cases found");
    }

    #[tokio::test]
    async fn custom_suite_is_used() {
        let suite = vec![TestCase::new(
            "only",
            ElementData::new("#gone").missing(),
        )];
        let app = create_router(AppState::new(suite, IssueTracker::new("https://t.example", "UI")), true);

        let (_, body) = send(&app, post_empty("/api/test-healing")).await;
        let outcomes: Vec<TestOutcome> = json(&body);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, "FAILED");
        assert!(outcomes[0]
            .jira_url
            .as_deref()
            .unwrap()
            .starts_with("https://t.example/browse/UI-"));
    }

    #[tokio::test]
    async fn heal_element_returns_response() {
        let app = test_router();
        let data = ElementData::new("#oldId")
            .attr("id", "newId")
            .attr("data-testid", "submit-button");

        let (status, body) = send(
            &app,
            post_json("/api/heal-element", serde_json::to_string(&data).unwrap()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response: HealingResponse = json(&body);
        assert!(response.success);
        assert_eq!(response.status, OutcomeStatus::Healed);
        assert_eq!(
            response.healed_selector.as_deref(),
            Some("[data-testid=\"submit-button\"]")
        );
    }

    #[tokio::test]
    async fn heal_element_rejects_bad_body() {
        let app = test_router();
        let (status, body) = send(
            &app,
            post_json("/api/heal-element", r#"{"html_content": "<p>"}"#.to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: serde_json::Value = json(&body);
        assert_eq!(error["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = test_router();
        let (status, _) = send(&app, get("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
