//! Property-based tests for authentication enforcement
//!
//! Every identity-bearing endpoint must answer 401 unless the request carries
//! a valid bearer access token.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::routes::create_router;
use crate::state::AppState;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use proptest::prelude::*;
use sqlx::SqlitePool;
use tower::ServiceExt;

const PROTECTED: &[(&str, &str)] = &[
    ("GET", "/api/v1/auth/me"),
    ("GET", "/api/v1/profile"),
    ("GET", "/api/v1/nutrition/suggestion"),
    ("GET", "/api/v1/progress"),
    ("GET", "/api/v1/progress/csv"),
    ("GET", "/api/v1/badges"),
    ("POST", "/api/v1/badges/check"),
    ("GET", "/api/v1/friends"),
    ("GET", "/api/v1/friends/workouts"),
    ("GET", "/api/v1/leaderboard"),
];

/// State over a lazy pool; auth rejections never touch the database
fn create_test_state() -> AppState {
    let pool = SqlitePool::connect_lazy("sqlite::memory:").unwrap();
    AppState::new(pool, AppConfig::for_tests(), None)
}

async fn status_for(state: AppState, method: &str, uri: &str, header: Option<String>) -> StatusCode {
    let mut builder = Request::builder().uri(uri).method(method);
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let request = builder.body(Body::empty()).unwrap();
    create_router(state).oneshot(request).await.unwrap().status()
}

fn invalid_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9]{10,50}",
        "[a-zA-Z0-9]{10}\\.[a-zA-Z0-9]{10}",
        "[a-zA-Z0-9_-]{20}\\.[a-zA-Z0-9_-]{20}\\.[a-zA-Z0-9_-]{20}",
    ]
}

fn auth_header_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        invalid_token_strategy().prop_map(Some),
        invalid_token_strategy().prop_map(|t| Some(format!("Basic {}", t))),
        invalid_token_strategy().prop_map(|t| Some(format!("Bearer {}", t))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_unauthenticated_requests_return_401(
        auth_header in auth_header_strategy(),
        endpoint in prop::sample::select(PROTECTED),
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (method, uri) = endpoint;
        // The pool spawns its maintenance task, so it must be built inside the runtime
        let status = rt.block_on(async {
            status_for(create_test_state(), method, uri, auth_header).await
        });
        prop_assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_token_with_wrong_secret_returns_401() {
    let other = JwtService::new("wrong-secret-key", 3600, 86400);
    let token = other.generate_access_token(1, "alice").unwrap();

    let status = status_for(
        create_test_state(),
        "GET",
        "/api/v1/auth/me",
        Some(format!("Bearer {}", token)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let state = create_test_state();
    let token = state.jwt().generate_refresh_token(1, "alice").unwrap();

    let status = status_for(state, "GET", "/api/v1/profile", Some(format!("Bearer {}", token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_calculators_need_no_token() {
    let request = Request::builder()
        .uri("/api/v1/workouts/progression")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"current_weight":100.0,"current_reps":8,"current_sets":3}"#,
        ))
        .unwrap();

    let response = create_router(create_test_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
