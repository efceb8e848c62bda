//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use common::{parse, unique_username, TestApp, PASSWORD};
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let body = json!({ "username": unique_username(), "password": PASSWORD });
    let (status, response) = app.post("/api/v1/auth/register", body).await;

    assert_eq!(status, StatusCode::CREATED);
    let response = parse(&response);
    assert!(!response["access_token"].as_str().unwrap().is_empty());
    assert!(!response["refresh_token"].as_str().unwrap().is_empty());
    assert_eq!(response["token_type"], "Bearer");
    assert_eq!(response["expires_in"], 3600);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    let username = unique_username();

    app.register(&username).await;
    let (status, body) = app
        .post(
            "/api/v1/auth/register",
            json!({ "username": username, "password": "AnotherPassword9" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(parse(&body)["error"]["code"], "CONFLICT");

    // The first password still works, the second never took effect
    let (status, _) = app
        .post("/api/v1/auth/login", json!({ "username": username, "password": PASSWORD }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .post(
            "/api/v1/auth/login",
            json!({ "username": username, "password": "AnotherPassword9" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/api/v1/auth/register", json!({ "username": "no spaces allowed", "password": PASSWORD }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post("/api/v1/auth/register", json!({ "username": unique_username(), "password": "123" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/api/v1/auth/login", json!({ "username": "nobody_here", "password": PASSWORD }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_and_me() {
    let app = TestApp::new().await;
    let username = unique_username();
    app.register(&username).await;

    let (_, body) = app
        .post("/api/v1/auth/login", json!({ "username": username, "password": PASSWORD }))
        .await;
    let refresh = parse(&body)["refresh_token"].as_str().unwrap().to_string();

    let (status, body) = app
        .post("/api/v1/auth/refresh", json!({ "refresh_token": refresh }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let access = parse(&body)["access_token"].as_str().unwrap().to_string();

    let (status, body) = app.get_auth("/api/v1/auth/me", &access).await;
    assert_eq!(status, StatusCode::OK);
    let me = parse(&body);
    assert_eq!(me["username"], username.as_str());
    assert!(me["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(parse(&body)["error"]["code"], "UNAUTHORIZED");
}
