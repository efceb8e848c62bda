//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a private, migrated in-memory database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use fake::{faker::name::en::FirstName, Fake};
use ru_active_backend::{config::AppConfig, db, routes, state::AppState};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

static USER_SEQ: AtomicUsize = AtomicUsize::new(0);

pub const PASSWORD: &str = "SecurePassword123";

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = db::in_memory_pool()
            .await
            .expect("Failed to create in-memory database");

        let state = AppState::new(pool.clone(), AppConfig::for_tests(), None);
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Send a request, optionally with a bearer token and JSON body
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.request("GET", path, None, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, String) {
        self.request("POST", path, None, Some(body)).await
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.request("GET", path, Some(token), None).await
    }

    pub async fn post_auth(&self, path: &str, token: &str, body: Value) -> (StatusCode, String) {
        self.request("POST", path, Some(token), Some(body)).await
    }

    pub async fn put_auth(&self, path: &str, token: &str, body: Value) -> (StatusCode, String) {
        self.request("PUT", path, Some(token), Some(body)).await
    }

    /// Register a fresh user; returns (username, access token)
    pub async fn register_user(&self) -> (String, String) {
        let username = unique_username();
        let token = self.register(&username).await;
        (username, token)
    }

    /// Register a given username; returns its access token
    pub async fn register(&self, username: &str) -> String {
        let (status, body) = self
            .post(
                "/api/v1/auth/register",
                json!({ "username": username, "password": PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
        parse(&body)["access_token"].as_str().unwrap().to_string()
    }

    /// Log one set dated `date` (YYYY-MM-DD)
    pub async fn log_workout(&self, token: &str, exercise: &str, date: &str) {
        let (status, body) = self
            .post_auth(
                "/api/v1/progress",
                token,
                json!({ "exercise": exercise, "weight": 60.0, "reps": 8, "date": date }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "log failed: {}", body);
    }
}

/// A valid, collision-free username
pub fn unique_username() -> String {
    let first: String = FirstName().fake();
    let stem: String = first
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(12)
        .collect();
    format!("u_{}_{}", stem.to_lowercase(), USER_SEQ.fetch_add(1, Ordering::Relaxed))
}

pub fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON {:?}: {}", body, e))
}
