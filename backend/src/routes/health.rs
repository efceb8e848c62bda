//! Health probes and the Prometheus scrape endpoint
//!
//! - /health: process is up
//! - /health/ready: database answers, 503 otherwise
//! - /health/live: liveness probe
//! - /metrics: Prometheus text, 404 when the recorder is disabled

use crate::{db, state::AppState};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseStatus>,
}

/// Outcome of the database round trip
#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn probe(status: &'static str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database: None,
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    probe("healthy")
}

/// GET /health/live
pub async fn liveness_check() -> Json<HealthResponse> {
    probe("alive")
}

/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match db::health_check(state.db()).await {
        Ok(()) => DatabaseStatus {
            healthy: true,
            error: None,
        },
        Err(e) => DatabaseStatus {
            healthy: false,
            error: Some(e.to_string()),
        },
    };

    let (code, status) = if database.healthy {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: Some(database),
        }),
    )
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn test_health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
        assert!(!response.version.is_empty());
        assert!(response.database.is_none());
    }

    #[tokio::test]
    async fn test_liveness_check_returns_alive() {
        assert_eq!(liveness_check().await.status, "alive");
    }

    #[tokio::test]
    async fn test_readiness_with_live_database() {
        let pool = db::in_memory_pool().await.unwrap();
        let state = AppState::new(pool, AppConfig::for_tests(), None);

        let (code, Json(body)) = readiness_check(State(state)).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ready");
        assert!(body.database.unwrap().healthy);
    }

    #[tokio::test]
    async fn test_metrics_disabled_is_not_found() {
        let pool = db::in_memory_pool().await.unwrap();
        let state = AppState::new(pool, AppConfig::for_tests(), None);

        let response = metrics(State(state)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
