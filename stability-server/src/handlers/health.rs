//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;
use stability_core::EngineStatus;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    news_configured: bool,
    engine: EngineStatus,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        news_configured: state.news.is_configured(),
        engine: state.classifier.status(),
    })
}
