//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use stability_core::InferenceError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Caller sent a body we could not read
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    // Model runtime errors
    #[error(transparent)]
    Inference(#[from] InferenceError),

    // Generic errors
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure reaching the route boundary is a server error
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let message = self.to_string();

        tracing::error!("Request failed: {}", message);

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Inference task failed: {}", err))
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::InvalidInput(err.body_text())
    }
}
