use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::evaluation::evaluator::EvaluationError;
use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Evaluation(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            AppError::Evaluation(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Evaluation failures are already logged by the evaluator, and
    /// client-side errors are not logged at all.
    fn logs_on_response(&self) -> bool {
        matches!(self, AppError::Extraction(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.logs_on_response() {
            tracing::error!("Request failed: {self}");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
