use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every error reaches the client as a flat `{"error": "<message>"}` body.
/// Malformed model *output* never lands here — the response recoverer absorbs
/// it; only transport-level oracle failure becomes a 500.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required part of the request is absent (file, resume data, job
    /// description). Client-correctable.
    #[error("{0}")]
    MissingInput(String),

    /// The uploaded file's extension is not one we extract text from.
    /// Client-correctable.
    #[error("{0}")]
    UnsupportedFormat(String),

    /// The document was recognized but its bytes could not be read.
    #[error("Failed to extract resume text: {0}")]
    Extraction(String),

    /// The generative-model service could not be reached or rejected the
    /// call. Opaque to the client; not retried.
    #[error("AI analysis failed: {0}")]
    Oracle(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingInput(msg) | AppError::UnsupportedFormat(msg) => {
                tracing::debug!("Rejected request: {msg}");
                StatusCode::BAD_REQUEST
            }
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Oracle(e) => {
                tracing::error!("Oracle error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
