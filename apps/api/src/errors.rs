use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::tagger::TaggerError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The scoring core itself has no failure modes — every variant here belongs
/// to the shell: request validation, the document collaborators, or the
/// tagger collaborator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to fetch resume: {0}")]
    Fetch(String),

    #[error("Failed to parse resume document: {0}")]
    Parse(String),

    #[error("Tagger error: {0}")]
    Tagger(#[from] TaggerError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Fetch(msg) => {
                tracing::error!("Resume fetch failed: {msg}");
                (
                    StatusCode::BAD_REQUEST,
                    "FETCH_ERROR",
                    "Failed to fetch resume".to_string(),
                )
            }
            AppError::Parse(msg) => {
                tracing::error!("Resume parse failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PARSE_ERROR",
                    "Failed to extract text from resume".to_string(),
                )
            }
            AppError::Tagger(e) => {
                tracing::error!("Tagger error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TAGGER_ERROR",
                    "An entity tagging error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
