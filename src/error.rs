// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::analysis::AnalysisError;

/// Global Application Error Enum.
/// Maps failures to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request (payload failed validation)
    BadRequest(String),

    // 422 Unprocessable Entity (well-formed payload the analysis rejects)
    Unprocessable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => {
                tracing::warn!("Rejected attempt: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Allows using `?` on analysis calls inside handlers.
impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::Unprocessable(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
