// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Errors raised by the quiz core (repository, use cases, AI parsing).
///
/// The session controller is the only place that turns these into a
/// user-facing message; everything below it propagates with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// The data store was unreachable or returned data that could not be decoded.
    RemoteFetch(String),

    /// The AI call failed, or its output held no usable questions.
    Generation(String),
}

impl QuizError {
    /// The bare cause, without the category prefix.
    pub fn cause(&self) -> &str {
        match self {
            QuizError::RemoteFetch(msg) | QuizError::Generation(msg) => msg,
        }
    }
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::RemoteFetch(msg) => write!(f, "Failed to load quiz data: {}", msg),
            QuizError::Generation(msg) => write!(f, "Failed to generate questions: {}", msg),
        }
    }
}

impl std::error::Error for QuizError {}

/// Converts `sqlx::Error` into `QuizError::RemoteFetch`.
impl From<sqlx::Error> for QuizError {
    fn from(err: sqlx::Error) -> Self {
        QuizError::RemoteFetch(err.to_string())
    }
}

/// HTTP failures only happen on the generation path.
impl From<reqwest::Error> for QuizError {
    fn from(err: reqwest::Error) -> Self {
        QuizError::Generation(err.to_string())
    }
}

/// Error type of the HTTP surface (the generation function).
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 400 Bad Request, the model call or its output failed
    Generation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into the `{ "error": ... }` envelope the mobile client expects.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Generation(msg) => {
                tracing::warn!("Generation failed: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        AppError::Generation(err.cause().to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
