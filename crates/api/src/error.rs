use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use campus_core::error::CoreError;
use serde_json::json;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `campus_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body that could not be read at all.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status, machine-readable code, and client-safe message.
    ///
    /// Server-side failures are logged here and replaced with a generic
    /// message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(_) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "One or more fields are invalid".to_string(),
                ),
                CoreError::Cancelled => {
                    tracing::warn!("Request cancelled before completion");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "CANCELLED",
                        "The request was cancelled before it completed".to_string(),
                    )
                }
                CoreError::Persistence(msg) => {
                    tracing::error!(error = %msg, "Persistence failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = match &self {
            AppError::Core(CoreError::Validation(violations)) => json!({
                "error": message,
                "code": code,
                "errors": violations,
            }),
            _ => json!({
                "error": message,
                "code": code,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Error type for the server-rendered pages.
///
/// Same status mapping as [`AppError`], rendered as an HTML error page.
#[derive(Debug)]
pub struct PageError(pub AppError);

/// Convenience type alias for page handler return values.
pub type PageResult<T> = Result<T, PageError>;

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        Self(AppError::Core(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _code, message) = self.0.parts();
        (status, Html(views::error_page(status.as_u16(), &message))).into_response()
    }
}
