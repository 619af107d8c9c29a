use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fable_core::error::CoreError;
use fable_narrator::NarratorError;
use fable_storygen::StorygenError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and vendor errors and adds the HTTP mapping.
/// Implements [`IntoResponse`] to produce consistent JSON error
/// responses; no error is allowed to terminate the process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fable_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A text-generation vendor error.
    #[error(transparent)]
    Story(#[from] StorygenError),

    /// A video-narration vendor or orchestration error.
    #[error(transparent)]
    Narration(#[from] NarratorError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with key {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Text-generation vendor errors ---
            AppError::Story(err) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                format!("Failed to generate story: {err}"),
            ),

            // --- Narration vendor / orchestration errors ---
            AppError::Narration(err) => classify_narration_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a narration error onto an HTTP status, error code, and message.
///
/// The quota condition gets its own code and a friendlier message than
/// the generic upstream failure.
fn classify_narration_error(err: &NarratorError) -> (StatusCode, &'static str, String) {
    match err {
        NarratorError::QuotaExceeded { .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            "QUOTA_EXCEEDED",
            "Daily video generation limit reached. Please try again tomorrow.".to_string(),
        ),
        NarratorError::GenerationFailed { .. } => (
            StatusCode::BAD_GATEWAY,
            "GENERATION_FAILED",
            format!("Failed to generate video: {err}"),
        ),
        NarratorError::TimedOut { .. } => (
            StatusCode::GATEWAY_TIMEOUT,
            "GENERATION_TIMEOUT",
            format!("Failed to generate video: {err}"),
        ),
        NarratorError::Cancelled => (
            StatusCode::SERVICE_UNAVAILABLE,
            "SHUTTING_DOWN",
            "The server is shutting down; the narration was abandoned".to_string(),
        ),
        NarratorError::Request(_) | NarratorError::Api { .. } | NarratorError::MalformedResponse(_) => {
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                format!("Failed to generate video: {err}"),
            )
        }
    }
}
