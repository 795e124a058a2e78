use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

use sft_core::CoreError;
use sft_sixtyfour::SixtyFourApiError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`SixtyFourApiError`] for
/// relay failures. Implements [`IntoResponse`] to produce consistent
/// `{ "error": ..., "details": ... }` JSON bodies; upstream failures keep
/// the remote's HTTP status code, everything that never reached HTTP maps
/// to 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sft_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A relay failure from the SixtyFour client.
    #[error(transparent)]
    Upstream(#[from] SixtyFourApiError),

    /// A request rejected before any network call.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::JobNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    format!("Job not found: {id}"),
                    Value::Null,
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    format!("Validation failed: {msg}"),
                    Value::Null,
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                        Value::Null,
                    )
                }
            },

            // --- Relay errors ---
            AppError::Upstream(err) => upstream_response(err),

            // --- HTTP-specific errors ---
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Validation failed: {msg}"),
                Value::Null,
            ),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    Value::Null,
                )
            }
        };

        let body = json!({
            "error": message,
            "details": details,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a relay failure onto an HTTP status, message, and details payload.
///
/// - A missing credential is a configuration problem on our side: 500 with
///   a message naming the env var.
/// - A non-2xx upstream reply is forwarded with the remote's status code
///   and body, never retried.
/// - Transport failures surface as a generic 500.
fn upstream_response(err: SixtyFourApiError) -> (StatusCode, String, Value) {
    match err {
        SixtyFourApiError::MissingApiKey => (
            StatusCode::INTERNAL_SERVER_ERROR,
            err.to_string(),
            Value::Null,
        ),
        SixtyFourApiError::Api { status, body } => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                format!("SixtyFour API request failed with status {status}"),
                body,
            )
        }
        SixtyFourApiError::Request(e) => {
            tracing::error!(error = %e, "Upstream request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to reach the SixtyFour API: {e}"),
                Value::Null,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_forwarded() {
        let (status, _, details) = upstream_response(SixtyFourApiError::Api {
            status: 404,
            body: json!({"detail": "unknown task"}),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(details["detail"], "unknown task");
    }

    #[test]
    fn invalid_upstream_status_falls_back_to_500() {
        let (status, _, _) = upstream_response(SixtyFourApiError::Api {
            status: 9999,
            body: Value::Null,
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_key_names_the_env_var() {
        let (status, message, _) = upstream_response(SixtyFourApiError::MissingApiKey);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("SIXTYFOUR_API_KEY"));
    }
}
