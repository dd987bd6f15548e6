use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use drama_core::error::CoreError;
use drama_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and store failures for persistence.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `drama_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The record store could not persist a mutation. `message` is the
    /// user-facing text for the failed operation.
    #[error("{message}: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a closure that wraps a [`StoreError`] with an operation message,
    /// for use with `map_err`.
    pub fn persistence(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Persistence { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity}未找到"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Persistence { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    (*message).to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
