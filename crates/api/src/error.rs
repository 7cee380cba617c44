use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every variant is terminal for the request and maps to HTTP 500 with the
/// underlying message passed through verbatim. Integrity violations,
/// connectivity failures and undecodable requests are not distinguished by
/// status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A store operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body or path could not be decoded.
    #[error("Invalid request: {0}")]
    Request(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Request(rejection.body_text())
    }
}

impl AppError {
    /// Stable machine-readable code for the `code` field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Request(_) => "INVALID_REQUEST",
        }
    }

    /// The message sent to the client.
    ///
    /// For database errors this is the server's own message (e.g. the
    /// violated constraint), without sqlx's wrapper text.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Database(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
            AppError::Database(other) => other.to_string(),
            AppError::Request(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = self.client_message();
        tracing::error!(error = %message, code, "Request failed");

        let body = json!({
            "error": message,
            "code": code,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
