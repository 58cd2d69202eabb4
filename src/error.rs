//! Centralized error handling.
//!
//! All components return [`AppError`]; `main` is the single place that
//! decides exit behavior. Nothing is retried and nothing is downgraded to
//! a warning.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Env-file load failure at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failure or query failure against the database.
    #[error("Database error: {0}")]
    Database(String),

    /// Auto-migration failure for one registered model.
    #[error("Migration error: {0}")]
    Migration(String),

    /// Seed insertion failure.
    #[error("Seed error: {0}")]
    Seed(String),

    /// Listener bind or serve failure.
    #[error("Server error: {0}")]
    Server(String),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Database(_)
            | AppError::Migration(_)
            | AppError::Seed(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                AppError::NotFound("Database record not found".to_string())
            }
            sqlx::Error::Database(db_err) => AppError::Database(db_err.message().to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            AppError::NotFound("user".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn startup_errors_map_to_500() {
        assert_eq!(
            AppError::Config("bad env file".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Migration("users: boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Seed("insert failed".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
