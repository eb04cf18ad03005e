//! Error handling for Wanderplan
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Main error type for the Wanderplan application
#[derive(Error, Debug)]
pub enum WanderplanError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Trip not found: {trip_id}")]
    TripNotFound { trip_id: i64 },

    #[error("Activity not found: {activity_id}")]
    ActivityNotFound { activity_id: i64 },

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Account pending validation by an administrator")]
    AccountNotValidated,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for Wanderplan operations
pub type Result<T> = std::result::Result<T, WanderplanError>;

impl WanderplanError {
    /// Check if the error is recoverable from the caller's point of view:
    /// the cache keeps its last-known-good state and the action can be retried.
    pub fn is_recoverable(&self) -> bool {
        match self {
            WanderplanError::Database(_) => false,
            WanderplanError::Migration(_) => false,
            WanderplanError::Config(_) => false,
            WanderplanError::PermissionDenied(_) => false,
            WanderplanError::UserNotFound { .. } => true,
            WanderplanError::TripNotFound { .. } => true,
            WanderplanError::ActivityNotFound { .. } => true,
            WanderplanError::EmailTaken(_) => false,
            WanderplanError::AccountNotValidated => false,
            WanderplanError::InvalidCredentials => false,
            WanderplanError::Http(_) => true,
            WanderplanError::Serialization(_) => false,
            WanderplanError::Io(_) => true,
            WanderplanError::Authentication(_) => false,
            WanderplanError::InvalidInput(_) => false,
            WanderplanError::ServiceUnavailable(_) => true,
        }
    }

    /// HTTP status code this error maps to on the API surface.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WanderplanError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            WanderplanError::Authentication(_) => StatusCode::UNAUTHORIZED,
            WanderplanError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            WanderplanError::AccountNotValidated => StatusCode::FORBIDDEN,
            WanderplanError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            WanderplanError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            WanderplanError::TripNotFound { .. } => StatusCode::NOT_FOUND,
            WanderplanError::ActivityNotFound { .. } => StatusCode::NOT_FOUND,
            WanderplanError::EmailTaken(_) => StatusCode::CONFLICT,
            WanderplanError::Http(_) => StatusCode::BAD_GATEWAY,
            WanderplanError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WanderplanError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = WanderplanError::TripNotFound { trip_id: 42 };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = WanderplanError::InvalidInput("end_date before start_date".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_unvalidated_account_maps_to_403() {
        assert_eq!(
            WanderplanError::AccountNotValidated.status_code(),
            StatusCode::FORBIDDEN
        );
    }
}
