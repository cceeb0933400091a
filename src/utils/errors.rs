//! Error handling for the portal
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Main error type for the portal
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Check-in not found: member {member_id} at event {event_id}")]
    CheckinNotFound { member_id: String, event_id: String },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Check-in window is closed for event {event_id}")]
    CheckinWindowClosed { event_id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;

impl PortalError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PortalError::Database(_) => false,
            PortalError::Migration(_) => false,
            PortalError::Config(_) => false,
            PortalError::CheckinNotFound { .. } => true,
            PortalError::EventNotFound { .. } => true,
            PortalError::CheckinWindowClosed { .. } => true,
            PortalError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortalError::Database(_) => ErrorSeverity::Critical,
            PortalError::Migration(_) => ErrorSeverity::Critical,
            PortalError::Config(_) => ErrorSeverity::Critical,
            PortalError::CheckinNotFound { .. } => ErrorSeverity::Info,
            PortalError::EventNotFound { .. } => ErrorSeverity::Info,
            PortalError::CheckinWindowClosed { .. } => ErrorSeverity::Info,
            PortalError::InvalidInput(_) => ErrorSeverity::Info,
        }
    }

    /// HTTP status reported to API callers
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortalError::CheckinNotFound { .. } | PortalError::EventNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            PortalError::CheckinWindowClosed { .. } => StatusCode::FORBIDDEN,
            PortalError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, severity = %self.severity(), "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
