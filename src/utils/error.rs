//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors
///
/// Every variant names the offending field or file so startup failures are
/// actionable from the log line alone.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A typed field could not be parsed
    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A field parsed but failed validation
    #[error("Invalid configuration for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The override file exists but could not be read
    #[error("Failed to read override file {}: {reason}", path.display())]
    OverrideFile { path: PathBuf, reason: String },
}

impl ConfigError {
    /// Name of the field (or file) the error refers to
    pub fn field(&self) -> String {
        match self {
            ConfigError::InvalidValue { field, .. } | ConfigError::Invalid { field, .. } => {
                field.to_string()
            }
            ConfigError::OverrideFile { path, .. } => path.display().to_string(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A route group failed to build its handler group
    #[error("Route group '{group}' failed to register: {reason}")]
    Registration { group: String, reason: String },

    /// Request validation failed
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Record storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message
    pub message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Config(_)
            | AppError::Registration { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "invalid_request_error",
            AppError::NotFound(_) => "not_found_error",
            AppError::Storage(_) => "storage_error",
            AppError::Config(_) => "configuration_error",
            AppError::Registration { .. } => "registration_error",
            AppError::Internal(_) => "api_error",
        }
    }

    /// Whether the error is worth logging at error level
    pub fn should_log_details(&self) -> bool {
        !matches!(self, AppError::Validation(_) | AppError::NotFound(_))
    }

    /// Convert to the JSON error body
    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.should_log_details() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self.error_type(), status);
        }

        (status, Json(self.to_response_body())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
