//! Error types for webdemo-server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use webdemo_types::PayloadKind;

/// Process-level errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup or serve loop error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ServerError {
    fn from(err: config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

/// Payload reflection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// The payload matches none of the declared variants
    #[error("Unsupported payload variant: {0}")]
    UnsupportedVariant(String),
}

/// API-specific errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Payload reflection failed
    #[error(transparent)]
    Reflect(#[from] ReflectError),
}

impl ApiError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Internal(_) => "INTERNAL_ERROR",
            ApiError::Reflect(ReflectError::UnsupportedVariant(_)) => "UNSUPPORTED_VARIANT",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) | ApiError::Reflect(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(code = self.code(), error = %self, "Request failed");

        let details = match &self {
            ApiError::Reflect(_) => Some(serde_json::json!({
                "supported": PayloadKind::ALL.map(|kind| kind.as_str()),
            })),
            ApiError::Internal(_) => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for server operations
pub type ServerResult<T> = Result<T, ServerError>;
