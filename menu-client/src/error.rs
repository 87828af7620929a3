//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error body `{code, error, details}`
    #[error("API error {}: {}", .0.code, .0.message)]
    Api(AppError),

    /// Non-success status without a decodable error body
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file access (session storage)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Error code reported by the server, if any
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api(err) => Some(err.code),
            _ => None,
        }
    }

    /// 404 of any kind (generic, product or review)
    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::Api(err) => err.http_status() == http::StatusCode::NOT_FOUND,
            ClientError::Status { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// 400 validation failure
    pub fn is_validation(&self) -> bool {
        match self {
            ClientError::Api(err) => err.http_status() == http::StatusCode::BAD_REQUEST,
            ClientError::Status { status, .. } => *status == 400,
            _ => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
