//! Error types and API error body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the service, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level validation errors)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .or_else(|| errs.first().map(|e| e.code.to_string()))
                    .unwrap_or_default();
                (field.to_string(), message)
            })
            .collect();
        fields.sort();

        let names: Vec<&str> = fields.iter().map(|(f, _)| f.as_str()).collect();
        let mut err = Self::validation(format!(
            "Missing or invalid fields: {}",
            names.join(", ")
        ));
        for (field, message) in fields {
            err = err.with_detail(field, message);
        }
        err
    }
}

/// Error body returned by every failing endpoint
///
/// ```json
/// {
///   "code": 2,
///   "error": "Missing or invalid fields: name, price",
///   "details": { "name": "name is required", "price": "price is required" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Numeric [`ErrorCode`]
    pub code: u16,
    /// Human-readable message
    pub error: String,
    /// Additional error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ErrorResponse {
    /// Build the body for an error.
    ///
    /// System errors never leak their internal message: the body carries
    /// only the generic text of the code.
    pub fn from_error(err: &AppError) -> Self {
        if matches!(err.code.category(), ErrorCategory::System) {
            return Self {
                code: err.code.code(),
                error: err.code.message().to_string(),
                details: None,
            };
        }
        Self {
            code: err.code.code(),
            error: err.message.clone(),
            details: err.details.clone(),
        }
    }

    /// Rebuild an [`AppError`] on the receiving side
    pub fn into_error(self) -> AppError {
        let code = ErrorCode::try_from(self.code).unwrap_or(ErrorCode::Unknown);
        AppError {
            code,
            message: self.error,
            details: self.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Log system errors
        if matches!(self.code.category(), ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(ErrorResponse::from_error(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "name")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "name");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::not_found("Product abc");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product abc not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err = AppError::database("connection refused");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_hides_system_message() {
        let err = AppError::database("rocksdb: lock held by pid 42");
        let body = ErrorResponse::from_error(&err);
        assert_eq!(body.code, 9002);
        assert_eq!(body.error, "Database error");
        assert!(body.details.is_none());
    }

    #[test]
    fn test_error_response_keeps_client_message() {
        let err = AppError::validation("price must be >= 0").with_detail("price", "negative");
        let body = ErrorResponse::from_error(&err);
        assert_eq!(body.code, 2);
        assert_eq!(body.error, "price must be >= 0");
        assert_eq!(body.details.unwrap().get("price").unwrap(), "negative");
    }

    #[test]
    fn test_error_response_serialize_shape() {
        let body = ErrorResponse::from_error(&AppError::not_found("Review x"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], 3);
        assert_eq!(json["error"], "Review x not found");
        assert_eq!(json["details"]["resource"], "Review x");
    }

    #[test]
    fn test_error_response_into_error() {
        let json = r#"{"code":7001,"error":"Review abc not found"}"#;
        let body: ErrorResponse = serde_json::from_str(json).unwrap();
        let err = body.into_error();
        assert_eq!(err.code, ErrorCode::ReviewNotFound);
        assert_eq!(err.message, "Review abc not found");
    }

    #[derive(Validate)]
    struct PriceForm {
        #[validate(required(message = "name is required"))]
        name: Option<String>,
        #[validate(range(min = 0.0, message = "price must be >= 0"))]
        price: f64,
    }

    #[test]
    fn test_from_validation_errors_lists_fields() {
        let form = PriceForm {
            name: None,
            price: -1.0,
        };
        let err: AppError = form.validate().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Missing or invalid fields: name, price");
        let details = err.details.unwrap();
        assert_eq!(details.get("name").unwrap(), "name is required");
        assert_eq!(details.get("price").unwrap(), "price must be >= 0");
    }
}
