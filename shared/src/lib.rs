//! Shared types for the menu service
//!
//! Wire models, error types and response structures used by both
//! `menu-server` and `menu-client`.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};
pub use response::MessageResponse;
