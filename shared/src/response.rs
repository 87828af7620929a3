//! API Response types
//!
//! Success payloads are returned as bare JSON documents. Operations that
//! have nothing to return (deletes, review submission) answer with a
//! [`MessageResponse`].

use serde::{Deserialize, Serialize};

/// Confirmation body
///
/// ```json
/// { "message": "Product deleted successfully" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
