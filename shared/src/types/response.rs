//! Response types shared between the core and the presentation layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unified error response structure
///
/// Carries a stable machine-readable code and a human-readable message.
/// Internal detail (store identifiers, backtraces) never appears here.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a single detail to the error response
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_fields() {
        let response = ErrorResponse::new("INVALID_CREDENTIALS", "Invalid credentials");
        assert_eq!(response.error, "INVALID_CREDENTIALS");
        assert_eq!(response.message, "Invalid credentials");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_detail() {
        let response = ErrorResponse::new("VALIDATION", "Passwords do not match")
            .with_detail("field", serde_json::json!("confirm_password"));
        assert_eq!(response.details.unwrap()["field"], "confirm_password");
    }
}
