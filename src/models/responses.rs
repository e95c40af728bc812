//! Response DTOs for the relay API
//!
//! Defines the structure of outgoing JSON bodies.

use serde::Serialize;

/// Body returned when a report is stored (POST /)
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    /// Success message
    pub message: String,
    /// The generated key
    pub key: String,
}

impl CreatedResponse {
    /// Creates a new CreatedResponse
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            message: "Created successfully".to_string(),
            key: key.into(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_serialize() {
        let resp = CreatedResponse::new("PABCVDEFZ");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(
            json,
            r#"{"message":"Created successfully","key":"PABCVDEFZ"}"#
        );
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Empty body");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Empty body"}"#);
    }
}
