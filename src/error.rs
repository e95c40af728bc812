//! Error types for the relay
//!
//! Provides unified error handling using thiserror. Every variant renders as
//! a JSON `{"error": ...}` body inside the standard response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::json_response;
use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Relay Error Enum ==
/// Unified error type for the relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Request body could not be read as text
    #[error("Read body failed")]
    ReadBody,

    /// Request body was empty
    #[error("Empty body")]
    EmptyBody,

    /// Body failed percent-decoding or JSON parsing
    #[error("Invalid URL Encoded JSON")]
    Decode,

    /// Payload is not an object carrying an `errors` field
    #[error("Missing Required Field")]
    MissingField,

    /// Key absent or expired
    #[error("Key not found or expired")]
    NotFound,

    /// No route matched the method and path
    #[error("Not Found or Method Not Allowed")]
    MethodNotAllowed,

    /// Store backend failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Anything else unanticipated
    #[error("{0}")]
    Internal(String),
}

impl RelayError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::ReadBody
            | RelayError::EmptyBody
            | RelayError::Decode
            | RelayError::MissingField => StatusCode::BAD_REQUEST,
            RelayError::NotFound | RelayError::MethodNotAllowed => StatusCode::NOT_FOUND,
            RelayError::Store(_) | RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        json_response(status, &ErrorResponse::new(self.to_string()))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the relay.
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_bad_request() {
        for err in [
            RelayError::ReadBody,
            RelayError::EmptyBody,
            RelayError::Decode,
            RelayError::MissingField,
        ] {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RelayError::ReadBody.to_string(), "Read body failed");
        assert_eq!(RelayError::EmptyBody.to_string(), "Empty body");
        assert_eq!(RelayError::Decode.to_string(), "Invalid URL Encoded JSON");
        assert_eq!(RelayError::MissingField.to_string(), "Missing Required Field");
        assert_eq!(RelayError::NotFound.to_string(), "Key not found or expired");
        assert_eq!(
            RelayError::MethodNotAllowed.to_string(),
            "Not Found or Method Not Allowed"
        );
    }

    #[test]
    fn test_store_error_is_internal() {
        let err = RelayError::from(StoreError::Unavailable("down".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Store unavailable: down");
    }

    #[test]
    fn test_into_response_status_and_envelope() {
        let response = RelayError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
        assert_eq!(response.headers()["content-type"], "application/json");
    }
}
