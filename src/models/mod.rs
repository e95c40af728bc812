//! Request and Response models for the relay API
//!
//! This module defines the report accepted on creation and the
//! bodies serialized back to clients.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::DiagnosticReport;
pub use responses::{CreatedResponse, ErrorResponse};
