//! API Module
//!
//! HTTP entry point for the relay.
//!
//! # Endpoints
//! - `OPTIONS *` - CORS preflight
//! - `GET /` - Provisioning script (PowerShell clients only)
//! - `POST /` - Store a percent-encoded JSON report, returns its key
//! - `GET /:key` - Retrieve a stored report

pub mod handlers;
pub mod routes;
pub mod script;

pub use handlers::*;
pub use routes::create_router;
