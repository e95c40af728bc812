//! API Routes
//!
//! Configures the Axum router for the relay.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::{dispatch, AppState};
use crate::error::RelayError;

/// Creates the main router.
///
/// Every request lands on [`dispatch`], which does its own method/path
/// classification, so the router only contributes middleware.
///
/// # Middleware
/// - Catch panic: A panicking request still gets a JSON 500
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Renders a caught panic as an internal error.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Server Error".to_string()
    };

    RelayError::Internal(message).into_response()
}
