//! API Handlers
//!
//! The relay has a single entry point, [`dispatch`], which classifies each
//! request by method and path and runs the matching flow.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, USER_AGENT,
        },
        HeaderMap, HeaderValue, Method, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::api::script::{is_shell_client, PROVISIONING_SCRIPT};
use crate::config::Config;
use crate::error::{RelayError, Result};
use crate::keygen::generate_random_key;
use crate::models::{CreatedResponse, DiagnosticReport};
use crate::store::KvStore;

/// Produces a key for each newly stored report.
pub type KeyGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Application state shared across all requests.
#[derive(Clone)]
pub struct AppState {
    /// Backing key/value store
    pub store: Arc<dyn KvStore>,
    /// Key source for new reports
    pub keys: KeyGenerator,
    /// TTL in seconds for stored reports
    pub record_ttl: u64,
    /// Creation body limit in bytes
    pub max_body_bytes: usize,
}

impl AppState {
    /// Creates a new AppState over `store` with default settings.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::from_config(store, &Config::default())
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(store: Arc<dyn KvStore>, config: &Config) -> Self {
        Self {
            store,
            keys: Arc::new(generate_random_key),
            record_ttl: config.record_ttl,
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// Replaces the key source.
    pub fn with_key_generator(mut self, keys: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.keys = Arc::new(keys);
        self
    }
}

// == Routing ==
/// What a request asks for, decided from method, path and client identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// CORS preflight
    Preflight,
    /// PowerShell client fetching the provisioning script
    Script,
    /// Store a new report
    Create,
    /// Read a report by key
    Lookup(String),
    /// Nothing matched
    Unmatched,
}

impl Route {
    /// Classifies a request. The first matching case wins.
    pub fn classify(method: &Method, path: &str, user_agent: &str) -> Self {
        let key = path.strip_prefix('/').unwrap_or(path);

        if *method == Method::OPTIONS {
            Route::Preflight
        } else if *method == Method::GET && key.is_empty() && is_shell_client(user_agent) {
            Route::Script
        } else if *method == Method::POST && key.is_empty() {
            Route::Create
        } else if *method == Method::GET && !key.is_empty() {
            Route::Lookup(key.to_string())
        } else {
            Route::Unmatched
        }
    }
}

// == Response Envelope ==
/// Builds a response carrying the JSON content type and CORS headers.
pub fn envelope(status: StatusCode, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );

    response
}

/// Serializes `body` into an enveloped JSON response.
pub fn json_response(status: StatusCode, body: &impl Serialize) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => envelope(status, Body::from(bytes)),
        Err(e) => envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            Body::from(json!({ "error": e.to_string() }).to_string()),
        ),
    }
}

// == Dispatch ==
/// Handler for every request.
///
/// Always produces exactly one response; failures become JSON errors.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Result<Response> {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    match Route::classify(&method, uri.path(), user_agent) {
        Route::Preflight => Ok(envelope(StatusCode::OK, Body::empty())),
        Route::Script => Ok((
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            PROVISIONING_SCRIPT,
        )
            .into_response()),
        Route::Create => create_report(&state, body).await,
        Route::Lookup(key) => lookup_report(&state, &key).await,
        Route::Unmatched => Err(RelayError::MethodNotAllowed),
    }
}

/// Creation flow: read, decode, validate, store under a fresh key.
async fn create_report(state: &AppState, body: Body) -> Result<Response> {
    let bytes = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|_| RelayError::ReadBody)?;
    let text = String::from_utf8(bytes.to_vec()).map_err(|_| RelayError::ReadBody)?;

    let report = DiagnosticReport::parse(&text)?;

    let key = (state.keys)();
    state.store.put(&key, report.text, state.record_ttl).await?;

    info!(key = %key, ttl = state.record_ttl, "Stored diagnostic report");

    Ok(json_response(StatusCode::CREATED, &CreatedResponse::new(key)))
}

/// Lookup flow: return the stored JSON or 404.
async fn lookup_report(state: &AppState, key: &str) -> Result<Response> {
    match state.store.get_json(key).await? {
        Some(value) => Ok(json_response(StatusCode::OK, &value)),
        None => {
            debug!(key = %key, "Report not found or expired");
            Err(RelayError::NotFound)
        }
    }
}
