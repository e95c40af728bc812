//! Configuration Module
//!
//! Handles loading and managing relay configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Lifetime of a stored report: 24 hours.
pub const DEFAULT_RECORD_TTL: u64 = 86_400;

/// Largest creation body accepted, in bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Relay configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds applied to every stored report
    pub record_ttl: u64,
    /// Interval in seconds between sweeps of expired records
    pub sweep_interval: u64,
    /// Maximum creation body size in bytes
    pub max_body_bytes: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8787)
    /// - `RECORD_TTL` - Report lifetime in seconds (default: 86400)
    /// - `SWEEP_INTERVAL` - Expired-record sweep frequency in seconds (default: 60)
    /// - `MAX_BODY_BYTES` - Creation body limit (default: 2 MiB)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            record_ttl: env_or("RECORD_TTL", defaults.record_ttl),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
            max_body_bytes: env_or("MAX_BODY_BYTES", defaults.max_body_bytes),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8787,
            record_ttl: DEFAULT_RECORD_TTL,
            sweep_interval: 60,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Parses `name` from the environment, falling back to `default`.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
