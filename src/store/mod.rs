//! Store Module
//!
//! The expiring key/value store the relay reads from and writes to.
//! [`KvStore`] is the seam; [`MemoryStore`] is the in-process backend.

mod clock;
mod memory;
mod record;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use memory::MemoryStore;
pub use record::StoredRecord;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 512;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 25 * 1024 * 1024; // 25 MiB

// == Store Error ==
/// Failures raised by a store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key longer than [`MAX_KEY_LENGTH`]
    #[error("Key exceeds maximum length of {} bytes", MAX_KEY_LENGTH)]
    KeyTooLong,

    /// Value larger than [`MAX_VALUE_SIZE`]
    #[error("Value exceeds maximum size of {} bytes", MAX_VALUE_SIZE)]
    ValueTooLarge,

    /// Stored text could not be parsed as JSON
    #[error("Stored value is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Backend could not serve the request
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// == KV Store Trait ==
/// An expiring, string-keyed store.
///
/// Writes to an existing key overwrite it and restart its TTL.
/// Expired records read as absent.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Stores `value` under `key`, expiring after `ttl_secs` seconds.
    async fn put(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), StoreError>;

    /// Returns the raw text stored under `key`, if present and unexpired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Returns the value stored under `key` parsed as JSON.
    async fn get_json(&self, key: &str) -> Result<Option<Value>, StoreError> {
        match self.get(key).await? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }
}
