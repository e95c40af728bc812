//! Memory Store Module
//!
//! In-process [`KvStore`] backed by a HashMap with per-record expiration.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{
    Clock, KvStore, StoreError, StoredRecord, SystemClock, MAX_KEY_LENGTH, MAX_VALUE_SIZE,
};

// == Memory Store ==
/// Expiring key/value storage held in memory.
///
/// Expired records are invisible to readers immediately and are
/// physically removed by [`MemoryStore::sweep_expired`].
pub struct MemoryStore {
    /// Key-value storage
    records: RwLock<HashMap<String, StoredRecord>>,
    /// Time source for expiration
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store reading time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            clock,
        }
    }

    // == Sweep Expired ==
    /// Removes all expired records.
    ///
    /// Returns the number of records removed.
    pub async fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        let mut records = self.records.write().await;

        let before = records.len();
        records.retain(|_, record| !record.is_expired(now));
        before - records.len()
    }

    // == Length ==
    /// Returns the number of records held, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if no records are held.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn put(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), StoreError> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(StoreError::KeyTooLong);
        }
        if value.len() > MAX_VALUE_SIZE {
            return Err(StoreError::ValueTooLarge);
        }

        let record = StoredRecord::new(value, self.clock.now(), ttl_secs);
        self.records.write().await.insert(key.to_string(), record);

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = self.clock.now();
        let records = self.records.read().await;

        Ok(records
            .get(key)
            .filter(|record| !record.is_expired(now))
            .map(|record| record.value.clone()))
    }
}
