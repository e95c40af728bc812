//! Stored Record Module
//!
//! A single stored value with its expiration instant.

use chrono::{DateTime, Duration, Utc};

// == Stored Record ==
/// Represents one stored value and its lifetime.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    /// The stored text, exactly as written
    pub value: String,
    /// When the record stops being readable
    pub expires_at: DateTime<Utc>,
}

impl StoredRecord {
    // == Constructor ==
    /// Creates a record written at `now` that lives for `ttl_secs` seconds.
    pub fn new(value: String, now: DateTime<Utc>, ttl_secs: u64) -> Self {
        let ttl = Duration::try_seconds(ttl_secs.min(i64::MAX as u64) as i64)
            .unwrap_or(Duration::MAX);

        Self {
            value,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    // == Is Expired ==
    /// A record is expired once `now` reaches its expiration instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
