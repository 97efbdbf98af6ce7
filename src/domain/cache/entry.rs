//! Cache entry type and freshness invariant

use serde::{Deserialize, Serialize};

/// A single cached value with its write timestamp and expiry budget
///
/// `written_at` is fixed at write time; validity is always derived from it
/// rather than mutated in place, so an entry can be re-checked against any
/// clock (including across a persistence round-trip).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached response body
    value: serde_json::Value,
    /// Milliseconds since epoch at write time, immutable thereafter
    written_at: u64,
    /// Per-entry expiry budget in milliseconds
    expiry_ms: u64,
}

impl CacheEntry {
    pub fn new(value: serde_json::Value, written_at: u64, expiry_ms: u64) -> Self {
        Self {
            value,
            written_at,
            expiry_ms,
        }
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    pub fn into_value(self) -> serde_json::Value {
        self.value
    }

    pub fn written_at(&self) -> u64 {
        self.written_at
    }

    pub fn expiry_ms(&self) -> u64 {
        self.expiry_ms
    }

    /// An entry is valid iff `now - written_at < expiry_ms`
    pub fn is_valid(&self, now_millis: u64) -> bool {
        now_millis.saturating_sub(self.written_at) < self.expiry_ms
    }
}
