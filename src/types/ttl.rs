use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Expiry policy for pooled instances, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTtl {
    /// How long an instance may sit in the locked queue before it is
    /// considered abandoned and reclaimed to free.
    pub lock_ms: u64,
    /// Maximum total age of an instance before an abandoned lock leads
    /// to destruction instead of reuse.
    pub creation_ms: u64,
}

impl PoolTtl {
    pub fn new(lock: Duration, creation: Duration) -> Self {
        Self {
            lock_ms: lock.as_millis() as u64,
            creation_ms: creation.as_millis() as u64,
        }
    }
}

impl Default for PoolTtl {
    /// 5 minutes of lock, 30 minutes of total age.
    fn default() -> Self {
        Self {
            lock_ms: 5 * 60 * 1000,
            creation_ms: 30 * 60 * 1000,
        }
    }
}
