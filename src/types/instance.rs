use nanoid::nanoid;
use serde::{Deserialize, Serialize};

use super::PoolTtl;

/// The pool's unit of identity for a reusable resource, independent of
/// whether a concrete container currently exists for it.
///
/// A record lives in exactly one of the two queues of its resource type
/// at any moment, except while in flight between a pop and the matching
/// push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    /// Opaque unique identifier, assigned once at creation.
    pub id: String,
    /// When the instance was minted (epoch millis). Immutable.
    pub created_at: u64,
    /// When the instance last entered the locked queue (epoch millis).
    pub locked_at: u64,
}

impl InstanceRecord {
    /// Mint a fresh instance, locked from birth.
    pub fn new(now: u64) -> Self {
        Self {
            id: nanoid!(),
            created_at: now,
            locked_at: now,
        }
    }

    /// The lock has sat untouched for longer than the lock TTL.
    pub fn lock_expired(&self, ttl: PoolTtl, now: u64) -> bool {
        now.saturating_sub(self.locked_at) > ttl.lock_ms
    }

    /// The instance has lived for longer than the creation TTL.
    pub fn creation_expired(&self, ttl: PoolTtl, now: u64) -> bool {
        now.saturating_sub(self.created_at) > ttl.creation_ms
    }
}
