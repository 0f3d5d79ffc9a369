//! The pool coordination protocol: acquire, release, reap, terminate.
//!
//! The coordinator holds no state of its own; both queues live in the
//! shared store, and whatever the store says is the truth for every
//! process. Individual store operations are atomic, but the pop/push
//! sequences here are not: between a pop and its matching push a record
//! is visible in neither queue, and a caller crashing inside that
//! window loses the record from the pool. The window is one record wide
//! and is an accepted, bounded risk of running against a store without
//! transactions; backends that can evaluate the rebuild server-side
//! close it for `release` (see `LeaseStore::relocate`).

use tracing::{debug, info};

use crate::error::Result;
use crate::lifecycle::{REUSE_LABEL, ResourceLifecycle};
use crate::store::{LeaseStore, free_queue, lock_queue};
use crate::types::{InstanceRecord, PoolTtl};

/// What a reap sweep did with each locked record it saw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Abandoned locks returned to the free queue.
    pub reclaimed: usize,
    /// Records past both TTLs, destroyed for good.
    pub destroyed: usize,
    /// Records still validly locked, requeued unchanged.
    pub retained: usize,
}

/// Hands out, locks, releases, and reaps instance identities for one
/// shared pool. Generic over the storage backend and the lifecycle
/// controller, both injected at construction; timestamps are passed in
/// explicitly so the protocol stays deterministic under test.
pub struct PoolCoordinator<S, L> {
    store: S,
    lifecycle: L,
    ttl: PoolTtl,
}

impl<S: LeaseStore, L: ResourceLifecycle> PoolCoordinator<S, L> {
    pub fn new(store: S, lifecycle: L) -> Self {
        Self {
            store,
            lifecycle,
            ttl: PoolTtl::default(),
        }
    }

    pub fn with_ttl(mut self, ttl: PoolTtl) -> Self {
        self.ttl = ttl;
        self
    }

    /// Hand out an identity for `resource_type`: the oldest free
    /// instance when one exists, a freshly minted one otherwise.
    ///
    /// The returned id is immediately usable as a reuse key; starting
    /// (or finding) the concrete container behind it is the caller's
    /// job. Exactly one record enters the locked queue per call.
    pub fn acquire(&mut self, resource_type: &str, now: u64) -> Result<String> {
        let record = match self.store.pop_head(&free_queue(resource_type))? {
            Some(mut record) => {
                record.locked_at = now;
                record
            }
            None => InstanceRecord::new(now),
        };
        self.store.push_tail(&lock_queue(resource_type), &record)?;
        info!(id = %record.id, resource_type, "locking instance");
        Ok(record.id)
    }

    /// Return `id` to the free queue, preserving every other locked
    /// record. An id with no matching record is a no-op: the record may
    /// already have been reaped by another process.
    pub fn release(&mut self, resource_type: &str, id: &str) -> Result<()> {
        let moved =
            self.store
                .relocate(&lock_queue(resource_type), &free_queue(resource_type), id)?;
        if moved {
            info!(id, resource_type, "releasing instance");
        } else {
            debug!(id, resource_type, "release matched no locked instance");
        }
        Ok(())
    }

    /// Sweep the locked queue exactly once, bounded by its length at
    /// call start. Expired locks are orphaned leases: their holder
    /// presumably crashed or forgot to release. An orphan past its
    /// creation TTL is destroyed; an orphan still within it is
    /// reclaimed to free. A record whose lock is still valid is
    /// requeued untouched whatever its age — only an expired lock can
    /// lead to destruction.
    pub fn release_all(&mut self, resource_type: &str, now: u64) -> Result<SweepStats> {
        let locked = lock_queue(resource_type);
        let mut stats = SweepStats::default();
        for _ in 0..self.store.len(&locked)? {
            let Some(record) = self.store.pop_head(&locked)? else {
                break;
            };
            if record.lock_expired(self.ttl, now) {
                if record.creation_expired(self.ttl, now) {
                    self.terminate(&record.id)?;
                    info!(id = %record.id, resource_type, "destroying expired instance");
                    stats.destroyed += 1;
                } else {
                    self.store.push_tail(&free_queue(resource_type), &record)?;
                    info!(id = %record.id, resource_type, "reclaiming abandoned instance");
                    stats.reclaimed += 1;
                }
            } else {
                self.store.push_tail(&locked, &record)?;
                stats.retained += 1;
            }
        }
        Ok(stats)
    }

    /// Stop, then force-kill, the concrete resource tagged with `id`.
    /// Absence of a tagged resource is an idempotent no-op.
    pub fn terminate(&mut self, id: &str) -> Result<()> {
        match self.lifecycle.find_by_tag(REUSE_LABEL, id)? {
            Some(resource_id) => {
                self.lifecycle.stop(&resource_id)?;
                self.lifecycle.kill(&resource_id)?;
                info!(id, resource_id = %resource_id, "terminated backing resource");
                Ok(())
            }
            None => {
                debug!(id, "no backing resource to terminate");
                Ok(())
            }
        }
    }

    /// Length of the free queue for `resource_type`.
    pub fn free_len(&mut self, resource_type: &str) -> Result<u64> {
        self.store.len(&free_queue(resource_type))
    }

    /// Length of the locked queue for `resource_type`.
    pub fn locked_len(&mut self, resource_type: &str) -> Result<u64> {
        self.store.len(&lock_queue(resource_type))
    }

    /// Take the injected store and lifecycle controller back out.
    pub fn into_parts(self) -> (S, L) {
        (self.store, self.lifecycle)
    }
}
