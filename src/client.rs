//! High-level ergonomic client that wraps the coordinator + pluggable
//! storage behind wall-clock time. This is the surface test setup and
//! teardown code talks to.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::coordinator::{PoolCoordinator, SweepStats};
use crate::error::Result;
use crate::lifecycle::{NoopLifecycle, ResourceLifecycle};
use crate::store::LeaseStore;
use crate::store_in_memory::InMemoryLeaseStore;
use crate::types::PoolTtl;

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// The main entry point for sharing pooled instances. Owns an injected
/// storage backend and lifecycle controller and stamps every operation
/// with the current wall clock.
pub struct PoolClient {
    coordinator: PoolCoordinator<Box<dyn LeaseStore + Send>, Box<dyn ResourceLifecycle + Send>>,
}

impl PoolClient {
    /// Process-local pool with no backing-resource teardown.
    pub fn new() -> Self {
        Self::with_parts(Box::new(InMemoryLeaseStore::new()), Box::new(NoopLifecycle))
    }

    /// Wire an explicit store and lifecycle controller. Dependencies
    /// are owned by the client from here on; there is no global state.
    pub fn with_parts(
        store: Box<dyn LeaseStore + Send>,
        lifecycle: Box<dyn ResourceLifecycle + Send>,
    ) -> Self {
        Self {
            coordinator: PoolCoordinator::new(store, lifecycle),
        }
    }

    /// Pool shared by every process pointing at the same Redis URL.
    /// Backing resources are torn down elsewhere.
    #[cfg(feature = "redis")]
    pub fn with_redis(url: &str) -> Result<Self> {
        let store = crate::store_redis::RedisLeaseStore::open(url)?;
        Ok(Self::with_parts(Box::new(store), Box::new(NoopLifecycle)))
    }

    /// The full cross-process setup: Redis coordination plus Docker
    /// teardown of expired instances.
    #[cfg(all(feature = "redis", feature = "docker"))]
    pub fn with_redis_and_docker(url: &str) -> Result<Self> {
        let store = crate::store_redis::RedisLeaseStore::open(url)?;
        let lifecycle = crate::lifecycle_docker::DockerLifecycle::connect()?;
        Ok(Self::with_parts(Box::new(store), Box::new(lifecycle)))
    }

    /// Override the default 5 min / 30 min expiry policy.
    pub fn with_ttl(mut self, ttl: PoolTtl) -> Self {
        self.coordinator = self.coordinator.with_ttl(ttl);
        self
    }

    /// Hand out an identity for `resource_type`, reusing a free
    /// instance when one exists.
    pub fn acquire(&mut self, resource_type: &str) -> Result<String> {
        self.coordinator.acquire(resource_type, now_ms())
    }

    /// Return `id` to the free queue; unknown ids are a no-op.
    pub fn release(&mut self, resource_type: &str, id: &str) -> Result<()> {
        self.coordinator.release(resource_type, id)
    }

    /// Reap the locked queue: reclaim abandoned instances, destroy the
    /// ones past both TTLs.
    pub fn release_all(&mut self, resource_type: &str) -> Result<SweepStats> {
        self.coordinator.release_all(resource_type, now_ms())
    }

    /// Tear down the backing resource tagged with `id`, if any.
    pub fn terminate(&mut self, id: &str) -> Result<()> {
        self.coordinator.terminate(id)
    }

    pub fn free_len(&mut self, resource_type: &str) -> Result<u64> {
        self.coordinator.free_len(resource_type)
    }

    pub fn locked_len(&mut self, resource_type: &str) -> Result<u64> {
        self.coordinator.locked_len(resource_type)
    }
}

impl Default for PoolClient {
    fn default() -> Self {
        Self::new()
    }
}
