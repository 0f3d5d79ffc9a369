//! # repool
//!
//! Shared-store pool coordinator for reusable test containers.
//! Hands out, locks, releases, and reaps instance identities through
//! two FIFO queues in a shared store, so concurrent test processes
//! reuse ephemeral resources instead of creating one per run.

pub mod client;
pub mod coordinator;
pub mod error;
pub mod lifecycle;
#[cfg(feature = "docker")]
#[path = "lifecycle_docker.rs"]
pub mod lifecycle_docker;
pub mod store;
#[path = "store_in_memory.rs"]
pub mod store_in_memory;
#[cfg(feature = "redis")]
#[path = "store_redis.rs"]
pub mod store_redis;
pub mod types;

#[cfg(test)]
mod record_test;
#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
