use thiserror::Error;

/// Errors surfaced by pool operations.
///
/// Store failures are fatal for the calling operation: the coordinator
/// never fabricates a record or drops an entry it could not read back.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The lease store could not be reached or refused an operation.
    #[error("lease store error: {0}")]
    Store(String),

    /// A queue entry no longer decodes into an instance record. The
    /// sweep fails rather than skipping the entry, so store corruption
    /// is noticed instead of slowly leaking pool capacity.
    #[error("corrupt record in queue {queue}")]
    CorruptRecord {
        queue: String,
        #[source]
        source: serde_json::Error,
    },

    /// The lifecycle controller failed while locating or tearing down
    /// a backing resource.
    #[error("lifecycle controller error: {0}")]
    Lifecycle(String),

    #[cfg(feature = "redis")]
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[cfg(feature = "docker")]
    #[error("docker error: {0}")]
    Docker(#[from] bollard::errors::Error),
}

pub type Result<T> = std::result::Result<T, PoolError>;
