//! Redis-backed LeaseStore implementation.
//! The shared deployment: every process pointing at the same Redis
//! coordinates over the same queues.
//!
//! Enable with the `redis` feature flag:
//! ```toml
//! repool = { version = "0.1", features = ["redis"] }
//! ```

use redis::Commands;

use crate::error::{PoolError, Result};
use crate::store::LeaseStore;
use crate::types::InstanceRecord;

/// Drains KEYS[1], pushing the entry whose id matches ARGV[1] onto
/// KEYS[2] and every other entry back onto KEYS[1]. Evaluated inside
/// Redis, so the rebuild is one atomic round trip and no record is
/// ever in flight outside the store.
const RELOCATE_SCRIPT: &str = r#"
local n = redis.call('LLEN', KEYS[1])
local moved = 0
for i = 1, n do
    local entry = redis.call('LPOP', KEYS[1])
    if entry == false then
        break
    end
    local ok, decoded = pcall(cjson.decode, entry)
    if not ok then
        return redis.error_reply('corrupt record in ' .. KEYS[1])
    end
    if decoded['id'] == ARGV[1] then
        redis.call('RPUSH', KEYS[2], entry)
        moved = moved + 1
    else
        redis.call('RPUSH', KEYS[1], entry)
    end
end
return moved
"#;

/// A shared lease store backed by Redis lists.
///
/// Holds only the client handle; the underlying connection is acquired
/// and released per operation.
pub struct RedisLeaseStore {
    client: redis::Client,
    relocate: redis::Script,
}

impl RedisLeaseStore {
    /// Create a store for the given `redis://` URL. Connecting is lazy;
    /// the first operation surfaces an unreachable server.
    pub fn open(url: &str) -> Result<Self> {
        Ok(Self {
            client: redis::Client::open(url)?,
            relocate: redis::Script::new(RELOCATE_SCRIPT),
        })
    }

    fn connection(&self) -> Result<redis::Connection> {
        Ok(self.client.get_connection()?)
    }

    fn decode(queue: &str, raw: &str) -> Result<InstanceRecord> {
        serde_json::from_str(raw).map_err(|source| PoolError::CorruptRecord {
            queue: queue.to_string(),
            source,
        })
    }
}

impl LeaseStore for RedisLeaseStore {
    fn push_tail(&mut self, queue: &str, record: &InstanceRecord) -> Result<()> {
        let payload =
            serde_json::to_string(record).map_err(|e| PoolError::Store(e.to_string()))?;
        let mut con = self.connection()?;
        con.rpush::<_, _, ()>(queue, payload)?;
        Ok(())
    }

    fn pop_head(&mut self, queue: &str) -> Result<Option<InstanceRecord>> {
        let mut con = self.connection()?;
        let raw: Option<String> = con.lpop(queue, None)?;
        raw.map(|entry| Self::decode(queue, &entry)).transpose()
    }

    fn len(&mut self, queue: &str) -> Result<u64> {
        let mut con = self.connection()?;
        Ok(con.llen(queue)?)
    }

    fn relocate(&mut self, from: &str, to: &str, id: &str) -> Result<bool> {
        let mut con = self.connection()?;
        let moved: u64 = self
            .relocate
            .key(from)
            .key(to)
            .arg(id)
            .invoke(&mut con)?;
        Ok(moved > 0)
    }
}
