use std::collections::{HashMap, VecDeque};

use crate::error::Result;
use crate::store::LeaseStore;
use crate::types::InstanceRecord;

/// Process-local store for tests and single-process pools.
///
/// Coordination through it is only visible inside one process; point a
/// shared backend at the same queues to coordinate across processes.
#[derive(Debug, Default)]
pub struct InMemoryLeaseStore {
    queues: HashMap<String, VecDeque<InstanceRecord>>,
}

impl InMemoryLeaseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaseStore for InMemoryLeaseStore {
    fn push_tail(&mut self, queue: &str, record: &InstanceRecord) -> Result<()> {
        self.queues
            .entry(queue.to_string())
            .or_default()
            .push_back(record.clone());
        Ok(())
    }

    fn pop_head(&mut self, queue: &str) -> Result<Option<InstanceRecord>> {
        Ok(self.queues.get_mut(queue).and_then(|q| q.pop_front()))
    }

    fn len(&mut self, queue: &str) -> Result<u64> {
        Ok(self.queues.get(queue).map_or(0, |q| q.len() as u64))
    }
}
