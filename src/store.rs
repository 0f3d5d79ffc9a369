//! Contract for lease-store backends.
//!
//! A backend exposes named FIFO queues of serialized instance records:
//! entries pushed at the tail, popped from the head. Two queues exist
//! per resource type, and the store is the single source of truth
//! shared by every process coordinating over that type. Individual
//! operations are atomic; sequences of them are not (see the
//! coordinator for the consequences).

use crate::error::Result;
use crate::types::InstanceRecord;

/// Name of the free queue for a resource type.
pub fn free_queue(resource_type: &str) -> String {
    format!("{resource_type}-free")
}

/// Name of the locked queue for a resource type.
pub fn lock_queue(resource_type: &str) -> String {
    format!("{resource_type}-lock")
}

/// Defines the contract for pool storage backends.
pub trait LeaseStore {
    /// Append a record to the tail of `queue`.
    fn push_tail(&mut self, queue: &str, record: &InstanceRecord) -> Result<()>;

    /// Pop the head of `queue`, or `None` when it is empty.
    fn pop_head(&mut self, queue: &str) -> Result<Option<InstanceRecord>>;

    /// Current length of `queue`.
    fn len(&mut self, queue: &str) -> Result<u64>;

    /// Move the record matching `id` from `from` to the tail of `to`,
    /// preserving every other record in order. Returns whether a record
    /// was moved.
    ///
    /// The default body drains and rebuilds `from`, bounded by the
    /// length observed at call start; a record is transiently in
    /// neither queue between its pop and push. Backends with
    /// server-side scripting should override this with an atomic
    /// equivalent.
    fn relocate(&mut self, from: &str, to: &str, id: &str) -> Result<bool> {
        let mut moved = false;
        for _ in 0..self.len(from)? {
            match self.pop_head(from)? {
                Some(record) if record.id == id => {
                    self.push_tail(to, &record)?;
                    moved = true;
                }
                Some(record) => self.push_tail(from, &record)?,
                None => break,
            }
        }
        Ok(moved)
    }
}

impl<T: LeaseStore + ?Sized> LeaseStore for Box<T> {
    fn push_tail(&mut self, queue: &str, record: &InstanceRecord) -> Result<()> {
        (**self).push_tail(queue, record)
    }

    fn pop_head(&mut self, queue: &str) -> Result<Option<InstanceRecord>> {
        (**self).pop_head(queue)
    }

    fn len(&mut self, queue: &str) -> Result<u64> {
        (**self).len(queue)
    }

    fn relocate(&mut self, from: &str, to: &str, id: &str) -> Result<bool> {
        (**self).relocate(from, to, id)
    }
}
