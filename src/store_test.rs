#[cfg(test)]
mod tests {
    use crate::store::{LeaseStore, free_queue, lock_queue};
    use crate::store_in_memory::InMemoryLeaseStore;
    use crate::types::InstanceRecord;

    fn record(id: &str) -> InstanceRecord {
        InstanceRecord {
            id: id.to_string(),
            created_at: 1000,
            locked_at: 1000,
        }
    }

    #[test]
    fn test_queue_names_partition_by_resource_type() {
        assert_eq!(free_queue("sftp"), "sftp-free");
        assert_eq!(lock_queue("sftp"), "sftp-lock");
    }

    #[test]
    fn test_push_pop_is_fifo() {
        let mut store = InMemoryLeaseStore::new();
        for id in ["a", "b", "c"] {
            store.push_tail("q", &record(id)).unwrap();
        }

        assert_eq!(store.len("q").unwrap(), 3);
        assert_eq!(store.pop_head("q").unwrap().unwrap().id, "a");
        assert_eq!(store.pop_head("q").unwrap().unwrap().id, "b");
        assert_eq!(store.pop_head("q").unwrap().unwrap().id, "c");
        assert_eq!(store.pop_head("q").unwrap(), None);
    }

    #[test]
    fn test_pop_empty_queue_is_none() {
        let mut store = InMemoryLeaseStore::new();
        assert_eq!(store.pop_head("nothing-here").unwrap(), None);
        assert_eq!(store.len("nothing-here").unwrap(), 0);
    }

    #[test]
    fn test_relocate_moves_match_and_preserves_order() {
        let mut store = InMemoryLeaseStore::new();
        for id in ["a", "b", "c"] {
            store.push_tail("from", &record(id)).unwrap();
        }

        assert!(store.relocate("from", "to", "b").unwrap());

        assert_eq!(store.len("to").unwrap(), 1);
        assert_eq!(store.pop_head("to").unwrap().unwrap().id, "b");
        // Non-matching records keep their relative order.
        assert_eq!(store.pop_head("from").unwrap().unwrap().id, "a");
        assert_eq!(store.pop_head("from").unwrap().unwrap().id, "c");
    }

    #[test]
    fn test_relocate_without_match_requeues_everything() {
        let mut store = InMemoryLeaseStore::new();
        for id in ["a", "b"] {
            store.push_tail("from", &record(id)).unwrap();
        }

        assert!(!store.relocate("from", "to", "missing").unwrap());

        assert_eq!(store.len("to").unwrap(), 0);
        assert_eq!(store.pop_head("from").unwrap().unwrap().id, "a");
        assert_eq!(store.pop_head("from").unwrap().unwrap().id, "b");
    }
}
