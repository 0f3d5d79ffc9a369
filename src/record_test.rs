#[cfg(test)]
mod tests {
    use crate::types::{InstanceRecord, PoolTtl};

    const MIN: u64 = 60 * 1000;

    #[test]
    fn test_default_ttl_policy() {
        let ttl = PoolTtl::default();
        assert_eq!(ttl.lock_ms, 5 * MIN);
        assert_eq!(ttl.creation_ms, 30 * MIN);
    }

    #[test]
    fn test_minted_records_are_distinct_and_locked_from_birth() {
        let a = InstanceRecord::new(1000);
        let b = InstanceRecord::new(1000);
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, 1000);
        assert_eq!(a.locked_at, 1000);
    }

    #[test]
    fn test_lock_expiry_is_strictly_greater_than_ttl() {
        let ttl = PoolTtl::default();
        let record = InstanceRecord::new(1000);

        // Exactly at the TTL boundary: still valid.
        assert!(!record.lock_expired(ttl, 1000 + ttl.lock_ms));
        // One past it: expired.
        assert!(record.lock_expired(ttl, 1000 + ttl.lock_ms + 1));
    }

    #[test]
    fn test_creation_expiry_is_strictly_greater_than_ttl() {
        let ttl = PoolTtl::default();
        let record = InstanceRecord::new(1000);

        assert!(!record.creation_expired(ttl, 1000 + ttl.creation_ms));
        assert!(record.creation_expired(ttl, 1000 + ttl.creation_ms + 1));
    }

    #[test]
    fn test_refreshed_lock_outlives_creation_age() {
        let ttl = PoolTtl::default();
        let mut record = InstanceRecord::new(1000);

        // Re-locked long after creation: lock clock restarts, creation
        // clock does not.
        record.locked_at = 1000 + ttl.creation_ms + MIN;
        let now = record.locked_at + 1;
        assert!(!record.lock_expired(ttl, now));
        assert!(record.creation_expired(ttl, now));
    }

    #[test]
    fn test_wire_format_round_trips_all_fields() {
        let record = InstanceRecord {
            id: "inst-1".to_string(),
            created_at: 123,
            locked_at: 456,
        };
        let raw = serde_json::to_string(&record).unwrap();
        let back: InstanceRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, record);
    }
}
