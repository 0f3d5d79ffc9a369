mod instance;
mod ttl;

pub use instance::InstanceRecord;
pub use ttl::PoolTtl;
