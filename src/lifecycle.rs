use crate::error::Result;

/// Label key stamped on every concrete container created for a pooled
/// instance; the instance id is the label value.
pub const REUSE_LABEL: &str = "reuse.UUID";

/// External controller able to locate, stop, and kill the concrete
/// resource tagged with a given instance id. The coordinator never
/// creates the resource itself; callers map an acquired id to a running
/// container on first use.
pub trait ResourceLifecycle {
    /// Find the resource carrying `value` under label `key`.
    fn find_by_tag(&mut self, key: &str, value: &str) -> Result<Option<String>>;

    /// Stop the resource gracefully.
    fn stop(&mut self, resource_id: &str) -> Result<()>;

    /// Force-kill the resource.
    fn kill(&mut self, resource_id: &str) -> Result<()>;
}

/// Controller for pools whose backing resources are torn down
/// elsewhere; every lookup comes back empty.
#[derive(Debug, Default)]
pub struct NoopLifecycle;

impl ResourceLifecycle for NoopLifecycle {
    fn find_by_tag(&mut self, _key: &str, _value: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn stop(&mut self, _resource_id: &str) -> Result<()> {
        Ok(())
    }

    fn kill(&mut self, _resource_id: &str) -> Result<()> {
        Ok(())
    }
}

impl<T: ResourceLifecycle + ?Sized> ResourceLifecycle for Box<T> {
    fn find_by_tag(&mut self, key: &str, value: &str) -> Result<Option<String>> {
        (**self).find_by_tag(key, value)
    }

    fn stop(&mut self, resource_id: &str) -> Result<()> {
        (**self).stop(resource_id)
    }

    fn kill(&mut self, resource_id: &str) -> Result<()> {
        (**self).kill(resource_id)
    }
}
