//! Docker-backed ResourceLifecycle implementation.
//!
//! Enable with the `docker` feature flag:
//! ```toml
//! repool = { version = "0.1", features = ["docker"] }
//! ```

use std::collections::HashMap;

use bollard::Docker;
use bollard::container::{KillContainerOptions, ListContainersOptions, StopContainerOptions};
use tokio::runtime::Runtime;

use crate::error::{PoolError, Result};
use crate::lifecycle::ResourceLifecycle;

/// Locates and tears down containers by their reuse label.
///
/// bollard speaks async; a private runtime bridges it into the pool's
/// synchronous, sequential call model.
pub struct DockerLifecycle {
    docker: Docker,
    runtime: Runtime,
}

impl DockerLifecycle {
    /// Connect using the local daemon defaults (unix socket, or the
    /// `DOCKER_HOST` environment).
    pub fn connect() -> Result<Self> {
        let runtime = Runtime::new().map_err(|e| PoolError::Lifecycle(e.to_string()))?;
        let docker = Docker::connect_with_local_defaults()?;
        Ok(Self { docker, runtime })
    }
}

impl ResourceLifecycle for DockerLifecycle {
    fn find_by_tag(&mut self, key: &str, value: &str) -> Result<Option<String>> {
        let mut filters = HashMap::new();
        filters.insert("label".to_string(), vec![format!("{key}={value}")]);
        // Stopped containers carry the label too.
        let options = ListContainersOptions {
            all: true,
            filters,
            ..Default::default()
        };
        let containers = self
            .runtime
            .block_on(self.docker.list_containers(Some(options)))?;
        Ok(containers.into_iter().find_map(|c| c.id))
    }

    fn stop(&mut self, resource_id: &str) -> Result<()> {
        self.runtime
            .block_on(self.docker.stop_container(resource_id, None::<StopContainerOptions>))?;
        Ok(())
    }

    fn kill(&mut self, resource_id: &str) -> Result<()> {
        self.runtime
            .block_on(self.docker.kill_container(resource_id, None::<KillContainerOptions<String>>))?;
        Ok(())
    }
}
