use crate::client_actor;
use crate::config::AdminConfig;
use crate::services::ClientService;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// Owns the running actors behind the admin console.
///
/// # Example
///
/// ```ignore
/// let system = AdminSystem::new(&AdminConfig::default());
/// let id = system.client_service.create_client().await?;
/// system.shutdown().await?;
/// ```
pub struct AdminSystem {
    /// Create-record service and snapshot source for the client list.
    pub client_service: ClientService,

    handles: Vec<JoinHandle<()>>,
}

impl AdminSystem {
    /// Spawns the client actor. Must be called inside a Tokio runtime.
    pub fn new(config: &AdminConfig) -> Self {
        let (client_actor, client_service) = client_actor::new(config.channel_buffer);
        let client_handle = tokio::spawn(client_actor.run());

        Self {
            client_service,
            handles: vec![client_handle],
        }
    }

    /// Drops the services and waits for every actor to drain.
    ///
    /// Actors stop once every clone of their service is gone, so views holding a
    /// clone must be dropped first.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");
        drop(self.client_service);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
