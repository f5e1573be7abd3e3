use crate::clients::UserRegistryClient;
use tracing::{error, info};

/// Owns the running user prototype service.
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new();
///
/// system.user_client.register_user(admin).await?;
/// let copy = system.user_client.clone_prototype(Category::Admin).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for interacting with the user registry service
    pub user_client: UserRegistryClient,

    /// Task handle of the running service (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    /// Spawns the user registry service on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn new() -> Self {
        info!("Starting registry system");
        let (service, user_client) = crate::user_prototype::new();
        let handle = tokio::spawn(service.run());

        Self { user_client, handle }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel; the service sees the closed receiver
    /// and leaves its event loop. Any other clones of the client keep the service
    /// alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the service shut down cleanly
    /// - `Err(String)` if the service task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Registry service failed: {:?}", e);
            return Err(format!("Registry service failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RegistrySystem {
    fn default() -> Self {
        Self::new()
    }
}
