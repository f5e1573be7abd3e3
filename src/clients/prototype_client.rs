use crate::framework::{Prototype, RegistryClient, RegistryError};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for domain-specific clients to inherit the standard registry lookups.
///
/// Provides default implementations of `get_prototype` and `clone_prototype`
/// that translate framework errors into the domain's own error type.
#[async_trait]
pub trait PrototypeClient<T: Prototype>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic RegistryClient.
    fn inner(&self) -> &RegistryClient<T>;

    /// Map framework errors to the domain error type for a lookup of `key`.
    fn map_error(key: T::Key, e: RegistryError) -> Self::Error;

    /// Fetch the registered prototype itself. `Ok(None)` if nothing is registered.
    #[tracing::instrument(skip(self))]
    async fn get_prototype(&self, key: T::Key) -> Result<Option<Arc<T>>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .get_prototype(key.clone())
            .await
            .map_err(|e| Self::map_error(key, e))
    }

    /// Fetch a fresh clone of the registered prototype.
    #[tracing::instrument(skip(self))]
    async fn clone_prototype(&self, key: T::Key) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .clone_prototype(key.clone())
            .await
            .map_err(|e| Self::map_error(key, e))
    }
}
