//! # Registry Service
//!
//! A [`PrototypeRegistry`] has no internal locking. When one registry must be shared
//! across tasks, [`RegistryService`] owns it inside a single Tokio task and serves
//! typed requests sent through cheap, cloneable [`RegistryClient`] handles.
//!
//! Requests are processed sequentially, so the registry needs no `Mutex`.

use crate::framework::core::{Prototype, PrototypeRegistry, RegistryError};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Type alias for the one-shot response channel used by the service.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

/// Message type sent to the service. One variant per registry operation.
#[derive(Debug)]
pub enum RegistryRequest<T: Prototype> {
    Add {
        prototype: Arc<T>,
        respond_to: Response<Option<Arc<T>>>,
    },
    Get {
        key: T::Key,
        respond_to: Response<Option<Arc<T>>>,
    },
    Clone {
        key: T::Key,
        respond_to: Response<T>,
    },
    CloneWith {
        key: T::Key,
        overrides: T::Overrides,
        respond_to: Response<T>,
    },
    Remove {
        key: T::Key,
        respond_to: Response<Option<Arc<T>>>,
    },
}

/// The "server" half: owns the registry and the receiving end of the channel.
pub struct RegistryService<T: Prototype> {
    receiver: mpsc::Receiver<RegistryRequest<T>>,
    registry: PrototypeRegistry<T>,
}

impl<T: Prototype> RegistryService<T> {
    pub fn new(buffer_size: usize) -> (Self, RegistryClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            registry: PrototypeRegistry::new(),
        };
        (service, RegistryClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "prototype_registry::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Registry service started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::Add { prototype, respond_to } => {
                    let replaced = self.registry.add_prototype(prototype);
                    let _ = respond_to.send(Ok(replaced));
                }
                RegistryRequest::Get { key, respond_to } => {
                    let _ = respond_to.send(Ok(self.registry.get_prototype(&key)));
                }
                RegistryRequest::Clone { key, respond_to } => {
                    let _ = respond_to.send(self.registry.clone_prototype(&key));
                }
                RegistryRequest::CloneWith { key, overrides, respond_to } => {
                    let _ = respond_to.send(self.registry.clone_with(&key, overrides));
                }
                RegistryRequest::Remove { key, respond_to } => {
                    let _ = respond_to.send(Ok(self.registry.remove_prototype(&key)));
                }
            }
        }

        debug!(entity_type, keys = ?self.registry.keys().collect::<Vec<_>>(), "Final registry state");
        info!(entity_type, size = self.registry.len(), "Shutdown");
    }
}

/// A cloneable handle for talking to a [`RegistryService`].
///
/// Lookup misses keep the registry's asymmetry: `get_prototype` yields `Ok(None)`,
/// `clone_prototype` yields `Err(RegistryError::NotRegistered)`.
pub struct RegistryClient<T: Prototype> {
    sender: mpsc::Sender<RegistryRequest<T>>,
}

impl<T: Prototype> Clone for RegistryClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Prototype> RegistryClient<T> {
    pub fn new(sender: mpsc::Sender<RegistryRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn add_prototype(&self, prototype: impl Into<Arc<T>>) -> Result<Option<Arc<T>>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistryRequest::Add { prototype: prototype.into(), respond_to }).await?;
        response.await.map_err(|_| RegistryError::ServiceDropped)?
    }

    pub async fn get_prototype(&self, key: T::Key) -> Result<Option<Arc<T>>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistryRequest::Get { key, respond_to }).await?;
        response.await.map_err(|_| RegistryError::ServiceDropped)?
    }

    pub async fn clone_prototype(&self, key: T::Key) -> Result<T, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistryRequest::Clone { key, respond_to }).await?;
        response.await.map_err(|_| RegistryError::ServiceDropped)?
    }

    pub async fn clone_with(&self, key: T::Key, overrides: T::Overrides) -> Result<T, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistryRequest::CloneWith { key, overrides, respond_to }).await?;
        response.await.map_err(|_| RegistryError::ServiceDropped)?
    }

    pub async fn remove_prototype(&self, key: T::Key) -> Result<Option<Arc<T>>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistryRequest::Remove { key, respond_to }).await?;
        response.await.map_err(|_| RegistryError::ServiceDropped)?
    }

    async fn send(&self, request: RegistryRequest<T>) -> Result<(), RegistryError> {
        self.sender.send(request).await.map_err(|_| RegistryError::ServiceClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Clonable;
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Slot(u8);

    impl fmt::Display for Slot {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "slot_{}", self.0)
        }
    }

    #[derive(Debug, PartialEq)]
    struct Template {
        slot: Slot,
        body: String,
    }

    impl Clonable for Template {
        fn clone_object(&self) -> Self {
            Self {
                slot: self.slot,
                body: self.body.clone(),
            }
        }
    }

    impl Prototype for Template {
        type Key = Slot;
        type Overrides = String;

        fn prototype_key(&self) -> Slot {
            self.slot
        }

        fn customize(&self, body: String) -> Self {
            Self { slot: self.slot, body }
        }
    }

    #[tokio::test]
    async fn test_service_round_trip() {
        let (service, client) = RegistryService::<Template>::new(8);
        let handle = tokio::spawn(service.run());

        let template = Arc::new(Template { slot: Slot(1), body: "hello".into() });
        let replaced = client.add_prototype(template.clone()).await.unwrap();
        assert!(replaced.is_none());

        // Same allocation crosses the channel both ways.
        let stored = client.get_prototype(Slot(1)).await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&template, &stored));

        let copy = client.clone_prototype(Slot(1)).await.unwrap();
        assert_eq!(copy, *template);

        let custom = client.clone_with(Slot(1), "bye".into()).await.unwrap();
        assert_eq!(custom.body, "bye");

        assert!(client.get_prototype(Slot(2)).await.unwrap().is_none());
        let err = client.clone_prototype(Slot(2)).await.unwrap_err();
        assert_eq!(err, RegistryError::NotRegistered("slot_2".to_string()));
        assert_eq!(err.to_string(), "No prototype registered for key: slot_2");

        let removed = client.remove_prototype(Slot(1)).await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&template, &removed));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_service() {
        let (service, client) = RegistryService::<Template>::new(1);
        drop(service);

        let err = client.clone_prototype(Slot(1)).await.unwrap_err();
        assert_eq!(err, RegistryError::ServiceClosed);
    }
}
