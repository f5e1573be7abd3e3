use crate::clients::PrototypeClient;
use crate::framework::{RegistryClient, RegistryError};
use crate::model::{Category, User, UserOverrides};
use crate::user_prototype::UserError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the User registry service.
#[derive(Clone)]
pub struct UserRegistryClient {
    inner: RegistryClient<User>,
}

impl UserRegistryClient {
    pub fn new(inner: RegistryClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PrototypeClient<User> for UserRegistryClient {
    type Error = UserError;

    fn inner(&self) -> &RegistryClient<User> {
        &self.inner
    }

    fn map_error(category: Category, e: RegistryError) -> Self::Error {
        UserError::from_registry(category, e)
    }
}

impl UserRegistryClient {
    /// Registers `user` as the prototype of its category, returning the one it replaced.
    #[instrument(skip(self, user))]
    pub async fn register_user(&self, user: impl Into<Arc<User>>) -> Result<Option<Arc<User>>, UserError> {
        let user = user.into();
        let category = user.category();
        debug!(%category, user_id = user.user_id(), "Sending request");
        self.inner
            .add_prototype(user)
            .await
            .map_err(|e| UserError::from_registry(category, e))
    }

    /// Clones the prototype of `category` with the given fields replaced.
    #[instrument(skip(self))]
    pub async fn clone_user_with(&self, category: Category, overrides: UserOverrides) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .clone_with(category, overrides)
            .await
            .map_err(|e| UserError::from_registry(category, e))
    }

    /// Unregisters the prototype of `category`.
    #[instrument(skip(self))]
    pub async fn remove_user(&self, category: Category) -> Result<Option<Arc<User>>, UserError> {
        debug!("Sending request");
        self.inner
            .remove_prototype(category)
            .await
            .map_err(|e| UserError::from_registry(category, e))
    }
}
