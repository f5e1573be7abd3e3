//! Error types for the User prototype registry.

use crate::framework::RegistryError;
use crate::model::Category;
use thiserror::Error;

/// Errors that can occur during user prototype operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// No prototype is registered for the requested category.
    #[error("No user prototype registered for category: {0}")]
    NotRegistered(Category),

    /// An error occurred while communicating with the registry service.
    #[error("Registry service error: {0}")]
    ServiceError(String),
}

impl UserError {
    /// Maps a framework error, attaching the category that was requested.
    pub fn from_registry(category: Category, e: RegistryError) -> Self {
        match e {
            RegistryError::NotRegistered(_) => UserError::NotRegistered(category),
            other => UserError::ServiceError(other.to_string()),
        }
    }
}
