//! User-specific prototype logic and trait implementations.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserRegistryClient;
use crate::framework::RegistryService;
use crate::model::User;

/// Channel capacity of the user registry service.
pub const BUFFER_SIZE: usize = 32;

/// Creates a new User registry service and its client.
pub fn new() -> (RegistryService<User>, UserRegistryClient) {
    let (service, generic_client) = RegistryService::new(BUFFER_SIZE);
    let client = UserRegistryClient::new(generic_client);

    (service, client)
}
