//! Type-safe wrappers around [`RegistryClient`](crate::framework::RegistryClient).

pub mod prototype_client;
pub mod user_client;

pub use prototype_client::*;
pub use user_client::*;
