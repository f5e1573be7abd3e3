//! Generic prototype framework.
//!
//! This module provides the building blocks for registering representative
//! instances by key and producing independent copies of them on demand.
//!
//! # Main Components
//!
//! - [`Clonable`] / [`Prototype`] - Capabilities a type implements to be registered
//! - [`PrototypeRegistry`] - Single-threaded keyed store of prototypes
//! - [`RegistryService`] / [`RegistryClient`] - Task-owned registry shared through a channel
//! - [`RegistryError`] - Common error types

pub mod core;
pub mod service;

// Re-export core types for convenience
pub use self::core::*;
pub use self::service::*;
