//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`RegistrySystem`] - Starts the registry service and shuts it down gracefully
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod registry_system;
pub mod tracing;

pub use registry_system::*;
pub use self::tracing::*;
