//! # Prototype Registry
//!
//! > **New objects by copying a representative instance, not by constructing from scratch.**
//!
//! A [`User`](model::User) can duplicate itself through the
//! [`Clonable`](framework::Clonable) capability, and a
//! [`PrototypeRegistry`](framework::PrototypeRegistry) keeps one prototype per
//! [`Category`](model::Category), handing out either the stored instance or a fresh clone.
//!
//! ## Core Concepts
//!
//! ### Same instance vs. fresh clone
//! - `get_prototype` returns the registered `Arc` itself (`Arc::ptr_eq` holds), or `None`.
//! - `clone_prototype` returns an owned duplicate, or `RegistryError::NotRegistered`.
//!
//! A miss on `get_prototype` is an ordinary answer. A miss on `clone_prototype`
//! is an error the caller must handle.
//!
//! ### Generics: `T: Prototype`
//! The registry is written once against the [`Prototype`](framework::Prototype) trait.
//! `User` is the only implementation in this crate.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: capability traits, the single-threaded registry, and a task-owned
//!   [`RegistryService`](framework::RegistryService) for sharing one registry across tasks.
//!
//! ### 2. The Data ([`model`])
//! - **Role**: [`User`](model::User), [`Category`](model::Category) and
//!   [`UserOverrides`](model::UserOverrides).
//!
//! ### 3. The Binding ([`user_prototype`])
//! - **Role**: `Clonable`/`Prototype` for `User`, plus [`UserError`](user_prototype::UserError).
//!
//! ### 4. The Interface ([`clients`]) and the Orchestrator ([`lifecycle`])
//! - **Key items**: [`UserRegistryClient`](clients::UserRegistryClient),
//!   [`RegistrySystem`](lifecycle::RegistrySystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## Quick Start
//!
//! ```
//! use prototype_registry::framework::PrototypeRegistry;
//! use prototype_registry::model::{Category, User};
//! use std::sync::Arc;
//!
//! let admin = Arc::new(User::new(1, "testuser", "test@example.com", "Test User", 25, Category::Admin));
//!
//! let mut registry: PrototypeRegistry<User> = PrototypeRegistry::new();
//! registry.add_prototype(admin.clone());
//!
//! let stored = registry.get_prototype(&Category::Admin).unwrap();
//! assert!(Arc::ptr_eq(&admin, &stored));
//!
//! let copy = registry.clone_prototype(&Category::Admin).unwrap();
//! assert_eq!(copy.username(), "testuser");
//! assert!(registry.clone_prototype(&Category::Writer).is_err());
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod user_prototype;
