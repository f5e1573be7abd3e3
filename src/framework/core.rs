//! # Core Prototype Framework
//!
//! This module defines the generic building blocks of the prototype registry.
//!
//! ## Key Types
//!
//! - [`Clonable`]: The capability of producing an independent duplicate of `self`.
//! - [`Prototype`]: A clonable entity that knows the registry key it belongs under.
//! - [`PrototypeRegistry`]: The keyed store handing out prototypes and clones.
//! - [`RegistryError`]: Common errors (e.g., NotRegistered, ServiceClosed).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Capability Traits)
// =============================================================================

/// The clonable capability.
///
/// # Architecture Note
/// This is a capability, not a base class. Any type opts in by describing how to
/// duplicate itself.
///
/// Implementations copy field by field and duplicate nested mutable storage
/// transitively, so the result shares nothing with the receiver. There is no
/// blanket impl over [`Clone`]: a derived `Clone` copies an `Arc<Mutex<_>>` shallowly.
pub trait Clonable: Sized {
    /// Returns a new instance whose observable state equals `self` right now.
    fn clone_object(&self) -> Self;
}

/// A clonable entity that can be stored in a [`PrototypeRegistry`].
///
/// We use "Associated Types" (type Key, type Overrides) so the registry for
/// `User` only accepts a user category as key and only user overrides as patch.
pub trait Prototype: Clonable + Debug + Send + Sync + 'static {
    /// The classification a prototype is registered under.
    type Key: Eq + Hash + Clone + Debug + Display + Send + Sync;

    /// Field replacements applied on top of a fresh clone.
    type Overrides: Debug + Send;

    /// The key this instance is registered under.
    fn prototype_key(&self) -> Self::Key;

    /// Returns a fresh duplicate with `overrides` applied. `self` is untouched.
    fn customize(&self, overrides: Self::Overrides) -> Self;
}

// =============================================================================
// 2. ERRORS
// =============================================================================

/// Errors that can occur within the registry framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum RegistryError {
    #[error("No prototype registered for key: {0}")]
    NotRegistered(String),
    #[error("Registry service closed")]
    ServiceClosed,
    #[error("Registry service dropped response channel")]
    ServiceDropped,
}

// =============================================================================
// 3. THE REGISTRY
// =============================================================================

/// Keyed store holding at most one prototype per key.
///
/// Prototypes are kept behind an [`Arc`], so [`get_prototype`](Self::get_prototype)
/// hands back the very instance that was registered (check with [`Arc::ptr_eq`]),
/// while [`clone_prototype`](Self::clone_prototype) hands back an owned duplicate.
///
/// **Concurrency Model**: none. The registry is a plain single-threaded value with
/// no internal locking. To share one across tasks, wrap it in a
/// [`RegistryService`](crate::framework::RegistryService).
#[derive(Debug)]
pub struct PrototypeRegistry<T: Prototype> {
    prototypes: HashMap<T::Key, Arc<T>>,
}

impl<T: Prototype> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }
}

impl<T: Prototype> PrototypeRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `prototype` under its own key, replacing any previous one.
    ///
    /// The displaced prototype, if any, is returned; callers are free to ignore it.
    pub fn add_prototype(&mut self, prototype: impl Into<Arc<T>>) -> Option<Arc<T>> {
        let prototype = prototype.into();
        let key = prototype.prototype_key();
        debug!(?prototype, "Add prototype");
        let replaced = self.prototypes.insert(key.clone(), prototype);
        info!(key = %key, replaced = replaced.is_some(), size = self.prototypes.len(), "Prototype registered");
        replaced
    }

    /// The stored prototype for `key` itself, not a copy. `None` if nothing is registered.
    pub fn get_prototype(&self, key: &T::Key) -> Option<Arc<T>> {
        let prototype = self.prototypes.get(key).cloned();
        debug!(key = %key, found = prototype.is_some(), "Get prototype");
        prototype
    }

    /// A fresh, independently owned duplicate of the prototype for `key`.
    ///
    /// # Errors
    /// [`RegistryError::NotRegistered`] if no prototype was registered for `key`.
    pub fn clone_prototype(&self, key: &T::Key) -> Result<T, RegistryError> {
        let prototype = self.lookup(key)?;
        debug!(key = %key, "Clone prototype");
        Ok(prototype.clone_object())
    }

    /// Like [`clone_prototype`](Self::clone_prototype), with `overrides` applied to the clone.
    ///
    /// # Errors
    /// [`RegistryError::NotRegistered`] if no prototype was registered for `key`.
    pub fn clone_with(&self, key: &T::Key, overrides: T::Overrides) -> Result<T, RegistryError> {
        let prototype = self.lookup(key)?;
        debug!(key = %key, ?overrides, "Clone prototype with overrides");
        Ok(prototype.customize(overrides))
    }

    /// Unregisters and returns the prototype for `key`.
    pub fn remove_prototype(&mut self, key: &T::Key) -> Option<Arc<T>> {
        let removed = self.prototypes.remove(key);
        info!(key = %key, removed = removed.is_some(), size = self.prototypes.len(), "Remove prototype");
        removed
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.prototypes.contains_key(key)
    }

    /// Registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &T::Key> {
        self.prototypes.keys()
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    fn lookup(&self, key: &T::Key) -> Result<&Arc<T>, RegistryError> {
        self.prototypes.get(key).ok_or_else(|| {
            warn!(key = %key, "Not registered");
            RegistryError::NotRegistered(key.to_string())
        })
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
