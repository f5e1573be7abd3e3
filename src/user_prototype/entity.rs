//! Prototype trait implementations for the User domain type.
//!
//! This module contains the [`Clonable`] and [`Prototype`] implementations that let
//! [`User`] be stored in the generic [`crate::framework::PrototypeRegistry`].

use crate::framework::{Clonable, Prototype};
use crate::model::{Category, User, UserOverrides};

impl Clonable for User {
    /// Field-by-field copy. Every field is owned, so nothing is shared with `self`.
    fn clone_object(&self) -> Self {
        User::new(
            self.user_id(),
            self.username(),
            self.email(),
            self.display_name(),
            self.age(),
            self.category(),
        )
    }
}

impl Prototype for User {
    type Key = Category;
    type Overrides = UserOverrides;

    fn prototype_key(&self) -> Category {
        self.category()
    }

    /// Builds a new user from this one.
    ///
    /// # Fields Overridden
    /// - `user_id`, `username`, `email`, `display_name`, `age`
    ///
    /// The category is always carried over.
    fn customize(&self, overrides: UserOverrides) -> Self {
        User::new(
            overrides.user_id.unwrap_or(self.user_id()),
            overrides.username.unwrap_or_else(|| self.username().to_string()),
            overrides.email.unwrap_or_else(|| self.email().to_string()),
            overrides.display_name.unwrap_or_else(|| self.display_name().to_string()),
            overrides.age.unwrap_or(self.age()),
            self.category(),
        )
    }
}
