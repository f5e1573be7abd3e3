use crate::model::Category;
use serde::{Deserialize, Serialize};

/// A user account, used as the prototype entity of the registry.
///
/// # Prototype Framework
/// This struct implements the [`Clonable`](crate::framework::Clonable) and
/// [`Prototype`](crate::framework::Prototype) traits, allowing it to be stored in a
/// [`PrototypeRegistry`](crate::framework::PrototypeRegistry) under its [`Category`].
///
/// Fields are read-only after construction. `User` does not derive `Clone`;
/// duplicates are made with [`Clonable::clone_object`](crate::framework::Clonable::clone_object).
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    user_id: i64,
    username: String,
    email: String,
    display_name: String,
    age: i32,
    category: Category,
}

/// Fields to replace when deriving a new user from a prototype.
///
/// The category is not overridable, so a customized clone stays in its category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserOverrides {
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub age: Option<i32>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Notes
    /// Values are stored verbatim. Nothing is validated: a malformed email or a
    /// negative age is the caller's business.
    pub fn new(
        user_id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
        age: i32,
        category: Category,
    ) -> Self {
        Self {
            user_id,
            username: username.into(),
            email: email.into(),
            display_name: display_name.into(),
            age,
            category,
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
