//! Pure data structures implementing the [`Prototype`](crate::framework::Prototype) trait.

pub mod category;
pub mod user;

pub use category::*;
pub use user::*;
