use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a [`User`](crate::model::User), and the key prototypes are registered under.
///
/// Closed set: there is no way to add categories at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Admin,
    Reader,
    Writer,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 3] = [Category::Admin, Category::Reader, Category::Writer];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Admin => "ADMIN",
            Category::Reader => "READER",
            Category::Writer => "WRITER",
        };
        f.write_str(name)
    }
}
