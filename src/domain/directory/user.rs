//! User value object from the workspace directory.

use crate::domain::foundation::UserId;
use serde::{Deserialize, Serialize};

/// One selectable user, immutable once loaded from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    display_name: String,
}

impl User {
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }

    /// Returns the user's id.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the name shown in selector lists and participant chips.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
