//! Fixed in-memory participant directory.

use async_trait::async_trait;

use crate::domain::directory::User;
use crate::domain::foundation::{DirectoryError, WorkspaceId};
use crate::ports::ParticipantDirectory;

/// Serves a fixed user list; can also simulate an unreachable directory.
pub struct InMemoryDirectory {
    users: Vec<User>,
    unreachable: bool,
}

impl InMemoryDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            unreachable: false,
        }
    }

    /// A directory that fails every lookup.
    pub fn unreachable() -> Self {
        Self {
            users: Vec::new(),
            unreachable: true,
        }
    }
}

#[async_trait]
impl ParticipantDirectory for InMemoryDirectory {
    async fn list(&self, _workspace_id: &WorkspaceId) -> Result<Vec<User>, DirectoryError> {
        if self.unreachable {
            return Err(DirectoryError::Unreachable("directory offline".to_string()));
        }
        Ok(self.users.clone())
    }
}
