//! Participant directory port.

use crate::domain::directory::User;
use crate::domain::foundation::{DirectoryError, WorkspaceId};
use async_trait::async_trait;

/// Read-only lookup of users eligible for selection within a workspace.
///
/// Implementations must fail loudly: an unreachable directory is an
/// explicit error, never an empty list indistinguishable from "no users".
#[async_trait]
pub trait ParticipantDirectory: Send + Sync {
    /// List every selectable user of the workspace, in directory order.
    ///
    /// # Errors
    ///
    /// - `Unreachable` when the directory cannot be fetched
    async fn list(&self, workspace_id: &WorkspaceId) -> Result<Vec<User>, DirectoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn participant_directory_is_object_safe() {
        fn _accepts_dyn(_directory: &dyn ParticipantDirectory) {}
    }
}
