//! Session store port (persistence collaborator).

use crate::domain::foundation::{SessionId, SubmissionError, WorkspaceId};
use crate::domain::session::{NewSessionRequest, SessionRecord};
use async_trait::async_trait;

/// Persistence collaborator for workspace sessions.
///
/// Validation has already happened client-side by the time a request
/// reaches this port; errors here are transport or server-side rejections.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a session, returning its new identifier.
    ///
    /// # Errors
    ///
    /// - `NetworkFailure` when the service cannot be reached
    /// - `ServerRejected` when the service refuses the request
    async fn create(
        &self,
        workspace_id: &WorkspaceId,
        request: NewSessionRequest,
    ) -> Result<SessionId, SubmissionError>;

    /// List the sessions of a workspace, newest first.
    async fn list(&self, workspace_id: &WorkspaceId)
        -> Result<Vec<SessionRecord>, SubmissionError>;
}
