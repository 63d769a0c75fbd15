//! Explicit per-workspace context.
//!
//! Every component receives the context it needs through its constructor;
//! the context is created when a workspace is opened and dropped when it
//! is closed. No ambient mutable singletons.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::SessionSubmitter;
use crate::domain::directory::{ParticipantSelector, User};
use crate::domain::foundation::{DirectoryError, SubmissionError, WorkspaceId};
use crate::domain::session::SessionRecord;
use crate::ports::{ParticipantDirectory, SessionStore};

/// Per-workspace state shared by the session UI.
pub struct WorkspaceContext {
    workspace_id: WorkspaceId,
    directory: Arc<dyn ParticipantDirectory>,
    store: Arc<dyn SessionStore>,
    users: Arc<[User]>,
    sessions: Vec<SessionRecord>,
}

impl WorkspaceContext {
    /// Open a context for the given workspace. Nothing is fetched yet.
    pub fn open(
        workspace_id: WorkspaceId,
        directory: Arc<dyn ParticipantDirectory>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            workspace_id,
            directory,
            store,
            users: Arc::from(Vec::new()),
            sessions: Vec::new(),
        }
    }

    pub fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    /// Fetch and cache the participant directory.
    ///
    /// On failure the cache is cleared and the error returned, so callers
    /// render an explicit error state instead of a silent partial list.
    pub async fn load_directory(&mut self) -> Result<(), DirectoryError> {
        match self.directory.list(&self.workspace_id).await {
            Ok(users) => {
                debug!(workspace = %self.workspace_id, count = users.len(), "directory loaded");
                self.users = users.into();
                Ok(())
            }
            Err(err) => {
                warn!(workspace = %self.workspace_id, error = %err, "directory unreachable");
                self.users = Arc::from(Vec::new());
                Err(err)
            }
        }
    }

    /// Fetch and replace the cached session list.
    pub async fn refresh_sessions(&mut self) -> Result<&[SessionRecord], SubmissionError> {
        let sessions = self.store.list(&self.workspace_id).await?;
        debug!(workspace = %self.workspace_id, count = sessions.len(), "sessions refreshed");
        self.sessions = sessions;
        Ok(&self.sessions)
    }

    /// The cached directory, empty until [`load_directory`](Self::load_directory).
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The cached session list, empty until [`refresh_sessions`](Self::refresh_sessions).
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    /// A fresh selector over the cached directory.
    pub fn selector(&self) -> ParticipantSelector {
        ParticipantSelector::new(self.users.clone())
    }

    /// A submitter wired to this workspace's session store.
    pub fn submitter(&self) -> SessionSubmitter {
        SessionSubmitter::new(self.store.clone())
    }
}
